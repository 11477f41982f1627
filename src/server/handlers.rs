//! Request handlers. Each handler performs one registry call under the
//! state lock. Operations on unknown ids are ignored and the client is sent
//! back to the listing; only the JSON read API reports them as 404.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use tracing::{debug, info};

use super::page::render_index;
use super::state::AppState;
use crate::dto::{AmountForm, CapacityForm, CreateForm, ErrorBody, IndexQuery, UnitRow};

/// A body that is missing or not form-encoded is treated like an empty form,
/// so every numeric field takes its default.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    form.map(|Form(inner)| inner).unwrap_or_else(|rejection| {
        debug!("Unreadable form, using defaults: {rejection}");
        T::default()
    })
}

fn to_index() -> Redirect {
    Redirect::to("/")
}

fn to_selected(id: u64) -> Redirect {
    Redirect::to(&format!("/?selected={id}"))
}

/// Snapshot of all entries sorted by id for deterministic output.
fn sorted_rows(state: &AppState) -> Vec<UnitRow> {
    let mut rows: Vec<_> = state.with_units(|units| units.iter().map(UnitRow::from).collect());
    rows.sort_by_key(|row| row.id);
    rows
}

pub(super) async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    Html(render_index(&sorted_rows(&state), query.selected))
}

pub(super) async fn create_unit(
    State(state): State<AppState>,
    form: Result<Form<CreateForm>, FormRejection>,
) -> Redirect {
    let form = form_or_default(form);
    let (capacity, initial_balance) = (form.capacity(), form.initial_balance());
    let id = state.with_units(|units| units.create(capacity, initial_balance));
    info!(id, %capacity, %initial_balance, "Warehouse created");
    to_selected(id)
}

pub(super) async fn edit_unit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    form: Result<Form<CapacityForm>, FormRejection>,
) -> Redirect {
    let capacity = form_or_default(form).capacity();
    match state.with_units(|units| units.edit(id, capacity)) {
        Ok(()) => {
            info!(id, %capacity, "Warehouse capacity changed");
            to_selected(id)
        }
        Err(e) => {
            debug!("Edit ignored: {e}");
            to_index()
        }
    }
}

pub(super) async fn delete_unit(State(state): State<AppState>, Path(id): Path<u64>) -> Redirect {
    match state.with_units(|units| units.delete(id)) {
        Ok(()) => info!(id, "Warehouse deleted"),
        Err(e) => debug!("Delete ignored: {e}"),
    }
    to_index()
}

pub(super) async fn deposit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    form: Result<Form<AmountForm>, FormRejection>,
) -> Redirect {
    let amount = form_or_default(form).amount();
    match state.with_units(|units| units.deposit(id, amount)) {
        Ok(()) => {
            debug!(id, %amount, "Deposited");
            to_selected(id)
        }
        Err(e) => {
            debug!("Deposit ignored: {e}");
            to_index()
        }
    }
}

pub(super) async fn withdraw(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    form: Result<Form<AmountForm>, FormRejection>,
) -> Redirect {
    let amount = form_or_default(form).amount();
    match state.with_units(|units| units.withdraw(id, amount)) {
        Ok(removed) => {
            debug!(id, %amount, %removed, "Withdrew");
            to_selected(id)
        }
        Err(e) => {
            debug!("Withdraw ignored: {e}");
            to_index()
        }
    }
}

pub(super) async fn get_unit(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    let row = state.with_units(|units| units.get(id).map(|unit| UnitRow::from((id, unit))));
    match row {
        Some(row) => Json(row).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: "Warehouse not found",
            }),
        )
            .into_response(),
    }
}

pub(super) async fn list_units(State(state): State<AppState>) -> Json<Vec<UnitRow>> {
    Json(sorted_rows(&state))
}
