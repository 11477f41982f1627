use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{handlers, health};

pub fn init(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/warehouse/create", post(handlers::create_unit))
        .route("/warehouse/{id}/edit", post(handlers::edit_unit))
        .route("/warehouse/{id}/delete", post(handlers::delete_unit))
        .route("/warehouse/{id}/add", post(handlers::deposit))
        .route("/warehouse/{id}/remove", post(handlers::withdraw))
        .route("/api/warehouse/{id}", get(handlers::get_unit))
        .route("/api/warehouses", get(handlers::list_units))
        .route("/health", get(health::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
