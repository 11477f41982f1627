//! Request and response shapes for the web interface.
//!
//! Numeric form fields are parsed leniently: anything that does not parse as
//! a number is treated as absent so the handler can substitute its default.
//! A form that repeats a field is rejected as a whole, which leaves every
//! field at its default.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::StorageUnit;

pub const DEFAULT_CAPACITY: Decimal = Decimal::TEN;
pub const DEFAULT_AMOUNT: Decimal = Decimal::ZERO;

/// Form for `POST /warehouse/create`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CreateForm {
    #[serde(default, deserialize_with = "deserialize_lenient_decimal")]
    pub capacity: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_lenient_decimal")]
    pub initial_balance: Option<Decimal>,
}

impl CreateForm {
    pub fn capacity(&self) -> Decimal {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    pub fn initial_balance(&self) -> Decimal {
        self.initial_balance.unwrap_or(DEFAULT_AMOUNT)
    }
}

/// Form for `POST /warehouse/{id}/edit`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CapacityForm {
    #[serde(default, deserialize_with = "deserialize_lenient_decimal")]
    pub capacity: Option<Decimal>,
}

impl CapacityForm {
    pub fn capacity(&self) -> Decimal {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }
}

/// Form for `POST /warehouse/{id}/add` and `POST /warehouse/{id}/remove`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct AmountForm {
    #[serde(default, deserialize_with = "deserialize_lenient_decimal")]
    pub amount: Option<Decimal>,
}

impl AmountForm {
    pub fn amount(&self) -> Decimal {
        self.amount.unwrap_or(DEFAULT_AMOUNT)
    }
}

/// Query string of the listing page.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct IndexQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub selected: Option<u64>,
}

/// One registry entry as shown to clients.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UnitRow {
    pub id: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub capacity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining: Decimal,
}

impl From<(u64, &StorageUnit)> for UnitRow {
    fn from((id, unit): (u64, &StorageUnit)) -> Self {
        Self {
            id,
            capacity: unit.capacity(),
            balance: unit.balance(),
            remaining: unit.remaining(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Parses user input as a decimal, accepting plain and scientific notation.
///
/// Numbers beyond the range of `Decimal` saturate to `Decimal::MAX` or
/// `Decimal::MIN` by sign; magnitudes below its precision become zero.
/// Returns `None` for empty or non-numeric input, including `nan` and `inf`.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw).ok().or_else(|| parse_scientific(raw))
}

const DECIMAL_MAX_F64: f64 = 7.922_816_251_426_434e28;
const DECIMAL_EPSILON_F64: f64 = 1e-28;

fn parse_scientific(raw: &str) -> Option<Decimal> {
    let value = raw.parse::<f64>().ok().filter(|value| !value.is_nan())?;
    // f64 parsing also accepts "inf"/"infinity" literals
    if value.is_infinite() && raw.to_ascii_lowercase().contains("inf") {
        return None;
    }
    if value >= DECIMAL_MAX_F64 {
        return Some(Decimal::MAX);
    }
    if value <= -DECIMAL_MAX_F64 {
        return Some(Decimal::MIN);
    }
    if value.abs() < DECIMAL_EPSILON_F64 {
        return Some(Decimal::ZERO);
    }
    Decimal::from_scientific(raw)
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

fn deserialize_lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|opt_raw| opt_raw.as_deref().and_then(parse_decimal))
}

fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|opt_raw| opt_raw.and_then(|raw| raw.trim().parse().ok()))
}
