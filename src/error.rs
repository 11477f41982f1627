//! Domain-specific errors for the storage registry.
//!
//! These represent recoverable lookup failures rather than technical
//! errors like I/O or configuration issues, which are reported through
//! `anyhow` at the application boundary.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("storage unit {0} not found")]
    UnitNotFound(u64),
}
