//! Storage layer for the inventory service. Provides:
//! - The id-keyed registry of storage units ([`UnitsStore`])
//!
//! Current implementation is in-memory only; state is lost on restart.

mod units;

pub use units::UnitsStore;
