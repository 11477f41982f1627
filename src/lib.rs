pub mod config;
pub mod dto;
mod error;
pub mod logger;
pub mod server;
mod stores;
mod unit;

pub use dto::UnitRow;
pub use error::Error;
pub use server::Server;
pub use stores::UnitsStore;
pub use unit::StorageUnit;
