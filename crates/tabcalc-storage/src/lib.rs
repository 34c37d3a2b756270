//! TabCalc Storage Layer
//!
//! SQLite-backed key/value store for the durable records
//! (tab state and display preferences).

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
