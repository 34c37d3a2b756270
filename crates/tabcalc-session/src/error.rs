//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Tab error: {0}")]
    Tab(#[from] tabcalc_tabs::TabError),

    #[error("Storage error: {0}")]
    Storage(#[from] tabcalc_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot delete the last tab")]
    CannotDeleteLastTab,
}
