//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabcalc_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] tabcalc_tabs::TabError),

    #[error("Session error: {0}")]
    Session(#[from] tabcalc_session::SessionError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] tabcalc_eval::EvalError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid theme: {0:?}")]
    InvalidTheme(String),
}

impl CoreError {
    /// Load/save failures, as opposed to bad input
    pub fn is_persistence(&self) -> bool {
        use tabcalc_session::SessionError;

        matches!(
            self,
            CoreError::Storage(_)
                | CoreError::Serialization(_)
                | CoreError::Session(SessionError::Storage(_) | SessionError::Json(_))
        )
    }
}
