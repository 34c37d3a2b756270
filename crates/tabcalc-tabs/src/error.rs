//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Tab name cannot be empty")]
    EmptyName,

    #[error("Tab name is {len} characters, the limit is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("Tab name must be letters and digits only: {0}")]
    InvalidName(String),

    #[error("A tab named {0} already exists")]
    NameTaken(String),

    #[error("Tab is already named {0}")]
    NameUnchanged(String),
}
