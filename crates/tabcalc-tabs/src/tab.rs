//! Tab data structure

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

/// Longest name a user may give a tab, in characters
pub const MAX_NAME_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique name, also the key in persisted state
    pub name: String,
    /// Raw accumulated input
    pub expression: String,
}

impl Tab {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_expression(name, String::new())
    }

    pub fn with_expression(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
        }
    }
}

/// Auto-generated name for the `n`th tab
pub fn default_name(n: usize) -> String {
    format!("Tab {}", n)
}

/// Check a user-chosen tab name: 1 to 15 letters or digits.
///
/// Auto-generated names ("Tab 3") contain a space and are never passed here.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TabError::EmptyName);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(TabError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }

    if !name.chars().all(char::is_alphanumeric) {
        return Err(TabError::InvalidName(name.to_string()));
    }

    Ok(())
}
