//! TabCalc Tabs
//!
//! A tab is an independent calculator with its own expression text.
//! Tabs live in an ordered list; the order is the display order.

mod error;
mod list;
mod tab;

pub use error::TabError;
pub use list::TabList;
pub use tab::{default_name, validate_name, Tab, MAX_NAME_LEN};

pub type Result<T> = std::result::Result<T, TabError>;
