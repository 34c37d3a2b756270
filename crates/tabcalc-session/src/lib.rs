//! TabCalc Session Management
//!
//! - A Session owns the ordered tabs, the active tab and the visible expression
//! - The visible expression is flushed into its tab before the active tab changes
//! - A session always keeps at least one tab
//! - `SessionRecord` is the persisted form; `SessionStore` reads and writes it

mod error;
mod record;
mod session;
mod store;

pub use error::SessionError;
pub use record::{deserialize, serialize, SessionRecord};
pub use session::Session;
pub use store::SessionStore;

pub type Result<T> = std::result::Result<T, SessionError>;
