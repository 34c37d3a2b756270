//! TabCalc Core
//!
//! Central coordination layer: owns the session and preferences, routes key
//! presses and tab operations, and persists state through the record store.

mod calculator;
mod config;
mod error;
mod keypad;
mod preferences;

pub use calculator::{Calculator, LoadOutcome};
pub use config::Config;
pub use error::CoreError;
pub use keypad::{Key, KEYPAD_LAYOUT};
pub use preferences::{Mode, Preferences, DEFAULT_THEME};

// Re-export core components
pub use tabcalc_eval::{evaluate, EvalError, ERROR_TOKEN};
pub use tabcalc_session::{Session, SessionError, SessionRecord, SessionStore};
pub use tabcalc_storage::{Database, StorageError};
pub use tabcalc_tabs::{Tab, TabError, MAX_NAME_LEN};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. Output goes to stderr.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
