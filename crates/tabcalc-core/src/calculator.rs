//! Main calculator state container
//!
//! Owns the session and preferences. Every user action goes through here
//! and runs to completion before the next one.

use tabcalc_eval::ERROR_TOKEN;
use tabcalc_session::{deserialize, Session, SessionStore};
use tabcalc_storage::Database;
use tabcalc_tabs::Tab;

use crate::config::Config;
use crate::error::CoreError;
use crate::keypad::Key;
use crate::preferences::{Mode, Preferences};
use crate::Result;

const PREFERENCES_KEY: &str = "preferences";

/// What happened when persisted state was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// Nothing stored yet; current state kept
    Missing,
    /// Read or decode failed; current state kept
    Failed(String),
}

impl std::fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadOutcome::Loaded => write!(f, "loaded"),
            LoadOutcome::Missing => write!(f, "nothing saved"),
            LoadOutcome::Failed(reason) => write!(f, "load failed: {}", reason),
        }
    }
}

pub struct Calculator {
    config: Config,
    session: Session,
    preferences: Preferences,
    store: SessionStore,
}

impl Calculator {
    /// Open the database named by the config
    pub fn new(config: Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    /// Calculator backed by a throwaway database
    pub fn in_memory(config: Config) -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        let preferences = Preferences::new(config.default_theme.clone(), config.default_mode);

        Self {
            config,
            session: Session::new(),
            preferences,
            store: SessionStore::new(db),
        }
    }

    /// Restore saved tabs and preferences. Failures leave defaults in place.
    pub fn initialize(&mut self) {
        let session = self.load_session();
        let preferences = self.load_preferences();

        tracing::info!(
            session = %session,
            preferences = %preferences,
            tab_count = self.session.tab_count(),
            "Calculator initialized"
        );
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn expression(&self) -> &str {
        self.session.expression()
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.session.active_tab()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.session.tabs()
    }

    // === Keypad ===

    pub fn press(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Input(ch) => self.session.append_char(ch),
            Key::Clear => self.session.clear(),
            Key::Equals => {
                self.evaluate()?;
            }
        }
        Ok(())
    }

    /// Press each non-whitespace char of `input` in order, stopping at the
    /// first failed evaluation.
    pub fn press_str(&mut self, input: &str) -> Result<()> {
        input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .try_for_each(|ch| self.press(Key::from_char(ch)))
    }

    /// Evaluate the visible expression and replace it with the result.
    /// On failure the expression becomes "Error"; other tabs are untouched.
    pub fn evaluate(&mut self) -> Result<String> {
        let outcome = tabcalc_eval::evaluate(self.session.expression());

        let result = match outcome {
            Ok(value) => {
                self.session.set_expression(value.clone());
                Ok(value)
            }
            Err(e) => {
                tracing::info!(
                    tab = ?self.session.active_tab(),
                    expression = %self.session.expression(),
                    error = %e,
                    "Evaluation failed"
                );
                self.session.set_expression(ERROR_TOKEN);
                Err(e.into())
            }
        };

        self.autosave();
        result
    }

    // === Tab operations ===

    pub fn create_tab(&mut self) -> String {
        let name = self.session.create_tab();
        self.autosave();
        name
    }

    pub fn delete_tab(&mut self, name: &str) -> Result<()> {
        self.session.delete_tab(name)?;
        self.autosave();
        Ok(())
    }

    pub fn switch_tab(&mut self, name: &str) -> Result<String> {
        let expression = self.session.switch_tab(name)?.to_string();
        self.autosave();
        Ok(expression)
    }

    pub fn rename_tab(&mut self, old: &str, new: &str) -> Result<()> {
        self.session.rename_tab(old, new)?;
        self.autosave();
        Ok(())
    }

    pub fn reorder_tab(&mut self, moved: &str, target: &str) -> bool {
        let changed = self.session.reorder_tab(moved, target);
        if changed {
            self.autosave();
        }
        changed
    }

    // === Persistence ===

    pub fn save_session(&self) -> Result<()> {
        self.store.save(&self.session)?;
        tracing::info!(tab_count = self.session.tab_count(), "Saved tab state");
        Ok(())
    }

    /// Replace the session with the stored one. Anything short of a
    /// successful read keeps the current session.
    pub fn load_session(&mut self) -> LoadOutcome {
        match self.store.load() {
            Ok(Some(record)) => {
                let mut session = deserialize(Some(record));
                if session.is_empty() {
                    session.create_tab();
                }
                self.session = session;
                tracing::info!(
                    tab_count = self.session.tab_count(),
                    active_tab = ?self.session.active_tab(),
                    "Loaded tab state"
                );
                LoadOutcome::Loaded
            }
            Ok(None) => LoadOutcome::Missing,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load tab state");
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn save_preferences(&self) -> Result<()> {
        let text = serde_json::to_string(&self.preferences)?;
        self.store.database().put_record(PREFERENCES_KEY, &text)?;
        tracing::info!(theme = %self.preferences.theme, mode = %self.preferences.mode, "Saved preferences");
        Ok(())
    }

    pub fn load_preferences(&mut self) -> LoadOutcome {
        let loaded = self
            .store
            .database()
            .get_record(PREFERENCES_KEY)
            .map_err(CoreError::from)
            .and_then(|text| match text {
                Some(text) => Ok(Some(serde_json::from_str::<Preferences>(&text)?)),
                None => Ok(None),
            });

        match loaded {
            Ok(Some(preferences)) => {
                self.preferences = preferences;
                LoadOutcome::Loaded
            }
            Ok(None) => LoadOutcome::Missing,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load preferences");
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    // === Preferences ===

    pub fn set_theme(&mut self, theme: String) -> Result<()> {
        let theme = theme.trim().to_string();
        if theme.is_empty() || theme.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidTheme(theme));
        }

        self.preferences.theme = theme;
        self.autosave_preferences();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.preferences.mode = mode;
        self.autosave_preferences();
    }

    pub fn toggle_mode(&mut self) -> Mode {
        let mode = self.preferences.mode.toggled();
        self.set_mode(mode);
        mode
    }

    fn autosave(&self) {
        if !self.config.autosave {
            return;
        }
        if let Err(e) = self.save_session() {
            tracing::error!(error = %e, "Autosave of tab state failed");
        }
    }

    fn autosave_preferences(&self) {
        if !self.config.autosave {
            return;
        }
        if let Err(e) = self.save_preferences() {
            tracing::error!(error = %e, "Autosave of preferences failed");
        }
    }
}
