//! Session persistence
//!
//! The session is stored as one JSON record under `tab_state`.

use tabcalc_storage::Database;

use crate::record::{serialize, SessionRecord};
use crate::session::Session;
use crate::Result;

const TAB_STATE_KEY: &str = "tab_state";

pub struct SessionStore {
    db: Database,
}

impl SessionStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Read the stored record. `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<SessionRecord>> {
        let Some(text) = self.db.get_record(TAB_STATE_KEY)? else {
            return Ok(None);
        };

        let record: SessionRecord = serde_json::from_str(&text)?;

        tracing::debug!(
            tab_count = record.tabs.len(),
            current_tab = ?record.current_tab,
            "Loaded session record"
        );

        Ok(Some(record))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let record = serialize(session);
        let text = serde_json::to_string(&record)?;
        self.db.put_record(TAB_STATE_KEY, &text)?;

        tracing::debug!(tab_count = record.tabs.len(), "Saved session");

        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
