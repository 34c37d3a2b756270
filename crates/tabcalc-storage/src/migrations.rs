//! Database migrations
//!
//! Each step is applied once, in order, inside its own transaction. The
//! applied version is tracked in SQLite's `user_version` pragma.

use crate::Result;
use rusqlite::Connection;

/// Schema steps, indexed by the version they bring the database to
const STEPS: &[(i32, &str)] = &[(
    1,
    r#"
    CREATE TABLE IF NOT EXISTS records (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
)];

pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;

    for &(version, sql) in STEPS.iter().filter(|(version, _)| *version > current) {
        tracing::info!(from = current, to = version, "Migrating record store");

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
    }

    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}
