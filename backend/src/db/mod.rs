//! SQLite access.
//!
//! Handlers open a fresh connection per request, the same way the rest of the
//! service talks to its database file. Foreign keys are switched on for every
//! connection because SQLite leaves them off by default.

pub mod schema;

use rusqlite::Connection;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Creates any missing tables.
    pub fn migrate(&self) -> rusqlite::Result<()> {
        let conn = self.connect()?;
        schema::apply(&conn)
    }
}

/// In-memory connection with the schema applied.
#[cfg(test)]
pub(crate) fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", true).unwrap();
    schema::apply(&conn).unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("appbunny.sqlite"));
        db.migrate().unwrap();
        db.migrate().unwrap();

        let conn = db.connect().unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN
                 ('courses', 'application_templates', 'template_sections',
                  'questions', 'applications')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 5);
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let conn = test_connection();
        let result = conn.execute("INSERT INTO applications (template_id) VALUES (42)", []);
        assert!(result.is_err());
    }
}
