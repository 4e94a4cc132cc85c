//! Theme preference model
//!
//! The only persisted state: the UI theme the user last picked.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// Stored UI theme (single row table)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: String,
    pub updated_at: String,
}

impl ThemePreference {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            theme: row.get("theme")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get the stored theme, if one was ever set
    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT theme, updated_at FROM ui_preferences WHERE id = 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(pref) => Ok(Some(pref)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or replace the stored theme (upsert)
    pub fn set(conn: &Connection, theme: &str) -> DbResult<Self> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(DbError::InvalidValue("theme name must not be empty".to_string()));
        }

        conn.execute(
            r#"
            INSERT INTO ui_preferences (id, theme)
            VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET
                theme = excluded.theme,
                updated_at = datetime('now')
            "#,
            params![theme],
        )?;

        tracing::debug!("Theme preference set to '{}'", theme);

        Self::get(conn)?.ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_get_unset_theme() {
        let conn = test_conn();
        assert!(ThemePreference::get(&conn).unwrap().is_none());
    }

    #[test]
    fn test_set_then_replace_theme() {
        let conn = test_conn();

        let pref = ThemePreference::set(&conn, " dark ").unwrap();
        assert_eq!(pref.theme, "dark");

        ThemePreference::set(&conn, "ocean").unwrap();
        let stored = ThemePreference::get(&conn).unwrap().unwrap();
        assert_eq!(stored.theme, "ocean");

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM ui_preferences", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_empty_theme_rejected() {
        let conn = test_conn();
        let err = ThemePreference::set(&conn, "   ").unwrap_err();
        assert!(matches!(err, DbError::InvalidValue(_)));
        assert!(ThemePreference::get(&conn).unwrap().is_none());
    }
}
