//! Theme preference MCP tools

use serde::Serialize;

use crate::db::Database;
use crate::models::ThemePreference;

/// Theme used when the user never picked one
pub const DEFAULT_THEME: &str = "light";

/// Response for get_theme / set_theme
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: String,
    pub is_default: bool,
    pub updated_at: Option<String>,
}

/// Get the stored theme, or the default when unset
pub fn get_theme(db: &Database) -> Result<ThemeResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let stored = ThemePreference::get(&conn)
        .map_err(|e| format!("Failed to get theme: {}", e))?;

    Ok(match stored {
        Some(pref) => ThemeResponse {
            theme: pref.theme,
            is_default: false,
            updated_at: Some(pref.updated_at),
        },
        None => ThemeResponse {
            theme: DEFAULT_THEME.to_string(),
            is_default: true,
            updated_at: None,
        },
    })
}

/// Store the chosen theme
pub fn set_theme(db: &Database, theme: &str) -> Result<ThemeResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let pref = ThemePreference::set(&conn, theme)
        .map_err(|e| format!("Failed to set theme: {}", e))?;

    Ok(ThemeResponse {
        theme: pref.theme,
        is_default: false,
        updated_at: Some(pref.updated_at),
    })
}
