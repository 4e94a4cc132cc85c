//! Utility to set the stored UI theme
//!
//! Usage: set_theme <theme>

use std::path::PathBuf;

fn get_database_path() -> PathBuf {
    std::env::var("BESTINUT_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(root) = path.parent().and_then(|p| p.parent()) {
                    path = root.to_path_buf();
                }
            }

            path.push("data");
            std::fs::create_dir_all(&path).ok();
            path.push("bestinut.db");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let theme = std::env::args()
        .nth(1)
        .ok_or("usage: set_theme <theme>")?;

    let db_path = get_database_path();
    println!("Database path: {}", db_path.display());

    let database = bestinut::db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        bestinut::db::migrations::run_migrations(conn)?;
        Ok(())
    })?;

    database.with_conn(|conn| {
        let pref = bestinut::models::ThemePreference::set(conn, &theme)?;
        println!("Theme set:");
        println!("  Theme: {}", pref.theme);
        println!("  Updated: {}", pref.updated_at);
        Ok(())
    })?;

    Ok(())
}
