//! BestiNut
//!
//! An MCP server for personal diet plans and nutrition help.

use std::path::PathBuf;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use bestinut::build_info;
use bestinut::db;
use bestinut::mcp::BestinutService;

/// Get the database path from environment or use default
fn get_database_path() -> PathBuf {
    std::env::var("BESTINUT_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // target/release or target/debug -> project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(root) = path.parent().and_then(|p| p.parent()) {
                    path = root.to_path_buf();
                }
            }

            path.push("data");
            path.push("bestinut.db");
            path
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stderr only, stdout carries MCP
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bestinut=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let db_path = get_database_path();
    eprintln!("Database path: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        if db::migrations::is_current(conn)? {
            tracing::info!("Database schema version: {}", version);
        } else {
            tracing::warn!("Database schema version {} is newer than this build", version);
        }
        Ok(())
    })?;

    let service = BestinutService::new(database);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
