//! Path utilities for Folio directory resolution.

use anyhow::Result;
use std::path::PathBuf;

const FOLIO_DIR: &str = ".folio";
const DB_FILE: &str = "folio.db";
const LOGS_DIR: &str = "logs";

/// Environment variable to override the Folio directory.
pub const FOLIO_DIR_ENV: &str = "FOLIO_DIR";

/// Resolve the Folio data directory.
/// Priority: FOLIO_DIR env var > ~/.folio/
pub fn resolve_folio_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(FOLIO_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(FOLIO_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the Folio directory exists and return its path.
pub fn ensure_folio_dir() -> Result<PathBuf> {
    let dir = resolve_folio_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the database path: ~/.folio/folio.db
pub fn database_path() -> Result<PathBuf> {
    Ok(resolve_folio_dir()?.join(DB_FILE))
}

/// Ensure the data directory exists and return the database path.
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_folio_dir()?.join(DB_FILE))
}

/// Get the logs directory: ~/.folio/logs/
pub fn logs_dir() -> Result<PathBuf> {
    let dir = resolve_folio_dir()?.join(LOGS_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
