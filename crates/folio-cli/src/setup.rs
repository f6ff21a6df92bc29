//! CLI setup module
//!
//! Resolves the profile path and opens the Folio core for CLI usage.

use anyhow::Result;
use folio_core::{FolioCore, paths};

use crate::config::CliConfig;

/// Profile path: `--db-path`/`FOLIO_DB_PATH`, then the config file, then
/// ~/.folio/folio.db.
pub fn resolve_db_path(db_path: Option<String>, config: &CliConfig) -> Result<String> {
    if let Some(path) = db_path.or_else(|| config.default.db_path.clone()) {
        return Ok(path);
    }
    Ok(paths::ensure_database_path()?
        .to_string_lossy()
        .into_owned())
}

/// Open the embedded Folio core
pub fn prepare_core(db_path: &str) -> Result<FolioCore> {
    FolioCore::open(db_path)
}
