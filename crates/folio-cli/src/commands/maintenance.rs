use anyhow::Result;
use colored::Colorize;
use folio_core::{CollectionName, FolioCore};
use serde_json::json;

use crate::output::{OutputFormat, json::print_json};

/// Overwrite a collection with its default content.
pub fn reset(core: &FolioCore, collection: CollectionName, format: OutputFormat) -> Result<()> {
    core.session.require_privileged()?;
    core.content.reset_collection(collection)?;

    let status = core.content.status(collection);
    if format.is_json() {
        return print_json(&json!({ "collection": collection.key(), "records": status.len }));
    }

    println!(
        "{} Reset {} ({} records)",
        "✓".green(),
        collection,
        status.len
    );
    Ok(())
}
