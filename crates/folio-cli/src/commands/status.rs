use anyhow::Result;
use folio_core::storage::CollectionStatus;
use folio_core::{CollectionName, CollectionSource, FallbackReason, FolioCore};
use serde_json::json;

use crate::output::{OutputFormat, json::print_json};

pub fn run(core: &FolioCore, db_path: &str, format: OutputFormat) -> Result<()> {
    let authenticated = core.session.is_authenticated();
    let collections: Vec<CollectionStatus> = CollectionName::ALL
        .into_iter()
        .map(|name| core.content.status(name))
        .collect();

    if format.is_json() {
        return print_json(&json!({
            "db_path": db_path,
            "authenticated": authenticated,
            "collections": collections,
        }));
    }

    println!("Profile:  {db_path}");
    println!(
        "Session:  {}",
        if authenticated { "admin" } else { "visitor" }
    );
    for status in collections {
        println!(
            "{:<9} {} records ({})",
            format!("{}:", capitalize(status.name.key())),
            status.len,
            describe_source(status.source)
        );
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn describe_source(source: CollectionSource) -> &'static str {
    match source {
        CollectionSource::Stored => "stored",
        CollectionSource::Seeded => "seeded with defaults",
        CollectionSource::Fallback(FallbackReason::Corrupt) => "stored value is corrupt, showing defaults",
        CollectionSource::Fallback(FallbackReason::Unavailable) => "storage unavailable, showing defaults",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("projects"), "Projects");
        assert_eq!(capitalize(""), "");
    }
}
