use crate::defaults::{default_projects, default_services};
use crate::models::{Project, Service};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionName {
    Projects,
    Services,
}

impl CollectionName {
    pub const ALL: [CollectionName; 2] = [CollectionName::Projects, CollectionName::Services];

    /// Storage key holding the collection.
    pub fn key(self) -> &'static str {
        match self {
            CollectionName::Projects => "projects",
            CollectionName::Services => "services",
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CollectionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "projects" | "project" => Ok(CollectionName::Projects),
            "services" | "service" => Ok(CollectionName::Services),
            other => Err(format!(
                "unknown collection '{other}', expected 'projects' or 'services'"
            )),
        }
    }
}

/// A record type that lives in one named collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: CollectionName;

    fn id(&self) -> i64;

    /// Seed content for the collection.
    fn defaults() -> Vec<Self>;
}

impl Record for Project {
    const COLLECTION: CollectionName = CollectionName::Projects;

    fn id(&self) -> i64 {
        self.id
    }

    fn defaults() -> Vec<Self> {
        default_projects()
    }
}

impl Record for Service {
    const COLLECTION: CollectionName = CollectionName::Services;

    fn id(&self) -> i64 {
        self.id
    }

    fn defaults() -> Vec<Self> {
        default_services()
    }
}

/// Why a read returned seed content instead of the persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The persisted value did not parse.
    Corrupt,
    /// The backend could not be read, or a missing entry could not be seeded.
    Unavailable,
}

/// Where the records of a [`Collection`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum CollectionSource {
    Stored,
    /// No entry existed; defaults were written and returned.
    Seeded,
    Fallback(FallbackReason),
}

/// Result of a collection read, tagged with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub records: Vec<T>,
    pub source: CollectionSource,
}

impl<T: Record> Collection<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CollectionSource::Fallback(_))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}
