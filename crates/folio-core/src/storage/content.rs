use super::collection::{Collection, CollectionName, CollectionSource, FallbackReason, Record};
use crate::error::{StoreError, StoreResult};
use crate::events::ChangeNotifier;
use crate::models::{Project, Service};
use folio_traits::KeyValueStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Size and origin of a collection, for status views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionStatus {
    pub name: CollectionName,
    pub len: usize,
    pub source: CollectionSource,
}

/// The record store. Owns the `projects` and `services` collections inside
/// a profile and fires a change notification after every successful save.
///
/// Cloning yields another handle to the same backend and notifier.
#[derive(Clone)]
pub struct ContentStore {
    backend: Arc<dyn KeyValueStore>,
    notifier: ChangeNotifier,
}

impl ContentStore {
    /// Wrap `backend` without touching it.
    pub fn new(backend: Arc<dyn KeyValueStore>, notifier: ChangeNotifier) -> Self {
        Self { backend, notifier }
    }

    /// Wrap `backend` and seed any missing collection.
    pub fn open(backend: Arc<dyn KeyValueStore>) -> Self {
        let store = Self::new(backend, ChangeNotifier::new());
        if let Err(err) = store.ensure_seeded() {
            warn!(error = %err, "Could not seed collections; reads will use defaults");
        }
        store
    }

    /// Write the default seed for every collection that has no entry yet.
    /// Returns the collections that were seeded.
    pub fn ensure_seeded(&self) -> StoreResult<Vec<CollectionName>> {
        let mut seeded = Vec::new();
        if self.seed_if_missing::<Project>()? {
            seeded.push(CollectionName::Projects);
        }
        if self.seed_if_missing::<Service>()? {
            seeded.push(CollectionName::Services);
        }
        Ok(seeded)
    }

    fn seed_if_missing<T: Record>(&self) -> StoreResult<bool> {
        if self.backend.contains_key(T::COLLECTION.key())? {
            return Ok(false);
        }
        self.write(&T::defaults())?;
        info!(collection = %T::COLLECTION, "Seeded default collection");
        Ok(true)
    }

    /// Read the collection for `T`. Never fails: unreadable or corrupt
    /// entries yield the default seed, tagged with the reason.
    pub fn get_collection<T: Record>(&self) -> Collection<T> {
        let name = T::COLLECTION;
        match self.backend.get_item(name.key()) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(records) => Collection {
                    records,
                    source: CollectionSource::Stored,
                },
                Err(err) => {
                    warn!(collection = %name, error = %err, "Stored collection is corrupt, using defaults");
                    Self::fallback(FallbackReason::Corrupt)
                }
            },
            Ok(None) => {
                let defaults = T::defaults();
                match self.write(&defaults) {
                    Ok(()) => {
                        info!(collection = %name, "Seeded default collection");
                        Collection {
                            records: defaults,
                            source: CollectionSource::Seeded,
                        }
                    }
                    Err(err) => {
                        warn!(collection = %name, error = %err, "Could not seed collection, using defaults");
                        Self::fallback(FallbackReason::Unavailable)
                    }
                }
            }
            Err(err) => {
                warn!(collection = %name, error = %err, "Could not read collection, using defaults");
                Self::fallback(FallbackReason::Unavailable)
            }
        }
    }

    fn fallback<T: Record>(reason: FallbackReason) -> Collection<T> {
        Collection {
            records: T::defaults(),
            source: CollectionSource::Fallback(reason),
        }
    }

    /// Replace the whole collection for `T` with `records`, then notify
    /// observers. Nothing is signalled when the write fails.
    pub fn save_collection<T: Record>(&self, records: &[T]) -> StoreResult<()> {
        self.write(records)?;
        debug!(collection = %T::COLLECTION, count = records.len(), "Saved collection");
        self.notifier.notify();
        Ok(())
    }

    /// Put the seed content for `name` back in place.
    pub fn reset_collection(&self, name: CollectionName) -> StoreResult<()> {
        let saved = match name {
            CollectionName::Projects => self.save_collection(&Project::defaults()),
            CollectionName::Services => self.save_collection(&Service::defaults()),
        };
        saved?;
        info!(collection = %name, "Reset collection to defaults");
        Ok(())
    }

    fn write<T: Record>(&self, records: &[T]) -> StoreResult<()> {
        let collection = T::COLLECTION;
        let json = serde_json::to_string(records)
            .map_err(|source| StoreError::Encode { collection, source })?;
        self.backend.set_item(collection.key(), &json)?;
        Ok(())
    }

    pub fn projects(&self) -> Collection<Project> {
        self.get_collection()
    }

    pub fn services(&self) -> Collection<Service> {
        self.get_collection()
    }

    pub fn save_projects(&self, projects: &[Project]) -> StoreResult<()> {
        self.save_collection(projects)
    }

    pub fn save_services(&self, services: &[Service]) -> StoreResult<()> {
        self.save_collection(services)
    }

    pub fn status(&self, name: CollectionName) -> CollectionStatus {
        let (len, source) = match name {
            CollectionName::Projects => {
                let collection = self.projects();
                (collection.len(), collection.source)
            }
            CollectionName::Services => {
                let collection = self.services();
                (collection.len(), collection.source)
            }
        };
        CollectionStatus { name, len, source }
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }
}
