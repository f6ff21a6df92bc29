//! Folio Core - the portfolio site's local content store.
//!
//! Owns the `projects` and `services` collections, the admin session flag,
//! and the change notification that keeps mounted views in sync. Everything
//! is persisted through an injected [`KeyValueStore`].

pub mod catalog;
pub mod contact;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod events;
pub mod models;
pub mod session;
pub mod storage;

pub use catalog::{Catalog, CategoryFilter, DashboardSummary, LiveCatalog};
pub use editor::{AdminEditor, IdMinter, ProjectDraft, ServiceDraft};
pub use error::{StoreError, StoreResult};
pub use events::{ChangeNotifier, Subscription};
pub use folio_storage::paths;
pub use models::*;
pub use session::SessionGate;
pub use storage::{Collection, CollectionName, CollectionSource, ContentStore, FallbackReason};

use folio_storage::{LocalStorage, MemoryKeyValueStore};
use folio_traits::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Application state shared by the public views and the admin editor.
///
/// Constructed once per process and passed by reference to anything that
/// needs the store.
pub struct FolioCore {
    pub content: ContentStore,
    pub session: SessionGate,
    ids: IdMinter,
}

impl FolioCore {
    /// Open the durable profile at `db_path`, seeding it on first run.
    pub fn open(db_path: &str) -> anyhow::Result<Self> {
        let backend = Arc::new(LocalStorage::open(db_path)?);
        info!(db_path, "Opening Folio profile");
        Ok(Self::with_backend(backend))
    }

    /// A throwaway profile held in memory.
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryKeyValueStore::new()))
    }

    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        let content = ContentStore::open(backend.clone());
        let session = SessionGate::new(backend);
        Self {
            content,
            session,
            ids: IdMinter::new(),
        }
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.content)
    }

    pub fn live_catalog(&self) -> LiveCatalog {
        LiveCatalog::new(self.content.clone())
    }

    /// Enter the admin views; see [`AdminEditor::enter`].
    pub fn editor(&self) -> StoreResult<AdminEditor<'_>> {
        AdminEditor::enter(self)
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        self.content.notifier()
    }
}
