//! Folio Traits - the local storage port.
//!
//! The content store never talks to a concrete backend. It is handed an
//! `Arc<dyn KeyValueStore>` at construction, which keeps the redb-backed
//! profile and the in-memory fake interchangeable:
//! - [`KeyValueStore`] string-keyed, string-valued persistence
//! - [`StorageError`] backend failures

pub mod error;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use store::KeyValueStore;
