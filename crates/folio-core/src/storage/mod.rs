//! Record store: typed collections on top of the key/value port.
//!
//! Each collection is persisted as one JSON array under its own key and
//! rewritten as a whole on every save.

pub mod collection;
pub mod content;

pub use collection::{Collection, CollectionName, CollectionSource, FallbackReason, Record};
pub use content::{CollectionStatus, ContentStore};
