//! Folio Storage - Low-level storage layer
//!
//! This crate provides the persistence adapters behind the
//! [`KeyValueStore`](folio_traits::KeyValueStore) port, using redb as the
//! embedded database for durable profiles.
//!
//! # Tables
//!
//! - `local_storage` - profile key/value pairs (`projects`, `services`, `isAdmin`)

pub mod local_storage;
pub mod memory;
pub mod paths;
pub mod simple_storage;
pub mod time_utils;

pub use local_storage::LocalStorage;
pub use memory::MemoryKeyValueStore;
pub use simple_storage::SimpleStorage;
