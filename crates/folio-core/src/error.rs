//! Error type for store, gate, and editor operations.

use crate::models::ValidationError;
use crate::models::validation::describe_errors;
use crate::storage::CollectionName;
use folio_traits::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected a write (or the read needed to prepare it).
    #[error(transparent)]
    StorageUnavailable(#[from] StorageError),

    #[error("Failed to encode {collection}: {source}")]
    Encode {
        collection: CollectionName,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {}", describe_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("{collection} record {id} not found")]
    NotFound { collection: CollectionName, id: i64 },

    #[error("Not authenticated: admin login required")]
    Unauthorized,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
