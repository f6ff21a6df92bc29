//! Backend error type for the storage port.

/// Failure reported by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend could not complete the operation (disk full, file locked,
    /// storage disabled, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        Self::Unavailable(err.to_string())
    }
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = StorageError::unavailable("quota exceeded");
        assert_eq!(err.to_string(), "storage unavailable: quota exceeded");
    }
}
