//! Session gate for the admin views.
//!
//! This is a local placeholder gate, NOT a security boundary. The credential
//! pair is compiled into the shipped program and the flag is a plain value in
//! the profile; anyone with access to either can become "admin".

use crate::error::{StoreError, StoreResult};
use folio_traits::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Storage key of the privileged flag.
pub const ADMIN_FLAG_KEY: &str = "isAdmin";
const ADMIN_FLAG_VALUE: &str = "true";

/// Placeholder credentials accepted by [`SessionGate::login`].
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone)]
pub struct SessionGate {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionGate {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Mark the session privileged when the credentials exactly match the
    /// placeholder pair. A mismatch returns `Ok(false)` and leaves the flag
    /// untouched.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<bool> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            info!(username, "Rejected admin login");
            return Ok(false);
        }
        self.backend.set_item(ADMIN_FLAG_KEY, ADMIN_FLAG_VALUE)?;
        info!(username, "Admin session started");
        Ok(true)
    }

    /// Clear the privileged flag.
    pub fn logout(&self) -> StoreResult<()> {
        self.backend.remove_item(ADMIN_FLAG_KEY)?;
        info!("Admin session ended");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        match self.backend.get_item(ADMIN_FLAG_KEY) {
            Ok(value) => value.as_deref() == Some(ADMIN_FLAG_VALUE),
            Err(err) => {
                warn!(error = %err, "Could not read session flag");
                false
            }
        }
    }

    /// Entry check for privileged views.
    pub fn require_privileged(&self) -> StoreResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(StoreError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::{LocalStorage, MemoryKeyValueStore};
    use tempfile::tempdir;

    fn setup_gate() -> (SessionGate, Arc<MemoryKeyValueStore>) {
        let backend = Arc::new(MemoryKeyValueStore::new());
        (SessionGate::new(backend.clone()), backend)
    }

    #[test]
    fn test_login_with_placeholder_pair() {
        let (gate, backend) = setup_gate();
        assert!(!gate.is_authenticated());

        assert!(gate.login("admin", "admin123").unwrap());

        assert!(gate.is_authenticated());
        assert_eq!(backend.get_item("isAdmin").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_wrong_password_leaves_state_unchanged() {
        let (gate, _backend) = setup_gate();

        assert!(!gate.login("admin", "wrong").unwrap());
        assert!(!gate.is_authenticated());

        gate.login("admin", "admin123").unwrap();
        assert!(!gate.login("admin", "wrong").unwrap());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_credentials_match_exactly() {
        let (gate, _backend) = setup_gate();
        assert!(!gate.login("Admin", "admin123").unwrap());
        assert!(!gate.login("admin ", "admin123").unwrap());
        assert!(!gate.login("admin", " admin123").unwrap());
    }

    #[test]
    fn test_logout_clears_flag() {
        let (gate, backend) = setup_gate();
        gate.login("admin", "admin123").unwrap();

        gate.logout().unwrap();

        assert!(!gate.is_authenticated());
        assert!(!backend.contains_key("isAdmin").unwrap());

        // Unconditional: logging out twice is fine
        gate.logout().unwrap();
    }

    #[test]
    fn test_only_literal_true_is_privileged() {
        let backend = Arc::new(MemoryKeyValueStore::with_entries([("isAdmin", "yes")]));
        let gate = SessionGate::new(backend);
        assert!(!gate.is_authenticated());
        assert!(matches!(
            gate.require_privileged(),
            Err(StoreError::Unauthorized)
        ));
    }

    #[test]
    fn test_login_write_failure_is_reported() {
        let (gate, backend) = setup_gate();
        backend.set_read_only(true);

        assert!(matches!(
            gate.login("admin", "admin123"),
            Err(StoreError::StorageUnavailable(_))
        ));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_session_survives_reopen() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("profile.db");

        {
            let gate = SessionGate::new(Arc::new(LocalStorage::open(&db_path).unwrap()));
            gate.login("admin", "admin123").unwrap();
        }

        let gate = SessionGate::new(Arc::new(LocalStorage::open(&db_path).unwrap()));
        assert!(gate.is_authenticated());
        gate.require_privileged().unwrap();
    }
}
