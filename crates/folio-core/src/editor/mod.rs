//! Admin editor: create, edit, and delete records through the store.
//!
//! Every operation reads the full collection, changes it in memory, and
//! saves it back as a whole. Ids are preserved on edit and minted on create.

pub mod draft;
pub mod ids;

pub use draft::{ProjectDraft, ServiceDraft, split_list};
pub use ids::IdMinter;

use crate::FolioCore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Project, Service, ValidationError};
use crate::storage::{Collection, ContentStore, Record};
use tracing::info;

/// Handle for the privileged views. Obtained through [`AdminEditor::enter`],
/// which checks the session gate.
pub struct AdminEditor<'a> {
    core: &'a FolioCore,
}

impl<'a> AdminEditor<'a> {
    /// Enter the admin views; fails with [`StoreError::Unauthorized`] when
    /// the session is not privileged.
    pub fn enter(core: &'a FolioCore) -> StoreResult<Self> {
        core.session.require_privileged()?;
        Ok(Self { core })
    }

    fn content(&self) -> &ContentStore {
        &self.core.content
    }

    pub fn projects(&self) -> Collection<Project> {
        self.content().projects()
    }

    pub fn services(&self) -> Collection<Service> {
        self.content().services()
    }

    pub fn create_project(&self, draft: ProjectDraft) -> StoreResult<Project> {
        self.create_record(|id| draft.into_project(id))
    }

    pub fn update_project(&self, id: i64, draft: ProjectDraft) -> StoreResult<Project> {
        self.update_record(id, |id| draft.into_project(id))
    }

    pub fn delete_project(&self, id: i64) -> StoreResult<bool> {
        self.delete_record::<Project>(id)
    }

    pub fn create_service(&self, draft: ServiceDraft) -> StoreResult<Service> {
        self.create_record(|id| draft.into_service(id))
    }

    pub fn update_service(&self, id: i64, draft: ServiceDraft) -> StoreResult<Service> {
        self.update_record(id, |id| draft.into_service(id))
    }

    pub fn delete_service(&self, id: i64) -> StoreResult<bool> {
        self.delete_record::<Service>(id)
    }

    /// Leave the admin views, clearing the privileged flag.
    pub fn logout(self) -> StoreResult<()> {
        self.core.session.logout()
    }

    fn create_record<T, F>(&self, build: F) -> StoreResult<T>
    where
        T: Record,
        F: FnOnce(i64) -> Result<T, Vec<ValidationError>>,
    {
        let mut records = self.content().get_collection::<T>().into_records();
        let id = self.core.ids.mint(records.iter().map(|record| record.id()));
        let record = build(id).map_err(StoreError::Validation)?;

        records.push(record.clone());
        self.content().save_collection(&records)?;
        info!(collection = %T::COLLECTION, id, "Created record");
        Ok(record)
    }

    fn update_record<T, F>(&self, id: i64, build: F) -> StoreResult<T>
    where
        T: Record,
        F: FnOnce(i64) -> Result<T, Vec<ValidationError>>,
    {
        let mut records = self.content().get_collection::<T>().into_records();
        if !records.iter().any(|record| record.id() == id) {
            return Err(StoreError::NotFound {
                collection: T::COLLECTION,
                id,
            });
        }
        let updated = build(id).map_err(StoreError::Validation)?;

        // Replace the first match in place; later duplicates are dropped so
        // the id stays unique.
        let mut replaced = false;
        records.retain_mut(|record| {
            if record.id() != id {
                return true;
            }
            if replaced {
                return false;
            }
            *record = updated.clone();
            replaced = true;
            true
        });

        self.content().save_collection(&records)?;
        info!(collection = %T::COLLECTION, id, "Updated record");
        Ok(updated)
    }

    fn delete_record<T: Record>(&self, id: i64) -> StoreResult<bool> {
        let mut records = self.content().get_collection::<T>().into_records();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(false);
        }

        self.content().save_collection(&records)?;
        info!(collection = %T::COLLECTION, id, "Deleted record");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectCategory;
    use folio_storage::MemoryKeyValueStore;
    use folio_traits::KeyValueStore;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn logged_in_core() -> FolioCore {
        let core = FolioCore::in_memory();
        assert!(core.session.login("admin", "admin123").unwrap());
        core
    }

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: format!("{title} description"),
            category: "Cybersecurity".to_string(),
            tech_stack: "Rust".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_enter_requires_privilege() {
        let core = FolioCore::in_memory();
        assert!(matches!(
            AdminEditor::enter(&core),
            Err(StoreError::Unauthorized)
        ));

        core.session.login("admin", "admin123").unwrap();
        assert!(AdminEditor::enter(&core).is_ok());
    }

    #[test]
    fn test_create_mints_distinct_positive_ids() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();

        let ids: Vec<i64> = (0..5)
            .map(|n| editor.create_project(draft(&format!("P{n}"))).unwrap().id)
            .collect();

        assert!(ids.iter().all(|id| *id > 0));
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), 5);

        let all_ids: HashSet<_> = editor.projects().records.iter().map(|p| p.id).collect();
        assert_eq!(all_ids.len(), 9);
    }

    #[test]
    fn test_update_preserves_id() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();

        let original = editor.projects().find(2).cloned().unwrap();
        let mut form = ProjectDraft::from_project(&original);
        form.title = "Threat Monitor v2".to_string();

        let updated = editor.update_project(2, form).unwrap();

        assert_eq!(updated.id, 2);
        let projects = editor.projects();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects.records.iter().filter(|p| p.id == 2).count(), 1);
        assert_eq!(projects.find(2).unwrap().title, "Threat Monitor v2");
        // Position in the collection is unchanged
        assert_eq!(projects.records[1].id, 2);
    }

    #[test]
    fn test_update_collapses_duplicate_ids() {
        let core = logged_in_core();
        let duplicated = vec![
            draft("A").into_project(7).unwrap(),
            draft("B").into_project(7).unwrap(),
        ];
        core.content.save_projects(&duplicated).unwrap();
        let editor = AdminEditor::enter(&core).unwrap();

        editor.update_project(7, draft("C")).unwrap();

        let projects = editor.projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects.records[0].title, "C");
    }

    #[test]
    fn test_update_unknown_id_writes_nothing() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();
        let before = editor.projects().records;

        let result = editor.update_project(404, draft("Ghost"));

        assert!(matches!(
            result,
            Err(StoreError::NotFound { id: 404, .. })
        ));
        assert_eq!(editor.projects().records, before);
    }

    #[test]
    fn test_invalid_draft_writes_nothing() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();

        let result = editor.create_project(ProjectDraft::default());

        assert!(matches!(result, Err(StoreError::Validation(errors)) if errors.len() == 2));
        assert_eq!(editor.projects().len(), 4);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();

        assert!(editor.delete_service(3).unwrap());

        let services = editor.services();
        assert_eq!(services.len(), 5);
        assert!(services.find(3).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        let _subscription = core.notifier().subscribe(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!editor.delete_project(12345).unwrap());

        assert_eq!(editor.projects().len(), 4);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_service_create_and_update() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();

        let created = editor
            .create_service(ServiceDraft {
                title: "Code Review".to_string(),
                description: "Second pair of eyes".to_string(),
                icon: "software".to_string(),
                price: String::new(),
                features: "Rust, Go".to_string(),
            })
            .unwrap();
        assert_eq!(created.price, "Contact for pricing");
        assert_eq!(editor.services().len(), 7);

        let mut form = ServiceDraft::from_service(&created);
        form.price = "Hourly Rates".to_string();
        let updated = editor.update_service(created.id, form).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(editor.services().find(created.id).unwrap().price, "Hourly Rates");
    }

    #[test]
    fn test_end_to_end_scenario() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();
        assert_eq!(editor.projects().len(), 4);

        let created = editor
            .create_project(ProjectDraft {
                title: "New Site".to_string(),
                description: "Marketing site".to_string(),
                category: "Web Development".to_string(),
                tech_stack: "Vue, Firebase".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(created.tech_stack, vec!["Vue", "Firebase"]);
        assert_eq!(created.category, ProjectCategory::WebDevelopment);
        assert_eq!(editor.projects().len(), 5);

        assert!(editor.delete_project(1).unwrap());

        let projects = editor.projects();
        assert_eq!(projects.len(), 4);
        assert!(projects.records.iter().all(|p| p.id != 1));
        assert!(projects.find(created.id).is_some());
    }

    #[test]
    fn test_storage_failure_surfaces_from_editor() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let core = FolioCore::with_backend(backend.clone());
        core.session.login("admin", "admin123").unwrap();
        let editor = AdminEditor::enter(&core).unwrap();
        backend.set_read_only(true);

        let result = editor.create_project(draft("Blocked"));

        assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
        assert_eq!(core.content.projects().len(), 4);
    }

    #[test]
    fn test_logout_from_editor() {
        let core = logged_in_core();
        let editor = AdminEditor::enter(&core).unwrap();

        editor.logout().unwrap();

        assert!(!core.session.is_authenticated());
        assert!(!core.content.backend().contains_key("isAdmin").unwrap());
    }
}
