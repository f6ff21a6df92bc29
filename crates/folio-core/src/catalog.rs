//! Read-only views used by the public pages and the dashboard.

use crate::events::Subscription;
use crate::models::{Project, ProjectCategory, Service};
use crate::storage::ContentStore;
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Number of projects listed under "recent" on the dashboard.
pub const RECENT_PROJECTS_LIMIT: usize = 4;

/// Filter tab above the projects grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Tabs in display order: `All` first, then every category.
    pub fn tabs() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub total_services: usize,
    pub recent_projects: Vec<Project>,
}

/// One-shot reads for a page render.
#[derive(Clone, Copy)]
pub struct Catalog<'a> {
    content: &'a ContentStore,
}

impl<'a> Catalog<'a> {
    pub fn new(content: &'a ContentStore) -> Self {
        Self { content }
    }

    pub fn projects(&self) -> Vec<Project> {
        self.content.projects().into_records()
    }

    pub fn services(&self) -> Vec<Service> {
        self.content.services().into_records()
    }

    /// Projects under the given tab, in collection order.
    pub fn projects_in(&self, filter: CategoryFilter) -> Vec<Project> {
        self.projects()
            .into_iter()
            .filter(|project| filter.matches(project))
            .collect()
    }

    pub fn dashboard(&self) -> DashboardSummary {
        let projects = self.projects();
        DashboardSummary {
            total_projects: projects.len(),
            total_services: self.content.services().len(),
            recent_projects: projects.into_iter().take(RECENT_PROJECTS_LIMIT).collect(),
        }
    }
}

struct Snapshot {
    projects: Vec<Project>,
    services: Vec<Service>,
}

/// A mounted view that keeps its last read and re-reads both collections on
/// the first access after a change notification.
pub struct LiveCatalog {
    content: ContentStore,
    stale: Arc<AtomicBool>,
    snapshot: Mutex<Option<Snapshot>>,
    reloads: AtomicUsize,
    _subscription: Subscription,
}

impl LiveCatalog {
    pub fn new(content: ContentStore) -> Self {
        let stale = Arc::new(AtomicBool::new(true));
        let flag = stale.clone();
        let subscription = content.notifier().subscribe(move || {
            flag.store(true, Ordering::SeqCst);
        });
        Self {
            content,
            stale,
            snapshot: Mutex::new(None),
            reloads: AtomicUsize::new(0),
            _subscription: subscription,
        }
    }

    fn with_snapshot<R>(&self, read: impl FnOnce(&Snapshot) -> R) -> R {
        let mut guard = self.snapshot.lock();
        if self.stale.swap(false, Ordering::SeqCst) {
            *guard = None;
        }
        let snapshot = guard.get_or_insert_with(|| {
            self.reloads.fetch_add(1, Ordering::SeqCst);
            Snapshot {
                projects: self.content.projects().into_records(),
                services: self.content.services().into_records(),
            }
        });
        read(snapshot)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.with_snapshot(|snapshot| snapshot.projects.clone())
    }

    pub fn projects_in(&self, filter: CategoryFilter) -> Vec<Project> {
        self.with_snapshot(|snapshot| {
            snapshot
                .projects
                .iter()
                .filter(|project| filter.matches(project))
                .cloned()
                .collect()
        })
    }

    pub fn services(&self) -> Vec<Service> {
        self.with_snapshot(|snapshot| snapshot.services.clone())
    }

    /// How many times the view has read the store.
    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioCore;
    use crate::editor::{AdminEditor, ProjectDraft};

    #[test]
    fn test_tabs_order() {
        let tabs: Vec<String> = CategoryFilter::tabs().iter().map(ToString::to_string).collect();
        assert_eq!(
            tabs,
            vec![
                "All",
                "Web Development",
                "Mobile App",
                "Cybersecurity",
                "System Automation"
            ]
        );
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "mobile app".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ProjectCategory::MobileApp)
        );
        assert!("Games".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_projects_in_category() {
        let core = FolioCore::in_memory();
        let catalog = core.catalog();

        assert_eq!(catalog.projects_in(CategoryFilter::All).len(), 4);

        let security = catalog.projects_in(CategoryFilter::Only(ProjectCategory::Cybersecurity));
        assert_eq!(security.len(), 1);
        assert_eq!(security[0].title, "Cyber Threat Monitor");
    }

    #[test]
    fn test_dashboard_summary() {
        let core = FolioCore::in_memory();
        core.session.login("admin", "admin123").unwrap();
        let editor = AdminEditor::enter(&core).unwrap();
        editor
            .create_project(ProjectDraft {
                title: "Fifth".to_string(),
                description: "Newest".to_string(),
                ..Default::default()
            })
            .unwrap();

        let summary = core.catalog().dashboard();

        assert_eq!(summary.total_projects, 5);
        assert_eq!(summary.total_services, 6);
        assert_eq!(summary.recent_projects.len(), RECENT_PROJECTS_LIMIT);
        assert_eq!(summary.recent_projects[0].id, 1);
    }

    #[test]
    fn test_live_catalog_rereads_after_save() {
        let core = FolioCore::in_memory();
        let live = core.live_catalog();

        assert_eq!(live.projects().len(), 4);
        assert_eq!(live.services().len(), 6);
        assert_eq!(live.reload_count(), 1);

        core.session.login("admin", "admin123").unwrap();
        AdminEditor::enter(&core).unwrap().delete_project(4).unwrap();

        assert_eq!(live.projects().len(), 3);
        assert_eq!(live.reload_count(), 2);
        assert_eq!(
            live.projects_in(CategoryFilter::Only(ProjectCategory::MobileApp)).len(),
            0
        );
        assert_eq!(live.reload_count(), 2);
    }

    #[test]
    fn test_dropping_live_catalog_unsubscribes() {
        let core = FolioCore::in_memory();
        let live = core.live_catalog();
        assert_eq!(core.notifier().observer_count(), 1);

        drop(live);

        assert_eq!(core.notifier().observer_count(), 0);
    }
}
