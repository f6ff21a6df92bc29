//! Form input for the project and service editors.

use crate::models::{
    DEFAULT_PROJECT_IMAGE, DEFAULT_SERVICE_PRICE, Project, ProjectCategory, Service, ServiceIcon,
    ValidationError,
};
use serde::{Deserialize, Serialize};

/// Split a comma-separated form field, trimming entries and dropping blanks.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required(
    field: &str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::required(field));
    }
    trimmed.to_string()
}

/// Raw values of the project form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Category name; blank selects Web Development
    pub category: String,
    /// Comma-separated technologies
    pub tech_stack: String,
    pub live_url: String,
    pub repo_url: String,
}

impl ProjectDraft {
    /// Form prefilled from an existing record, for editing.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            category: project.category.as_str().to_string(),
            tech_stack: project.tech_stack.join(", "),
            live_url: project.live_url.clone().unwrap_or_default(),
            repo_url: project.repo_url.clone().unwrap_or_default(),
        }
    }

    /// Validate and build the record carrying `id`.
    pub fn into_project(self, id: i64) -> Result<Project, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let title = required("title", &self.title, &mut errors);
        let description = required("description", &self.description, &mut errors);

        let category = if self.category.trim().is_empty() {
            ProjectCategory::default()
        } else {
            match self.category.parse::<ProjectCategory>() {
                Ok(category) => category,
                Err(message) => {
                    errors.push(ValidationError::new("category", message));
                    ProjectCategory::default()
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Project {
            id,
            title,
            description,
            image: optional(&self.image).unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string()),
            category,
            tech_stack: split_list(&self.tech_stack),
            live_url: optional(&self.live_url),
            repo_url: optional(&self.repo_url),
        })
    }
}

/// Raw values of the service form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    /// Icon key; blank selects `web`
    pub icon: String,
    pub price: String,
    /// Comma-separated feature list
    pub features: String,
}

impl ServiceDraft {
    pub fn from_service(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
            price: service.price.clone(),
            features: service.features.join(", "),
        }
    }

    /// Validate and build the record carrying `id`. Unknown icon keys are
    /// kept; the renderer substitutes its fallback icon.
    pub fn into_service(self, id: i64) -> Result<Service, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let title = required("title", &self.title, &mut errors);
        let description = required("description", &self.description, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Service {
            id,
            title,
            description,
            icon: optional(&self.icon).unwrap_or_else(|| ServiceIcon::Web.key().to_string()),
            price: optional(&self.price).unwrap_or_else(|| DEFAULT_SERVICE_PRICE.to_string()),
            features: split_list(&self.features),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_draft() -> ProjectDraft {
        ProjectDraft {
            title: "New Site".to_string(),
            description: "Landing page".to_string(),
            category: "Web Development".to_string(),
            tech_stack: "Vue, Firebase".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("Vue, Firebase"), vec!["Vue", "Firebase"]);
        assert_eq!(split_list("  a ,b,, c  "), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_project_defaults_applied() {
        let project = project_draft().into_project(5).unwrap();
        assert_eq!(project.id, 5);
        assert_eq!(project.tech_stack, vec!["Vue", "Firebase"]);
        assert_eq!(project.image, DEFAULT_PROJECT_IMAGE);
        assert_eq!(project.live_url, None);
        assert_eq!(project.repo_url, None);
    }

    #[test]
    fn test_project_requires_title_and_description() {
        let draft = ProjectDraft {
            title: "  ".to_string(),
            ..Default::default()
        };
        let errors = draft.into_project(1).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "description"]);
    }

    #[test]
    fn test_project_rejects_unknown_category() {
        let draft = ProjectDraft {
            category: "Game Dev".to_string(),
            ..project_draft()
        };
        let errors = draft.into_project(1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "category");
    }

    #[test]
    fn test_blank_category_defaults() {
        let draft = ProjectDraft {
            category: String::new(),
            ..project_draft()
        };
        let project = draft.into_project(1).unwrap();
        assert_eq!(project.category, ProjectCategory::WebDevelopment);
    }

    #[test]
    fn test_project_draft_round_trips_through_form() {
        let project = Project {
            id: 9,
            title: "App".to_string(),
            description: "Mobile".to_string(),
            image: "https://example.com/a.png".to_string(),
            category: ProjectCategory::MobileApp,
            tech_stack: vec!["Kotlin".to_string(), "Swift".to_string()],
            live_url: Some("https://app.example.com".to_string()),
            repo_url: None,
        };
        let rebuilt = ProjectDraft::from_project(&project).into_project(9).unwrap();
        assert_eq!(rebuilt, project);
    }

    #[test]
    fn test_service_defaults_applied() {
        let draft = ServiceDraft {
            title: "Audits".to_string(),
            description: "Security reviews".to_string(),
            features: "Pentest, Reports".to_string(),
            ..Default::default()
        };
        let service = draft.into_service(3).unwrap();
        assert_eq!(service.icon, "web");
        assert_eq!(service.price, DEFAULT_SERVICE_PRICE);
        assert_eq!(service.features, vec!["Pentest", "Reports"]);
    }

    #[test]
    fn test_service_keeps_unknown_icon() {
        let draft = ServiceDraft {
            title: "Launch".to_string(),
            description: "Rockets".to_string(),
            icon: "rocket".to_string(),
            ..Default::default()
        };
        let service = draft.into_service(1).unwrap();
        assert_eq!(service.icon, "rocket");
        assert_eq!(service.display_icon(), ServiceIcon::Software);
    }
}
