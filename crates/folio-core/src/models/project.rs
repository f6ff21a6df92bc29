//! Project model for the portfolio showcase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Image shown when a project has no picture of its own.
pub const DEFAULT_PROJECT_IMAGE: &str = "https://placehold.co/600x400";

/// Fixed set of portfolio categories, serialized by display name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, Default, PartialEq, Eq, Hash)]
#[ts(export)]
pub enum ProjectCategory {
    #[default]
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
    #[serde(rename = "System Automation")]
    SystemAutomation,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::WebDevelopment,
        ProjectCategory::MobileApp,
        ProjectCategory::Cybersecurity,
        ProjectCategory::SystemAutomation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::WebDevelopment => "Web Development",
            ProjectCategory::MobileApp => "Mobile App",
            ProjectCategory::Cybersecurity => "Cybersecurity",
            ProjectCategory::SystemAutomation => "System Automation",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    /// Accepts the display name in any case, or a slug such as `mobile-app`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().to_lowercase() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}', expected one of: {}",
                    s.trim(),
                    Self::ALL.map(ProjectCategory::as_str).join(", ")
                )
            })
    }
}

fn default_project_image() -> String {
    DEFAULT_PROJECT_IMAGE.to_string()
}

/// A portfolio project shown in the public projects grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Project {
    /// Creation timestamp in milliseconds, doubling as the record id
    #[ts(type = "number")]
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Cover image URL
    #[serde(default = "default_project_image")]
    pub image: String,
    pub category: ProjectCategory,
    /// Technologies in display order
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}
