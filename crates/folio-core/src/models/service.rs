//! Service offering model.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Price label used when a service has none.
pub const DEFAULT_SERVICE_PRICE: &str = "Contact for pricing";

/// Icons the services grid knows how to draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ServiceIcon {
    Web,
    Security,
    Mobile,
    Automation,
    Software,
    Consulting,
}

impl ServiceIcon {
    pub const ALL: [ServiceIcon; 6] = [
        ServiceIcon::Web,
        ServiceIcon::Security,
        ServiceIcon::Mobile,
        ServiceIcon::Automation,
        ServiceIcon::Software,
        ServiceIcon::Consulting,
    ];

    /// Icon drawn for keys outside the known set.
    pub const FALLBACK: ServiceIcon = ServiceIcon::Software;

    pub fn key(self) -> &'static str {
        match self {
            ServiceIcon::Web => "web",
            ServiceIcon::Security => "security",
            ServiceIcon::Mobile => "mobile",
            ServiceIcon::Automation => "automation",
            ServiceIcon::Software => "software",
            ServiceIcon::Consulting => "consulting",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceIcon::Web => "Web Dev",
            ServiceIcon::Security => "Security",
            ServiceIcon::Mobile => "Mobile",
            ServiceIcon::Automation => "Automation",
            ServiceIcon::Software => "Software",
            ServiceIcon::Consulting => "Consulting",
        }
    }

    /// Exact key lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.key() == key)
    }

    /// Lookup for rendering: unknown keys resolve to [`ServiceIcon::FALLBACK`].
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn default_service_price() -> String {
    DEFAULT_SERVICE_PRICE.to_string()
}

/// A service offering shown in the public services grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Service {
    #[ts(type = "number")]
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Icon key; kept verbatim even when not one of [`ServiceIcon::ALL`]
    pub icon: String,
    #[serde(default = "default_service_price")]
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Service {
    /// Icon to draw for this service.
    pub fn display_icon(&self) -> ServiceIcon {
        ServiceIcon::resolve(&self.icon)
    }
}
