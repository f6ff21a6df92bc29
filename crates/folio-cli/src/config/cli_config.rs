//! CLI configuration file support
//!
//! Loads configuration from ~/.config/folio/config.toml

use folio_core::contact::DEFAULT_WHATSAPP_NUMBER;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default settings
    #[serde(default)]
    pub default: DefaultConfig,
    /// Contact widget settings
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Default configuration values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// Default profile database path
    pub db_path: Option<String>,
}

/// Contact configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Number the chat widget messages, digits only with country code
    pub whatsapp_number: Option<String>,
}

impl CliConfig {
    /// Load configuration from default path
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Get the default configuration file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }

    pub fn whatsapp_number(&self) -> &str {
        self.contact
            .whatsapp_number
            .as_deref()
            .filter(|number| !number.trim().is_empty())
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = CliConfig::load_from_path(Some(temp_dir.path().join("absent.toml")));
        assert!(config.default.db_path.is_none());
        assert_eq!(config.whatsapp_number(), DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn test_load_values() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[default]\ndb_path = \"/tmp/site.db\"\n\n[contact]\nwhatsapp_number = \"15550100\"\n",
        )
        .unwrap();

        let config = CliConfig::load_from_path(Some(path));
        assert_eq!(config.default.db_path.as_deref(), Some("/tmp/site.db"));
        assert_eq!(config.whatsapp_number(), "15550100");
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "default = [not toml").unwrap();

        let config = CliConfig::load_from_path(Some(path));
        assert!(config.default.db_path.is_none());
    }
}
