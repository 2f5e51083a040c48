//! # Dashboard configuration (`lendview.toml`)
//!
//! Defines the TOML configuration file read by the server at startup
//! (filename: [`DashboardConfig::filename`] = `"lendview.toml"`).
//!
//! ```toml
//! [list]
//! page_size = 10          # rows per page in the user list
//!
//! [source]
//! users_path = "data/users.json"   # remote collection dataset
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or
//! empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `lendview.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// User-list configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows per page. 1-based pager maths assume it is non-zero.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Remote collection configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path of the JSON user dataset served as the remote collection.
    #[serde(default = "default_users_path")]
    pub users_path: String,
}

fn default_users_path() -> String {
    "data/users.json".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "lendview.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_defaults() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.source.users_path, "data/users.json");
    }

    #[test]
    fn toml_round_trips() {
        let mut config = DashboardConfig::default();
        config.list.page_size = 25;
        config.source.users_path = "fixtures/users.json".to_string();

        let toml = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = DashboardConfig::from_toml("[list]\npage_size = 5\n").unwrap();
        assert_eq!(config.list.page_size, 5);
        assert_eq!(config.source.users_path, "data/users.json");
    }
}
