//! # Router configuration — `router.toml`
//!
//! Settings supplied by the hosting environment at startup. Every section is
//! optional; a missing or empty file is the default configuration.
//!
//! ```toml
//! [history]
//! base_path = "/paste-app/"   # prefix stripped before route matching
//! ```

use serde::{Deserialize, Serialize};

use crate::location::normalize_base;

/// Top-level configuration stored in `router.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub history: HistoryConfig,
}

/// History section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Path the application is served under. "/" means the site root.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_base_path() -> String {
    "/".to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

impl RouterConfig {
    /// Create a config served under `base_path`.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            history: HistoryConfig {
                base_path: base_path.into(),
            },
        }
    }

    /// Base path with a leading `/` and no trailing `/` (empty for the root).
    pub fn base_path(&self) -> String {
        normalize_base(&self.history.base_path)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "router.toml"
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
    fn test_empty_file_is_default() {
        let config = RouterConfig::from_toml("").unwrap();
        assert_eq!(config, RouterConfig::default());
        assert_eq!(config.history.base_path, "/");
        assert_eq!(config.base_path(), "");
    }

    #[test]
    fn test_base_path_from_toml() {
        let config = RouterConfig::from_toml("[history]\nbase_path = \"app/\"\n").unwrap();
        assert_eq!(config.base_path(), "/app");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = RouterConfig::new("/paste-app/");
        let text = config.to_toml().unwrap();
        assert_eq!(RouterConfig::from_toml(&text).unwrap(), config);
    }
}
