//! Site configuration (`site.toml`).
//!
//! Every key has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use culture_form::FormSettings;

pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content document to validate and render
    pub content_path: PathBuf,
    /// Where `render` writes `index.html`
    pub output_dir: PathBuf,
    pub form: FormConfig,
    pub chrome: ChromeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Delay of the simulated submission handler
    pub submit_latency_ms: u64,
    /// How long the success panel stays up
    pub success_reset_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChromeConfig {
    /// Scroll offset past which the scroll-to-top button shows
    pub scroll_top_threshold: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("content/home.json"),
            output_dir: PathBuf::from("dist"),
            form: FormConfig::default(),
            chrome: ChromeConfig::default(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1000,
            success_reset_secs: 5,
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold: 500,
        }
    }
}

impl FormConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn settings(&self) -> FormSettings {
        FormSettings {
            success_reset: Duration::from_secs(self.success_reset_secs),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Resolve the configuration: an explicit path must exist; otherwise
    /// `./site.toml` is used when present, else the defaults.
    ///
    /// Returns the config and the file it came from, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            let config = Self::from_file(&local)?;
            return Ok((config, Some(local)));
        }
        Ok((Self::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = SiteConfig::from_toml("", Path::new("site.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.form.submit_latency(), Duration::from_millis(1000));
        assert_eq!(config.form.settings().success_reset, Duration::from_secs(5));
        assert_eq!(config.chrome.scroll_top_threshold, 500);
    }

    #[test]
    fn test_partial_overrides() {
        let text = r#"
output_dir = "public"

[form]
success_reset_secs = 2
"#;
        let config = SiteConfig::from_toml(text, Path::new("site.toml")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.form.success_reset_secs, 2);
        assert_eq!(config.form.submit_latency_ms, 1000);
        assert_eq!(config.content_path, PathBuf::from("content/home.json"));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = SiteConfig::from_toml("contnet_path = \"x.json\"", Path::new("site.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("site.toml"));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = SiteConfig::resolve(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let present = dir.path().join("site.toml");
        fs::write(&present, "[chrome]\nscroll_top_threshold = 300\n").unwrap();
        let (config, source) = SiteConfig::resolve(Some(&present)).unwrap();
        assert_eq!(config.chrome.scroll_top_threshold, 300);
        assert_eq!(source, Some(present));
    }
}
