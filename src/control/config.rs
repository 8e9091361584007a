//! Configuration loading for the monitor.

use anyhow::Context;
use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "monitor.toml";

/// Monitor configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MonitorConfig {
    /// Page origin the relative API paths are resolved against
    pub base_url: String,
    /// Identifier of the display surface
    pub display_id: String,
    /// Extra env_logger filter directives, e.g. `reqwest=warn`
    pub log_filter: Option<String>,
    pub window_title: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            display_id: "debug".to_string(),
            log_filter: None,
            window_title: "Propolis Monitor".to_string(),
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a TOML file.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.base_url()?;
        Ok(config)
    }

    /// Pick the configuration for a command line argument.
    ///
    /// An explicit path must exist. Without one, `monitor.toml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn resolve(arg: Option<PathBuf>) -> anyhow::Result<Self> {
        match arg {
            Some(path) => Self::load(&path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() { Self::load(fallback) } else { Ok(Self::default()) }
            }
        }
    }

    /// Parsed base URL.
    pub fn base_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(&self.base_url).with_context(|| format!("Invalid base-url {:?}", self.base_url))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("base-url {:?} cannot be used as a base", self.base_url);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = MonitorConfig::parse("").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.display_id, "debug");
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn kebab_case_keys_override_defaults() {
        let config = MonitorConfig::parse(
            r#"
base-url = "http://10.0.0.2:9000/ui/"
display-id = "panel"
log-filter = "reqwest=warn"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url().unwrap().as_str(), "http://10.0.0.2:9000/ui/");
        assert_eq!(config.display_id, "panel");
        assert_eq!(config.log_filter.as_deref(), Some("reqwest=warn"));
        assert_eq!(config.window_title, "Propolis Monitor");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(MonitorConfig::parse("base-url = \"not a url\"").is_err());
        assert!(MonitorConfig::parse("base-url = \"mailto:ops@example.org\"").is_err());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = MonitorConfig::resolve(Some(PathBuf::from("/nonexistent/monitor.toml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("propolis-monitor-{}.toml", std::process::id()));
        std::fs::write(&path, "window-title = \"Lab\"\n").unwrap();
        let config = MonitorConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.window_title, "Lab");
    }
}
