//! Client configuration: built-in defaults, an optional TOML file, then
//! environment and command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_API_HOST: &str = "http://openantrag.de/api";
pub const API_HOST_ENV: &str = "OPENANTRAG_API_HOST";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL every endpoint path is appended to.
    pub api_host: String,
    /// Request timeout; `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            timeout_secs: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Location of the per-user config file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("de", "openantrag", "openantrag")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl Config {
    /// Parses a TOML document. Absent keys take their defaults.
    pub fn from_toml(source: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: origin.display().to_string(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Resolves the configuration the way the CLI does.
    ///
    /// An explicit `path` must exist; the default per-user file is optional.
    /// `OPENANTRAG_API_HOST` and then `api_host` override the file.
    pub fn load(path: Option<&Path>, api_host: Option<&str>) -> Result<Self, ConfigError> {
        let env_host = std::env::var(API_HOST_ENV).ok();
        Self::load_with_env(path, env_host.as_deref(), api_host)
    }

    /// [`Config::load`] with the environment value passed in. A blank
    /// `env_host` is ignored.
    pub fn load_with_env(
        path: Option<&Path>,
        env_host: Option<&str>,
        api_host: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        if let Some(host) = env_host
            && !host.trim().is_empty()
        {
            debug!(host, "api host from environment");
            config.api_host = host.to_string();
        }
        if let Some(host) = api_host {
            config.api_host = host.to_string();
        }

        config.api_url()?;
        Ok(config)
    }

    /// `api_host` as an absolute http(s) URL.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidHost {
            value: self.api_host.clone(),
            reason,
        };
        let url = Url::parse(self.api_host.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            "http" | "https" => Err(invalid("missing host".to_string())),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_host, "http://openantrag.de/api");
        assert_eq!(config.timeout(), None);
        assert!(config.user_agent.starts_with("openantrag/"));
        assert_eq!(config.api_url().unwrap().path(), "/api");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config =
            Config::from_toml("timeout_secs = 5\n", Path::new("inline.toml")).unwrap();
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("apihost = \"x\"\n", Path::new("inline.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_api_url_validation() {
        let mut config = Config::default();
        config.api_host = "ftp://openantrag.de/api".to_string();
        assert!(matches!(
            config.api_url(),
            Err(ConfigError::InvalidHost { .. })
        ));
        config.api_host = "not a url".to_string();
        assert!(config.api_url().is_err());
        config.api_host = "https://example.org".to_string();
        assert!(config.api_url().is_ok());
    }
}
