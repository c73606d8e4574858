//! Configuration for ghview.
//!
//! One TOML file at the platform config path, overridable by the
//! `GHVIEW_BASE_URL` environment variable, translated into
//! `ghview_core::FetcherConfig`. The binary layers its `--base-url` flag on
//! top with [`Config::with_base_url`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ghview_core::FetcherConfig;
use ghview_core::config::DEFAULT_BASE_URL;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile API root; lookups go to `{base_url}/users/{username}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Replace the base URL when an override is given.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Validate and convert into the core fetch configuration.
    pub fn fetcher_config(&self) -> Result<FetcherConfig, ConfigError> {
        let base_url: url::Url =
            self.base_url
                .trim()
                .parse()
                .map_err(|e: url::ParseError| ConfigError::Validation {
                    field: "base_url".into(),
                    reason: format!("{e}: {}", self.base_url),
                })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", base_url.scheme()),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(FetcherConfig::new(base_url).with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    /// Render as TOML, e.g. for `--print-config`.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "ghview", "ghview").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("ghview");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
///
/// Precedence: `GHVIEW_BASE_URL` > file > defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("GHVIEW_").only(&["base_url"]));

    let config: Config = figment.extract()?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        Jail::expect_with(|_jail| {
            let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.base_url, "https://api.github.com");
            Ok(())
        });
    }

    #[test]
    fn file_values_are_read() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    base_url = "https://ghe.example.com/api/v3"
                    timeout_secs = 5
                "#,
            )?;
            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.base_url, "https://ghe.example.com/api/v3");
            assert_eq!(cfg.timeout_secs, 5);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file_base_url_only() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", r#"base_url = "https://file.example""#)?;
            jail.set_env("GHVIEW_BASE_URL", "http://localhost:8080");
            jail.set_env("GHVIEW_TIMEOUT_SECS", "1");
            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.base_url, "http://localhost:8080");
            assert_eq!(cfg.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn flag_override_wins() {
        let cfg = Config::default().with_base_url(Some("http://127.0.0.1:9".into()));
        assert_eq!(cfg.base_url, "http://127.0.0.1:9");
        assert_eq!(Config::default().with_base_url(None), Config::default());
    }

    #[test]
    fn fetcher_config_validates_url() {
        let ok = Config::default().fetcher_config().unwrap();
        assert_eq!(ok.base_url.as_str(), "https://api.github.com/");
        assert_eq!(ok.timeout, Duration::from_secs(30));

        let bad = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(
            bad.fetcher_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "base_url"
        ));

        let ftp = Config {
            base_url: "ftp://example.com".into(),
            ..Config::default()
        };
        assert!(ftp.fetcher_config().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.fetcher_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "timeout_secs"
        ));
    }

    #[test]
    fn toml_round_trip_of_defaults() {
        let text = Config::default().to_toml().unwrap();
        assert!(text.contains("base_url = \"https://api.github.com\""));
        assert!(text.contains("timeout_secs = 30"));
    }
}
