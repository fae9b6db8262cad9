//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (CUPDASH_*)
//! 2. TOML config file (if CUPDASH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Front end the server binary exposes once the dataset is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    /// Single-page HTTP dashboard.
    #[default]
    Http,
    /// MCP tools over stdio.
    Mcp,
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (CUPDASH_*)
/// 2. TOML config file (if CUPDASH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page holding the finals table.
    ///
    /// Set via CUPDASH_SOURCE_URL environment variable.
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Read the HTML from this file instead of fetching `source_url`.
    ///
    /// Set via CUPDASH_SOURCE_FILE environment variable.
    #[serde(default)]
    pub source_file: Option<PathBuf>,

    /// Substring the target table's caption must contain.
    ///
    /// Set via CUPDASH_CAPTION environment variable.
    #[serde(default = "default_caption")]
    pub caption: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via CUPDASH_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via CUPDASH_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum bytes to fetch.
    ///
    /// Set via CUPDASH_MAX_BYTES environment variable.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Address the HTTP dashboard listens on.
    ///
    /// Set via CUPDASH_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Which front end to serve.
    ///
    /// Set via CUPDASH_SERVE_MODE environment variable (`http` or `mcp`).
    #[serde(default)]
    pub serve_mode: ServeMode,
}

fn default_source_url() -> String {
    "https://en.wikipedia.org/wiki/List_of_FIFA_World_Cup_finals".into()
}

fn default_caption() -> String {
    "List of FIFA World Cup finals".into()
}

fn default_user_agent() -> String {
    "cupdash/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

fn default_max_bytes() -> usize {
    5_242_880 // 5MB
}

fn default_bind_addr() -> String {
    "127.0.0.1:8050".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            source_file: None,
            caption: default_caption(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_bytes: default_max_bytes(),
            bind_addr: default_bind_addr(),
            serve_mode: ServeMode::default(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parsed listen address for the HTTP dashboard.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `bind_addr` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            field: "bind_addr".into(),
            reason: e.to_string(),
        })
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `CUPDASH_`
    /// 2. TOML file from `CUPDASH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("CUPDASH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("CUPDASH_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.source_url, "https://en.wikipedia.org/wiki/List_of_FIFA_World_Cup_finals");
        assert!(config.source_file.is_none());
        assert_eq!(config.caption, "List of FIFA World Cup finals");
        assert_eq!(config.user_agent, "cupdash/0.1");
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.max_bytes, 5_242_880);
        assert_eq!(config.bind_addr, "127.0.0.1:8050");
        assert_eq!(config.serve_mode, ServeMode::Http);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(20_000));
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig::default();
        assert_eq!(config.socket_addr().unwrap().port(), 8050);

        let bad = AppConfig { bind_addr: "nowhere".into(), ..Default::default() };
        assert!(matches!(bad.socket_addr(), Err(ConfigError::Invalid { field, .. }) if field == "bind_addr"));
    }

    #[test]
    fn test_load_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("CUPDASH_SERVE_MODE", "mcp");
            jail.set_env("CUPDASH_TIMEOUT_MS", "5000");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.serve_mode, ServeMode::Mcp);
            assert_eq!(config.timeout_ms, 5000);
            assert_eq!(config.caption, "List of FIFA World Cup finals");
            Ok(())
        });
    }

    #[test]
    fn test_load_toml_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "cupdash.toml",
                r#"
                    source_file = "finals.html"
                    bind_addr = "0.0.0.0:9000"
                    user_agent = "from-file"
                "#,
            )?;
            jail.set_env("CUPDASH_CONFIG_FILE", "cupdash.toml");
            jail.set_env("CUPDASH_USER_AGENT", "from-env");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.source_file, Some(PathBuf::from("finals.html")));
            assert_eq!(config.bind_addr, "0.0.0.0:9000");
            assert_eq!(config.user_agent, "from-env");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.set_env("CUPDASH_TIMEOUT_MS", "10");
            let result = AppConfig::load();
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
            Ok(())
        });
    }
}
