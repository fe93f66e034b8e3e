//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//! Every default matches the values the dashboard ships with, so an empty
//! configuration talks to the test identity service.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub oauth: OAuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity service connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unset means no timeout; a hung request hangs its action
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://iapitest.eva.guru/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

/// Client identification sent with the password grant
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthConfig {
    #[serde(default = "default_client_id")]
    pub client_id: String,

    #[serde(default = "default_client_secret")]
    pub client_secret: String,

    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,

    #[serde(default = "default_grant_type")]
    pub grant_type: String,

    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_client_id() -> String {
    "C0001".to_string()
}

fn default_client_secret() -> String {
    "SECRET0001".to_string()
}

fn default_redirect_uri() -> String {
    "https://api.eva.guru".to_string()
}

fn default_grant_type() -> String {
    "password".to_string()
}

fn default_scope() -> String {
    "amazon_data".to_string()
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: default_client_id(),
            client_secret: default_client_secret(),
            redirect_uri: default_redirect_uri(),
            grant_type: default_grant_type(),
            scope: default_scope(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("evadash").join("config.toml")),
            Some(PathBuf::from("/etc/evadash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("EVADASH_API_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = lookup("EVADASH_REQUEST_TIMEOUT_SECS") {
            if let Ok(s) = secs.parse() {
                self.api.request_timeout_secs = Some(s);
            }
        }

        if let Some(client_id) = lookup("EVADASH_CLIENT_ID") {
            self.oauth.client_id = client_id;
        }
        if let Some(secret) = lookup("EVADASH_CLIENT_SECRET") {
            self.oauth.client_secret = secret;
        }
        if let Some(uri) = lookup("EVADASH_REDIRECT_URI") {
            self.oauth.redirect_uri = uri;
        }

        if let Some(level) = lookup("EVADASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("EVADASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Evadash Configuration
#
# Environment variables override these settings:
# - EVADASH_API_URL
# - EVADASH_REQUEST_TIMEOUT_SECS
# - EVADASH_CLIENT_ID
# - EVADASH_CLIENT_SECRET
# - EVADASH_REDIRECT_URI
# - EVADASH_LOG_LEVEL
# - EVADASH_LOG_FORMAT

[api]
# Identity service base address
base_url = "https://iapitest.eva.guru/"

# Request timeout in seconds (unset = wait indefinitely)
# request_timeout_secs = 30

[oauth]
# Client identification sent with the password grant
client_id = "C0001"
client_secret = "SECRET0001"
redirect_uri = "https://api.eva.guru"
grant_type = "password"
scope = "amazon_data"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
