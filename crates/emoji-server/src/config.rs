//! Configuration loading for the service binary.
//!
//! Configuration lives in an optional `emoji-server.yaml` in the working
//! directory. Every field has a default, so a missing file or a partial
//! file is fine. Environment variables are applied on top:
//!
//! - `EMOJI_SERVER_HOST` overrides `server.host`
//! - `EMOJI_SERVER_PORT` overrides `server.port`
//! - `EMOJI_LOG_JSON` overrides `logging.json`

use std::path::Path;

use emoji_api::ServerConfig;
use serde::Deserialize;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "emoji-server.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held a value of the wrong shape.
    #[error("invalid {name}: {message}")]
    InvalidOverride {
        /// Name of the environment variable.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Listening address.
    #[serde(default)]
    pub server: ServerSection,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `server` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The `logging` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info`).
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_host() -> String {
    ServerConfig::default().host
}

fn default_port() -> u16 {
    emoji_api::server::DEFAULT_PORT
}

fn default_level() -> String {
    String::from("info")
}

impl ServiceConfig {
    /// Load configuration from `path` if it exists, otherwise use defaults,
    /// then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if
    /// an override is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides looked up by environment variable name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] when a port or boolean
    /// override does not parse.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("EMOJI_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("EMOJI_SERVER_PORT") {
            self.server.port = port.trim().parse().map_err(|e| ConfigError::InvalidOverride {
                name: "EMOJI_SERVER_PORT",
                message: format!("{e}"),
            })?;
        }
        if let Some(json) = lookup("EMOJI_LOG_JSON") {
            self.logging.json = json.trim().parse().map_err(|e| ConfigError::InvalidOverride {
                name: "EMOJI_LOG_JSON",
                message: format!("{e}"),
            })?;
        }
        Ok(())
    }

    /// The listening address for the API server.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.server.host.clone(),
            port: self.server.port,
        }
    }
}
