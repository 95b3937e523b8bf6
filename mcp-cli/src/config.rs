//! Configuration management and logging setup

use crate::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use webmcp_protocol::MCP_VERSION;

/// Whole CLI configuration, as read from a TOML file
///
/// Every section and field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub client: ClientConfig,
    pub server: ServerConfig,
    pub logging: DefaultLoggingConfig,
}

/// What the client says about itself on `initialize`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub name: String,
    pub version: String,
    pub protocol_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            protocol_version: MCP_VERSION.to_string(),
        }
    }
}

/// Which server to talk to
///
/// With no command the in-process demo server is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Program and arguments of an MCP server speaking JSON-RPC on stdio
    pub command: Option<Vec<String>>,
}

/// Default logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultLoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
    #[serde(rename = "compact")]
    Compact,
}

impl Default for DefaultLoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl DefaultLoggingConfig {
    /// Install the global tracing subscriber, writing to stderr
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a valid filter or a subscriber
    /// is already installed.
    pub fn initialize(&self) -> Result<(), CliError> {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| CliError::logging(format!("Invalid log level: {e}")))?;

        let result = match self.format {
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Compact => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init(),
        };

        result.map_err(|e| CliError::logging(e.to_string()))
    }
}

impl CliConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML for this shape.
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content)
            .map_err(|e| CliError::configuration(format!("Failed to parse config: {e}")))
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Check values that serde cannot
    ///
    /// # Errors
    ///
    /// Returns an error for an empty server command or empty client name.
    pub fn validate(&self) -> Result<(), CliError> {
        if let Some(command) = &self.server.command {
            if command.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(CliError::configuration("Server command is empty"));
            }
        }
        if self.client.name.trim().is_empty() {
            return Err(CliError::configuration("Client name is empty"));
        }
        Ok(())
    }
}
