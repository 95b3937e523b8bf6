//! Command-line arguments

use crate::CliError;
use crate::config::{CliConfig, LogFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Drive an MCP server through initialize, tools/list and tools/call
#[derive(Debug, Clone, Parser)]
#[command(name = "webmcp", version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "WEBMCP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// MCP server program to start (stdio transport); the demo server is used otherwise
    #[arg(long, value_name = "PROGRAM", global = true)]
    pub server: Option<String>,

    /// Argument passed to the server program (repeatable)
    #[arg(
        long = "server-arg",
        value_name = "ARG",
        allow_hyphen_values = true,
        global = true
    )]
    pub server_args: Vec<String>,

    /// Log level filter, e.g. `debug` or `webmcp_client=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Send `initialize` and print the response
    Initialize,

    /// Initialize, then send `tools/list` and print the response
    Tools,

    /// Initialize, list tools, then call one with positional parameters
    Call {
        /// Tool name
        tool: String,

        /// Parameter values, in the order the tool's schema declares them
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        params: Vec<String>,
    },

    /// Interactive prompt
    Shell,
}

impl Cli {
    /// Load the config file (if any) and apply command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the result
    /// does not validate.
    pub fn resolve_config(&self) -> Result<CliConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overlay command-line values on a loaded config
    pub fn apply(&self, config: &mut CliConfig) {
        if let Some(program) = &self.server {
            let mut command = vec![program.clone()];
            command.extend(self.server_args.iter().cloned());
            config.server.command = Some(command);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}
