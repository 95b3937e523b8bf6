//! Console for driving an MCP server
//!
//! `webmcp` walks a server through the three calls a thin client needs:
//! `initialize`, `tools/list` and `tools/call`, with tool arguments typed
//! as one whitespace-separated line. Every response is printed as pretty
//! JSON on stdout, exactly as the server sent it; logs go to stderr.
//!
//! The server is either the bundled in-process demo server or any MCP
//! server started as a child process speaking newline-delimited JSON-RPC
//! on stdio.
//!
//! # Quick Start
//!
//! ```bash
//! webmcp tools
//! webmcp call add 5 3
//! webmcp --server ./my-mcp-server --server-arg --stdio shell
//! ```

use thiserror::Error;

pub use clap;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Server setup error: {0}")]
    ServerSetup(String),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Client error: {0}")]
    Client(#[from] webmcp_client::ClientError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn server_setup(msg: impl Into<String>) -> Self {
        Self::ServerSetup(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

// Modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod server;
pub mod shell;


// Re-export main types
pub use cli::{Cli, Command};
pub use commands::run;
pub use config::*;
pub use server::ServerHandle;
