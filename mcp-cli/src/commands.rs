//! One-shot commands

use crate::cli::Command;
use crate::config::CliConfig;
use crate::render::render_response;
use crate::server::ServerHandle;
use crate::shell::Shell;
use crate::CliError;
use std::io::{BufRead, Write};
use tracing::warn;
use webmcp_client::{McpClient, RequestHandler};

/// Build a client from the configuration around any handler
pub fn build_client<H: RequestHandler>(handler: H, config: &CliConfig) -> McpClient<H> {
    McpClient::new(handler)
        .with_client_info(&config.client.name, &config.client.version)
        .with_protocol_version(&config.client.protocol_version)
}

/// Connect to the configured server and run one command
///
/// # Errors
///
/// Returns an error if the server cannot be started, the first
/// `initialize` does not produce a readable response, or output fails.
pub fn run<R: BufRead, W: Write>(
    command: &Command,
    config: &CliConfig,
    input: R,
    out: W,
) -> Result<(), CliError> {
    let handler = ServerHandle::connect(&config.server)?;
    let client = build_client(handler, config);
    execute(command, client, input, out)
}

/// Run one command against an existing client
///
/// # Errors
///
/// See [`run`].
pub fn execute<H: RequestHandler, R: BufRead, W: Write>(
    command: &Command,
    mut client: McpClient<H>,
    input: R,
    mut out: W,
) -> Result<(), CliError> {
    match command {
        Command::Initialize => {
            let response = initialize(&mut client)?;
            render_response(&mut out, &response)?;
        }
        Command::Tools => {
            initialize(&mut client)?;
            let response = client.list_tools()?;
            render_response(&mut out, &response)?;
        }
        Command::Call { tool, params } => {
            initialize(&mut client)?;
            client.list_tools()?;
            if client.find_tool(tool).is_none() {
                warn!("Server did not list a tool named {}", tool);
            }
            let call = client.call_tool_with_input(tool, &params.join(" "))?;
            render_response(&mut out, &call.response)?;
        }
        Command::Shell => {
            Shell::new(client, input, &mut out).run()?;
        }
    }

    out.flush()?;
    Ok(())
}

/// The first request is the load check: a failure here stops everything
fn initialize<H: RequestHandler>(
    client: &mut McpClient<H>,
) -> Result<webmcp_protocol::Response, CliError> {
    client
        .initialize()
        .map_err(|e| CliError::server_setup(format!("Error loading server: {e}")))
}
