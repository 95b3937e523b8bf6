//! Server selection

use crate::CliError;
use crate::config::ServerConfig;
use tracing::info;
use webmcp_client::{ProcessHandler, RequestHandler, TransportError};
use webmcp_server::DemoServer;

/// The server a console session talks to
#[derive(Debug)]
pub enum ServerHandle {
    /// Bundled in-process demo server
    Demo(DemoServer),
    /// External server on a child process
    Process(ProcessHandler),
}

impl ServerHandle {
    /// Start the configured server
    ///
    /// # Errors
    ///
    /// Returns an error if the server process cannot be spawned.
    pub fn connect(config: &ServerConfig) -> Result<Self, CliError> {
        match &config.command {
            Some(command) => {
                let handler = ProcessHandler::spawn(command.as_slice())
                    .map_err(|e| CliError::server_setup(format!("Error loading server: {e}")))?;
                Ok(Self::Process(handler))
            }
            None => {
                info!("Using the in-process demo server");
                Ok(Self::Demo(DemoServer::new()))
            }
        }
    }
}

impl RequestHandler for ServerHandle {
    fn handle_request(&mut self, request_json: &str) -> Result<String, TransportError> {
        match self {
            Self::Demo(server) => Ok(server.handle(request_json)),
            Self::Process(process) => process.handle_request(request_json),
        }
    }
}
