//! The request handler capability
//!
//! Whatever actually speaks MCP sits behind [`RequestHandler`]: one
//! synchronous call taking a serialized JSON-RPC request and returning the
//! serialized response. There is no timeout and no cancellation; a handler
//! is expected to answer promptly.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while handing a request to the server
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server process could not be started: {0}")]
    Spawn(String),

    #[error("Server closed the connection")]
    Closed,
}

/// Serialized request in, serialized response out
pub trait RequestHandler {
    /// Hand one JSON-RPC request to the server and wait for its response
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request could not be delivered or
    /// no response came back. Protocol-level failures are not errors here;
    /// they travel inside the response text.
    fn handle_request(&mut self, request_json: &str) -> Result<String, TransportError>;
}

/// Plain functions with the shape of an exported `handleRequest`
impl<F> RequestHandler for F
where
    F: Fn(&str) -> String,
{
    fn handle_request(&mut self, request_json: &str) -> Result<String, TransportError> {
        Ok(self(request_json))
    }
}

/// MCP server running as a child process
///
/// Requests and responses are newline-delimited JSON on the child's stdin
/// and stdout, one response line per request line. The child's stderr is
/// inherited.
#[derive(Debug)]
pub struct ProcessHandler {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessHandler {
    /// Spawn `program` with `args`
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Spawn`] if the command is empty or the
    /// process cannot be started.
    pub fn spawn<S: AsRef<str>>(command: &[S]) -> Result<Self, TransportError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| TransportError::Spawn("empty server command".to_string()))?;

        let mut child = Command::new(program.as_ref())
            .args(args.iter().map(AsRef::as_ref))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| TransportError::Spawn(format!("{}: {e}", program.as_ref())))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| TransportError::Spawn("child stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| TransportError::Spawn("child stdout unavailable".to_string()))?;

        info!(program = program.as_ref(), pid = child.id(), "Started MCP server process");

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }

    /// Process id of the server
    pub fn id(&self) -> u32 {
        self.child.id()
    }
}

impl RequestHandler for ProcessHandler {
    fn handle_request(&mut self, request_json: &str) -> Result<String, TransportError> {
        // Embedded newlines would break the framing
        let line = request_json.replace(['\n', '\r'], " ");
        writeln!(self.stdin, "{line}")?;
        self.stdin.flush()?;

        let mut response = String::new();
        if self.stdout.read_line(&mut response)? == 0 {
            return Err(TransportError::Closed);
        }

        let response = response.trim_end_matches(['\n', '\r']).to_string();
        debug!(bytes = response.len(), "Read response line");
        Ok(response)
    }
}

impl Drop for ProcessHandler {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            debug!("Server process already gone: {}", e);
        }
        if let Err(e) = self.child.wait() {
            warn!("Failed to reap server process: {}", e);
        }
    }
}
