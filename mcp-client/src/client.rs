//! MCP client call paths
//!
//! [`McpClient`] strings the pieces together: build an envelope from the
//! session, encode it, hand it to the [`RequestHandler`], decode whatever
//! comes back. The decoded response is always returned as-is. Client state
//! (server info, tool list) is only updated when the response carries a
//! `result` of the expected shape; anything else leaves it untouched.

use crate::coercion::{ToolArguments, coerce_arguments};
use crate::handler::{RequestHandler, TransportError};
use crate::session::Session;
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use webmcp_protocol::{
    CallToolRequestParam, Implementation, InitializeRequestParam, InitializeResult,
    ListToolsResult, MCP_VERSION, Response, Tool, is_protocol_version_supported,
};

/// Errors from a client call
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to parse response: {source}")]
    Decode {
        source: serde_json::Error,
        /// The response text as received
        response: String,
    },
}

/// Outcome of a `tools/call` built from raw input
#[derive(Debug, Clone)]
pub struct ToolCall {
    /// Arguments as coerced from the input line
    pub arguments: ToolArguments,
    /// Response as returned by the server
    pub response: Response,
}

/// MCP client bound to one request handler
pub struct McpClient<H> {
    handler: H,
    session: Session,
    client_info: Implementation,
    protocol_version: String,
    server: Option<InitializeResult>,
    tools: Vec<Tool>,
}

impl<H: RequestHandler> McpClient<H> {
    /// Create a client speaking [`MCP_VERSION`]
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            session: Session::new(),
            client_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            protocol_version: MCP_VERSION.to_string(),
            server: None,
            tools: Vec::new(),
        }
    }

    /// Set the `clientInfo` sent on `initialize`
    pub fn with_client_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.client_info = Implementation {
            name: name.into(),
            version: version.into(),
        };
        self
    }

    /// Set the protocol version requested on `initialize`
    pub fn with_protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = version.into();
        self
    }

    /// Send one request and decode the response
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be encoded, the handler fails,
    /// or the response text is not JSON. Error responses are not errors.
    #[instrument(skip(self, params))]
    pub fn send_request(
        &mut self,
        method: &str,
        params: Option<Value>,
    ) -> Result<Response, ClientError> {
        let request = self.session.request(method, params);
        let request_json = Session::encode(&request).map_err(ClientError::Encode)?;
        debug!("Sending request: {}", request_json);

        let response_json = self.handler.handle_request(&request_json)?;
        debug!("Received response: {}", response_json);

        Session::decode(&response_json).map_err(|source| ClientError::Decode {
            source,
            response: response_json,
        })
    }

    /// Send `initialize` and record the server's answer
    ///
    /// # Errors
    ///
    /// See [`McpClient::send_request`].
    pub fn initialize(&mut self) -> Result<Response, ClientError> {
        let params = InitializeRequestParam {
            protocol_version: self.protocol_version.clone(),
            capabilities: json!({}),
            client_info: self.client_info.clone(),
        };
        let params = serde_json::to_value(params).map_err(ClientError::Encode)?;

        let response = self.send_request("initialize", Some(params))?;

        if let Some(result) = response.result_as::<InitializeResult>() {
            info!(
                server = %result.server_info.name,
                version = %result.server_info.version,
                protocol = %result.protocol_version,
                "Server initialized"
            );
            if !is_protocol_version_supported(&result.protocol_version) {
                warn!(
                    "Server answered with unsupported protocol version {}",
                    result.protocol_version
                );
            }
            self.server = Some(result);
        }

        Ok(response)
    }

    /// Send `tools/list` and remember the tools
    ///
    /// # Errors
    ///
    /// See [`McpClient::send_request`].
    pub fn list_tools(&mut self) -> Result<Response, ClientError> {
        let response = self.send_request("tools/list", None)?;

        if let Some(result) = response.result_as::<ListToolsResult>() {
            info!(count = result.tools.len(), "Listed tools");
            self.tools = result.tools;
        }

        Ok(response)
    }

    /// Send `tools/call` with ready-made arguments
    ///
    /// # Errors
    ///
    /// See [`McpClient::send_request`].
    pub fn call_tool(
        &mut self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<Response, ClientError> {
        let params = CallToolRequestParam {
            name: name.to_string(),
            arguments: Some(arguments),
        };
        let params = serde_json::to_value(params).map_err(ClientError::Encode)?;

        self.send_request("tools/call", Some(params))
    }

    /// Coerce a whitespace-delimited input line against a known tool and call it
    ///
    /// The tool is looked up in the list from the last [`McpClient::list_tools`].
    /// An unknown tool is still called, with empty arguments.
    ///
    /// # Errors
    ///
    /// See [`McpClient::send_request`].
    pub fn call_tool_with_input(&mut self, name: &str, raw: &str) -> Result<ToolCall, ClientError> {
        let arguments = match self.find_tool(name) {
            Some(tool) => coerce_arguments(tool, raw.trim()),
            None => {
                debug!("Tool {} not in the listed tools, sending no arguments", name);
                ToolArguments::default()
            }
        };

        for (param, raw) in arguments.fallbacks() {
            warn!("Parameter {} expects a number, sending {:?} as text", param, raw);
        }
        if !arguments.dropped_tokens().is_empty() {
            debug!("Ignoring extra input: {:?}", arguments.dropped_tokens());
        }

        let response = self.call_tool(name, arguments.to_json())?;
        Ok(ToolCall {
            arguments,
            response,
        })
    }

    /// Server answer to `initialize`, if one was recorded
    pub fn server(&self) -> Option<&InitializeResult> {
        self.server.as_ref()
    }

    /// Server name and version, if initialized
    pub fn server_info(&self) -> Option<&Implementation> {
        self.server.as_ref().map(|s| &s.server_info)
    }

    /// Protocol version the server answered with, if initialized
    pub fn negotiated_protocol_version(&self) -> Option<&str> {
        self.server.as_ref().map(|s| s.protocol_version.as_str())
    }

    /// Tools from the last successful `tools/list`
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a listed tool by name
    pub fn find_tool(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// The request-id session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The underlying handler
    pub fn handler(&self) -> &H {
        &self.handler
    }
}
