//! JSON-RPC request handling for the demo server

use crate::registry::{RegistryError, ToolRegistry};
use crate::tools::register_builtin_tools;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, error, instrument, warn};
use webmcp_protocol::{
    CallToolRequestParam, Error, Implementation, InitializeResult, ListToolsResult, MCP_VERSION,
    Response, ServerCapabilities, Tool,
};

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "webmcp-demo-server";

/// Incoming request as the server reads it
///
/// Looser than the client's envelope: any id shape is echoed back.
#[derive(Debug, Deserialize)]
struct IncomingRequest {
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

/// In-process MCP server
///
/// Answers `initialize`, `tools/list` and `tools/call` from a
/// [`ToolRegistry`]. [`DemoServer::handle`] has the exported-function shape:
/// request text in, response text out, never failing.
#[derive(Debug)]
pub struct DemoServer {
    info: Implementation,
    registry: ToolRegistry,
}

impl Default for DemoServer {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoServer {
    /// Server with the built-in tools registered
    pub fn new() -> Self {
        let mut server = Self::empty();
        if let Err(e) = register_builtin_tools(&mut server.registry) {
            error!("Failed to register built-in tools: {}", e);
        }
        server
    }

    /// Server with no tools
    pub fn empty() -> Self {
        Self {
            info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            registry: ToolRegistry::new(),
        }
    }

    /// Register an extra tool
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    pub fn register_tool<F>(&mut self, tool: Tool, run: F) -> Result<(), RegistryError>
    where
        F: Fn(&Map<String, Value>) -> Result<webmcp_protocol::CallToolResult, Error>
            + Send
            + Sync
            + 'static,
    {
        self.registry.add_tool(tool, run)
    }

    /// The tool registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one serialized request and return the serialized response
    pub fn handle(&self, request_json: &str) -> String {
        let response = self.handle_value(request_json);
        serde_json::to_string(&response).unwrap_or_else(|e| {
            error!("Failed to serialize response: {}", e);
            json!({
                "jsonrpc": "2.0",
                "id": response.id,
                "error": {"code": -32603, "message": "Internal error"}
            })
            .to_string()
        })
    }

    /// Handle one serialized request
    #[instrument(skip_all)]
    pub fn handle_value(&self, request_json: &str) -> Response {
        let request: IncomingRequest = match serde_json::from_str(request_json) {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                return Response::failure(Value::Null, Error::parse_error("Parse error"));
            }
        };

        debug!("Handling request: {}", request.method);

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(request.params),
            _ => Err(Error::method_not_found()),
        };

        match result {
            Ok(result) => Response::success(request.id, result),
            Err(error) => {
                debug!("Request failed: {}", error);
                Response::failure(request.id, error)
            }
        }
    }

    fn handle_initialize(&self) -> Result<Value, Error> {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: self.info.clone(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: None,
        };
        to_result(result)
    }

    fn handle_tools_list(&self) -> Result<Value, Error> {
        to_result(ListToolsResult {
            tools: self.registry.list_tools(),
            next_cursor: None,
        })
    }

    fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, Error> {
        let params: CallToolRequestParam = params
            .and_then(|p| serde_json::from_value(p).ok())
            .ok_or_else(|| Error::invalid_params("Invalid params"))?;

        let arguments = params.arguments.unwrap_or_default();
        match self.registry.call(&params.name, &arguments) {
            Some(outcome) => to_result(outcome?),
            None => Err(Error::invalid_params(format!("Unknown tool: {}", params.name))),
        }
    }
}

fn to_result<T: serde::Serialize>(value: T) -> Result<Value, Error> {
    serde_json::to_value(value).map_err(|e| Error::internal_error(format!("Serialization error: {e}")))
}
