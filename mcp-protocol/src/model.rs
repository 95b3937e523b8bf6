//! MCP model types for protocol messages and data structures

use crate::{Error, JSONRPC_VERSION};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 Request
///
/// `params` is omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request ID
    pub id: u64,
    /// Request method name
    pub method: String,
    /// Request parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Request {
    /// Create a request envelope with the given id
    pub fn new(id: u64, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params: params.filter(|p| !p.is_null()),
        }
    }
}

/// JSON-RPC 2.0 Response
///
/// Any JSON value decodes: a response is taken as-is and callers look for
/// `result` rather than rejecting odd shapes. The decoded document is kept
/// next to the typed view so it can be shown exactly as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Response {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,
    /// Request ID (null when the server could not read one)
    pub id: Value,
    /// Response result (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Response error, when the `error` member is a JSON-RPC error object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
    #[serde(skip)]
    received: Option<Value>,
}

impl From<Value> for Response {
    fn from(value: Value) -> Self {
        let member = |name: &str| value.get(name).filter(|v| !v.is_null()).cloned();

        Self {
            jsonrpc: value
                .get("jsonrpc")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            id: value.get("id").cloned().unwrap_or(Value::Null),
            result: member("result"),
            error: member("error").and_then(|error| Error::deserialize(error).ok()),
            received: Some(value),
        }
    }
}

impl Response {
    /// Build a success response
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
            received: None,
        }
    }

    /// Build an error response
    pub fn failure(id: Value, error: Error) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
            received: None,
        }
    }

    /// Decode `result` into a typed value, `None` when missing or mis-shaped
    pub fn result_as<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.result
            .as_ref()
            .and_then(|value| T::deserialize(value).ok())
    }

    /// The document this response was decoded from, `None` if built locally
    pub fn received(&self) -> Option<&Value> {
        self.received.as_ref()
    }

    /// The response as a JSON document: verbatim when decoded, serialized
    /// from the typed members when built locally
    ///
    /// # Errors
    ///
    /// Returns an error if a locally built response cannot be serialized.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match &self.received {
            Some(received) => Ok(received.clone()),
            None => serde_json::to_value(self),
        }
    }
}

/// Client or server implementation information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    pub name: String,
    pub version: String,
}

/// Server capabilities advertised during initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServerCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

impl ServerCapabilities {
    pub fn builder() -> ServerCapabilitiesBuilder {
        ServerCapabilitiesBuilder::default()
    }
}

#[derive(Default)]
pub struct ServerCapabilitiesBuilder {
    capabilities: ServerCapabilities,
}

impl ServerCapabilitiesBuilder {
    pub fn enable_tools(mut self) -> Self {
        self.capabilities.tools = Some(ToolsCapability::default());
        self
    }

    pub fn build(self) -> ServerCapabilities {
        self.capabilities
    }
}

/// Initialize request parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequestParam {
    pub protocol_version: String,
    #[serde(default)]
    pub capabilities: Value,
    pub client_info: Implementation,
}

/// Initialize result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub server_info: Implementation,
    #[serde(default)]
    pub capabilities: ServerCapabilities,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub input_schema: Value,
}

/// One declared parameter of a tool's input schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolParameter<'a> {
    /// Property name
    pub name: &'a str,
    /// Declared JSON Schema `type`, if it is a plain string
    pub kind: Option<&'a str>,
}

impl ToolParameter<'_> {
    /// Whether the schema declares a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, Some("number" | "integer"))
    }
}

impl Tool {
    /// Declared parameters in the order the schema lists them
    ///
    /// Empty when the schema has no `properties` object.
    pub fn parameters(&self) -> Vec<ToolParameter<'_>> {
        self.input_schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| {
                properties
                    .iter()
                    .map(|(name, schema)| ToolParameter {
                        name: name.as_str(),
                        kind: schema.get("type").and_then(Value::as_str),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// List tools result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListToolsResult {
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Tool call parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToolRequestParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Map<String, Value>>,
}

/// Content types for tool responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Text payload of a text block
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
        }
    }
}

/// Tool call result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    pub fn success(content: Vec<Content>) -> Self {
        Self {
            content,
            is_error: Some(false),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::success(vec![Content::text(text)])
    }
}
