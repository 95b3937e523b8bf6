//! JSON-RPC 2.0 envelope and Model Context Protocol types
//!
//! This crate holds the wire types shared by the webmcp client and the
//! bundled demo server: the request/response envelope, the small slice of
//! the MCP model the client reads (`initialize`, `tools/list`,
//! `tools/call`), and the protocol error type.
//!
//! # Quick Start
//!
//! ```rust
//! use webmcp_protocol::{Request, Tool};
//! use serde_json::json;
//!
//! let request = Request::new(1, "tools/list", None);
//! assert_eq!(
//!     serde_json::to_string(&request).unwrap(),
//!     r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#
//! );
//!
//! let tool = Tool {
//!     name: "add".to_string(),
//!     description: "Adds two numbers together".to_string(),
//!     input_schema: json!({
//!         "type": "object",
//!         "properties": {
//!             "a": {"type": "number"},
//!             "b": {"type": "number"}
//!         }
//!     }),
//! };
//! let names: Vec<_> = tool.parameters().into_iter().map(|p| p.name).collect();
//! assert_eq!(names, ["a", "b"]);
//! ```

pub mod error;
pub mod model;

#[cfg(test)]
mod lib_tests;

pub use error::{Error, ErrorCode, McpResult};
pub use model::*;

/// JSON-RPC version carried by every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol version spoken by the client and the demo server
pub const MCP_VERSION: &str = "2024-11-05";

/// Protocol versions the client accepts from a server
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] =
    &["2025-11-25", "2025-06-18", "2025-03-26", "2024-11-05"];

/// Check if a protocol version is supported
pub fn is_protocol_version_supported(version: &str) -> bool {
    SUPPORTED_PROTOCOL_VERSIONS.contains(&version)
}
