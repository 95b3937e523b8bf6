//! Thin MCP client over an opaque request handler
//!
//! The client owns two small pieces of logic and nothing else:
//!
//! - [`Session`] builds JSON-RPC 2.0 request envelopes with a strictly
//!   increasing id and does the text encode/decode around them.
//! - [`coerce_arguments`] maps a whitespace-delimited input line onto a
//!   tool's declared parameters, positionally.
//!
//! Everything that interprets the requests sits behind a
//! [`RequestHandler`]: serialized request in, serialized response out.
//!
//! # Example
//!
//! ```rust
//! use webmcp_client::McpClient;
//!
//! // Any `Fn(&str) -> String` is a handler
//! let handler = |request: &str| {
//!     let id = serde_json::from_str::<serde_json::Value>(request).unwrap()["id"].clone();
//!     serde_json::json!({"jsonrpc": "2.0", "id": id, "result": {"tools": []}}).to_string()
//! };
//!
//! let mut client = McpClient::new(handler);
//! let response = client.list_tools().unwrap();
//! assert!(response.result.is_some());
//! assert!(client.tools().is_empty());
//! ```

pub mod client;
pub mod coercion;
pub mod handler;
pub mod session;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod session_tests;

pub use client::{ClientError, McpClient, ToolCall};
pub use coercion::{CoercedValue, ToolArguments, coerce_arguments};
pub use handler::{ProcessHandler, RequestHandler, TransportError};
pub use session::Session;

pub use webmcp_protocol as protocol;
