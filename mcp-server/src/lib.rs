//! In-process demo MCP server
//!
//! A small server that answers `initialize`, `tools/list` and `tools/call`
//! with a handful of built-in tools. It stands in for the real server behind
//! the client's handler boundary, both in the `webmcp` CLI and in tests.
//!
//! # Example
//!
//! ```rust
//! use webmcp_server::DemoServer;
//!
//! let server = DemoServer::new();
//! let response = server.handle(
//!     r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"add","arguments":{"a":5,"b":3}}}"#,
//! );
//! assert!(response.contains("5.00 + 3.00 = 8.00"));
//! ```

pub mod handler;
pub mod registry;
pub mod tools;

#[cfg(test)]
mod handler_tests;

pub use handler::{DemoServer, SERVER_NAME};
pub use registry::{RegistryError, ToolFn, ToolRegistry};
