//! Integration tests for webmcp
//!
//! These tests drive the client against the demo server and the console
//! against both, checking the wire traffic as well as the results.

#![allow(unused_imports)] // Allow unused imports in integration tests

pub mod cli_server_integration;
pub mod client_server_integration;
pub mod end_to_end_scenarios;

/// Common test utilities for integration tests
pub mod test_utils {
    use serde_json::Value;
    use webmcp_client::{McpClient, RequestHandler, TransportError};
    use webmcp_server::DemoServer;

    /// Demo server that keeps every request and response it saw
    #[derive(Debug, Default)]
    pub struct RecordingHandler {
        pub server: DemoServer,
        pub requests: Vec<String>,
        pub responses: Vec<String>,
    }

    impl RecordingHandler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Requests as parsed JSON
        pub fn sent(&self) -> Vec<Value> {
            self.requests
                .iter()
                .map(|r| serde_json::from_str(r).expect("request is JSON"))
                .collect()
        }

        /// Last request as parsed JSON
        pub fn last_sent(&self) -> Value {
            self.sent().pop().expect("at least one request")
        }
    }

    impl RequestHandler for RecordingHandler {
        fn handle_request(&mut self, request_json: &str) -> Result<String, TransportError> {
            self.requests.push(request_json.to_string());
            let response = self.server.handle(request_json);
            self.responses.push(response.clone());
            Ok(response)
        }
    }

    /// Client on a fresh recording demo server
    pub fn demo_client() -> McpClient<RecordingHandler> {
        McpClient::new(RecordingHandler::new())
    }

    /// Client that has already run `initialize` and `tools/list`
    pub fn ready_client() -> McpClient<RecordingHandler> {
        let mut client = demo_client();
        client.initialize().expect("initialize");
        client.list_tools().expect("tools/list");
        client
    }

    /// Text of the first content block of a `tools/call` result
    pub fn first_text(response: &webmcp_protocol::Response) -> Option<String> {
        response
            .result
            .as_ref()?
            .get("content")?
            .get(0)?
            .get("text")?
            .as_str()
            .map(str::to_string)
    }
}
