//! Unit tests for the MCP client call paths

#[cfg(test)]
mod tests {
    use crate::client::*;
    use crate::coercion::CoercedValue;
    use crate::handler::{RequestHandler, TransportError};
    use assert_matches::assert_matches;
    use serde_json::{Value, json};

    /// Answers from a fixed script and records every request it sees
    struct ScriptedHandler {
        requests: Vec<Value>,
    }

    impl ScriptedHandler {
        fn new() -> Self {
            Self {
                requests: Vec::new(),
            }
        }
    }

    impl RequestHandler for ScriptedHandler {
        fn handle_request(&mut self, request_json: &str) -> Result<String, TransportError> {
            let request: Value = serde_json::from_str(request_json).unwrap();
            let id = request["id"].clone();
            let response = match request["method"].as_str().unwrap() {
                "initialize" => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": {
                        "protocolVersion": "2024-11-05",
                        "serverInfo": {"name": "scripted", "version": "1.0.0"},
                        "capabilities": {"tools": {}}
                    }
                }),
                "tools/list" => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": {
                        "tools": [
                            {
                                "name": "add",
                                "description": "Adds two numbers together",
                                "inputSchema": {
                                    "type": "object",
                                    "properties": {
                                        "a": {"type": "number"},
                                        "b": {"type": "number"}
                                    }
                                }
                            },
                            {
                                "name": "getCurrentTime",
                                "description": "Returns the current time in RFC3339 format",
                                "inputSchema": {"type": "object", "properties": {}}
                            }
                        ]
                    }
                }),
                "tools/call" => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": {
                        "content": [{"type": "text", "text": "ok"}],
                        "isError": false
                    }
                }),
                _ => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": {"code": -32601, "message": "Method not found"}
                }),
            };
            self.requests.push(request);
            Ok(response.to_string())
        }
    }

    #[test]
    fn test_initialize_records_server_info() {
        let mut client =
            McpClient::new(ScriptedHandler::new()).with_client_info("web-client", "1.0.0");

        let response = client.initialize().unwrap();
        assert!(response.result.is_some());

        let info = client.server_info().unwrap();
        assert_eq!(info.name, "scripted");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(client.negotiated_protocol_version(), Some("2024-11-05"));

        let sent = &client.handler().requests[0];
        assert_eq!(sent["id"], 1);
        assert_eq!(sent["method"], "initialize");
        assert_eq!(sent["params"]["protocolVersion"], "2024-11-05");
        assert_eq!(sent["params"]["clientInfo"]["name"], "web-client");
        assert_eq!(sent["params"]["clientInfo"]["version"], "1.0.0");
    }

    #[test]
    fn test_list_tools_caches_tools() {
        let mut client = McpClient::new(ScriptedHandler::new());
        client.list_tools().unwrap();

        assert_eq!(client.tools().len(), 2);
        assert!(client.find_tool("add").is_some());
        assert!(client.find_tool("missing").is_none());

        let sent = &client.handler().requests[0];
        assert!(sent.get("params").is_none());
    }

    #[test]
    fn test_ids_increase_across_call_paths() {
        let mut client = McpClient::new(ScriptedHandler::new());
        client.initialize().unwrap();
        client.list_tools().unwrap();
        client.call_tool_with_input("add", "1 2").unwrap();
        client.send_request("ping", None).unwrap();

        let ids: Vec<_> = client
            .handler()
            .requests
            .iter()
            .map(|r| r["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert_eq!(client.session().peek_next_id(), 5);
    }

    #[test]
    fn test_call_tool_with_input_coerces_against_listed_schema() {
        let mut client = McpClient::new(ScriptedHandler::new());
        client.list_tools().unwrap();

        let call = client.call_tool_with_input("add", "  5 three  ").unwrap();
        assert_eq!(call.arguments.get("a"), Some(&CoercedValue::Number(5.into())));
        assert!(call.arguments.get("b").unwrap().is_fallback());
        assert!(call.response.result.is_some());

        let sent = client.handler().requests.last().unwrap();
        assert_eq!(
            sent["params"],
            json!({"name": "add", "arguments": {"a": 5, "b": "three"}})
        );
    }

    #[test]
    fn test_unknown_tool_is_called_with_empty_arguments() {
        let mut client = McpClient::new(ScriptedHandler::new());

        let call = client.call_tool_with_input("add", "5 3").unwrap();
        assert!(call.arguments.is_empty());

        let sent = client.handler().requests.last().unwrap();
        assert_eq!(sent["params"], json!({"name": "add", "arguments": {}}));
    }

    #[test]
    fn test_error_response_is_returned_not_raised() {
        let mut client = McpClient::new(ScriptedHandler::new());
        let response = client.send_request("resources/list", None).unwrap();
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().message, "Method not found");
    }

    #[test]
    fn test_error_responses_leave_state_untouched() {
        let handler = |request: &str| {
            let id = serde_json::from_str::<Value>(request).unwrap()["id"].clone();
            json!({"jsonrpc": "2.0", "id": id, "error": {"code": -32603, "message": "boom"}})
                .to_string()
        };
        let mut client = McpClient::new(handler);

        let response = client.initialize().unwrap();
        assert!(response.error.is_some());
        assert!(client.server_info().is_none());

        client.list_tools().unwrap();
        assert!(client.tools().is_empty());
    }

    #[test]
    fn test_mis_shaped_result_is_skipped() {
        let handler = |_: &str| r#"{"jsonrpc":"2.0","id":1,"result":{"tools":"nope"}}"#.to_string();
        let mut client = McpClient::new(handler);

        let response = client.list_tools().unwrap();
        assert!(response.result.is_some());
        assert!(client.tools().is_empty());
    }

    #[test]
    fn test_non_json_response_is_a_decode_error() {
        let handler = |_: &str| "Error: expected 1 argument (request JSON string)".to_string();
        let mut client = McpClient::new(handler);

        let error = client.initialize().unwrap_err();
        assert_matches!(
            &error,
            ClientError::Decode { response, .. } if response.starts_with("Error: expected")
        );
        assert!(error.to_string().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_transport_error_is_propagated() {
        struct Closed;
        impl RequestHandler for Closed {
            fn handle_request(&mut self, _: &str) -> Result<String, TransportError> {
                Err(TransportError::Closed)
            }
        }

        let mut client = McpClient::new(Closed);
        assert_matches!(
            client.list_tools(),
            Err(ClientError::Transport(TransportError::Closed))
        );
        // The id was still consumed
        assert_eq!(client.session().peek_next_id(), 2);
    }

    #[test]
    fn test_custom_protocol_version() {
        let mut client =
            McpClient::new(ScriptedHandler::new()).with_protocol_version("2025-06-18");
        client.initialize().unwrap();
        assert_eq!(
            client.handler().requests[0]["params"]["protocolVersion"],
            "2025-06-18"
        );
    }
}
