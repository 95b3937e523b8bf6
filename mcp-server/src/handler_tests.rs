//! Tests for the demo server request handling

use crate::handler::{DemoServer, SERVER_NAME};
use serde_json::{Value, json};
use webmcp_protocol::{CallToolResult, ErrorCode, Tool};

fn call(server: &DemoServer, request: Value) -> Value {
    serde_json::from_str(&server.handle(&request.to_string())).unwrap()
}

#[test]
fn test_initialize() {
    let server = DemoServer::new();
    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "clientInfo": {"name": "web-client", "version": "1.0.0"}
            }
        }),
    );

    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
    assert_eq!(response["result"]["capabilities"], json!({"tools": {}}));
    assert!(response.get("error").is_none());
}

#[test]
fn test_tools_list_in_registration_order() {
    let server = DemoServer::new();
    let response = call(&server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}));

    let names: Vec<_> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["getCurrentTime", "add", "formatJSON"]);
    assert_eq!(
        response["result"]["tools"][1]["inputSchema"]["properties"]["a"]["type"],
        "number"
    );
}

#[test]
fn test_get_current_time() {
    let server = DemoServer::new();
    let response = call(
        &server,
        json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {"name": "getCurrentTime"}}),
    );

    let result: CallToolResult = serde_json::from_value(response["result"].clone()).unwrap();
    assert_eq!(result.is_error, Some(false));
    let text = result.content[0].as_text().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(text).is_ok(), "not RFC 3339: {text}");
}

#[test]
fn test_add() {
    let server = DemoServer::new();
    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "add", "arguments": {"a": 5, "b": 3}}
        }),
    );
    assert_eq!(response["result"]["content"][0]["text"], "5.00 + 3.00 = 8.00");
}

#[test]
fn test_add_rejects_text_arguments() {
    let server = DemoServer::new();
    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "add", "arguments": {"a": "five", "b": 3}}
        }),
    );
    assert_eq!(response["error"]["code"], ErrorCode::InvalidParams.as_i32());
    assert!(response["error"]["message"].as_str().unwrap().contains("'a'"));
}

#[test]
fn test_format_json() {
    let server = DemoServer::new();
    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {"name": "formatJSON", "arguments": {"data": "{\"b\":1,\"a\":[1,2]}"}}
        }),
    );
    assert_eq!(
        response["result"]["content"][0]["text"],
        "{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}"
    );
}

#[test]
fn test_format_json_invalid_input() {
    let server = DemoServer::new();
    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "formatJSON", "arguments": {"data": "{not json"}}
        }),
    );
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Invalid JSON");
    assert!(response["error"]["data"].is_string());
}

#[test]
fn test_unknown_tool() {
    let server = DemoServer::new();
    let response = call(
        &server,
        json!({"jsonrpc": "2.0", "id": 8, "method": "tools/call", "params": {"name": "nope"}}),
    );
    assert_eq!(response["id"], 8);
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Unknown tool: nope");
}

#[test]
fn test_tools_call_without_params() {
    let server = DemoServer::new();
    let response = call(&server, json!({"jsonrpc": "2.0", "id": 9, "method": "tools/call"}));
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Invalid params");
}

#[test]
fn test_unknown_method() {
    let server = DemoServer::new();
    let response = call(&server, json!({"jsonrpc": "2.0", "id": "abc", "method": "prompts/list"}));
    assert_eq!(response["id"], "abc");
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Method not found");
}

#[test]
fn test_parse_error_has_null_id() {
    let server = DemoServer::new();
    let response: Value = serde_json::from_str(&server.handle("{not json")).unwrap();
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], -32700);
    assert_eq!(response["error"]["message"], "Parse error");
}

#[test]
fn test_custom_tool_registration() {
    let mut server = DemoServer::empty();
    assert!(server.registry().is_empty());

    server
        .register_tool(
            Tool {
                name: "echo".to_string(),
                description: "Echoes its input".to_string(),
                input_schema: json!({"type": "object", "properties": {"text": {"type": "string"}}}),
            },
            |args| {
                let text = args.get("text").and_then(Value::as_str).unwrap_or_default();
                Ok(CallToolResult::text(text))
            },
        )
        .unwrap();

    let response = call(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 10,
            "method": "tools/call",
            "params": {"name": "echo", "arguments": {"text": "hi"}}
        }),
    );
    assert_eq!(response["result"]["content"][0]["text"], "hi");
}
