//! Client against the in-process demo server

use crate::test_utils::*;
use assert_matches::assert_matches;
use serde_json::{Value, json};
use webmcp_client::{ClientError, CoercedValue, McpClient, TransportError};
use webmcp_protocol::ErrorCode;
use webmcp_server::DemoServer;

#[test]
fn test_ids_count_up_across_methods() {
    let mut client = ready_client();
    client.call_tool_with_input("add", "1 2").unwrap();
    client.call_tool_with_input("getCurrentTime", "").unwrap();

    let ids: Vec<u64> = client
        .handler()
        .sent()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let response_ids: Vec<Value> = client
        .handler()
        .responses
        .iter()
        .map(|r| serde_json::from_str::<Value>(r).unwrap()["id"].clone())
        .collect();
    assert_eq!(response_ids, vec![json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn test_tools_list_has_no_params_member() {
    let mut client = demo_client();
    client.list_tools().unwrap();

    let sent = client.handler().last_sent();
    assert_eq!(sent["method"], "tools/list");
    assert!(sent.get("params").is_none());
    assert_eq!(sent["jsonrpc"], "2.0");
}

#[test]
fn test_initialize_records_server() {
    let mut client = demo_client();
    let response = client.initialize().unwrap();

    assert!(response.error.is_none());
    assert_eq!(client.server_info().unwrap().name, webmcp_server::SERVER_NAME);
    assert_eq!(client.negotiated_protocol_version(), Some("2024-11-05"));

    let sent = client.handler().last_sent();
    assert_eq!(sent["params"]["protocolVersion"], "2024-11-05");
    assert_eq!(sent["params"]["capabilities"], json!({}));
}

#[test]
fn test_add_end_to_end() {
    let mut client = ready_client();
    let call = client.call_tool_with_input("add", "5 3").unwrap();

    assert_eq!(first_text(&call.response).unwrap(), "5.00 + 3.00 = 8.00");
    let sent = client.handler().last_sent();
    assert_eq!(sent["params"], json!({"name": "add", "arguments": {"a": 5, "b": 3}}));
}

#[test]
fn test_add_with_floats_and_negatives() {
    let mut client = ready_client();
    let call = client.call_tool_with_input("add", "-1.5 0.25").unwrap();

    assert_eq!(first_text(&call.response).unwrap(), "-1.50 + 0.25 = -1.25");
}

#[test]
fn test_fallback_reaches_server_as_text() {
    let mut client = ready_client();
    let call = client.call_tool_with_input("add", "5 three").unwrap();

    assert_matches!(call.arguments.get("b"), Some(CoercedValue::RawFallback(raw)) if raw == "three");
    assert_eq!(
        client.handler().last_sent()["params"]["arguments"],
        json!({"a": 5, "b": "three"})
    );
    let error = call.response.error.unwrap();
    assert_eq!(error.code, ErrorCode::InvalidParams);
}

#[test]
fn test_missing_and_extra_tokens() {
    let mut client = ready_client();

    client.call_tool_with_input("add", "7").unwrap();
    assert_eq!(
        client.handler().last_sent()["params"]["arguments"],
        json!({"a": 7})
    );

    let call = client.call_tool_with_input("add", "1 2 3 4").unwrap();
    assert_eq!(
        client.handler().last_sent()["params"]["arguments"],
        json!({"a": 1, "b": 2})
    );
    assert_eq!(call.arguments.dropped_tokens(), ["3", "4"]);
    assert_eq!(first_text(&call.response).unwrap(), "1.00 + 2.00 = 3.00");
}

#[test]
fn test_get_current_time_is_rfc3339() {
    let mut client = ready_client();
    let call = client.call_tool_with_input("getCurrentTime", "").unwrap();

    assert!(call.arguments.is_empty());
    assert_eq!(
        client.handler().last_sent()["params"]["arguments"],
        json!({})
    );
    let text = first_text(&call.response).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(&text).is_ok(), "{text}");
}

#[test]
fn test_format_json_invalid_input() {
    let mut client = ready_client();
    let call = client.call_tool_with_input("formatJSON", "{oops").unwrap();

    let error = call.response.error.unwrap();
    assert_eq!(error.code, ErrorCode::InvalidParams);
    assert_eq!(error.message, "Invalid JSON");
    assert!(error.data.is_some());
}

#[test]
fn test_call_before_list_sends_empty_arguments() {
    let mut client = demo_client();
    let call = client.call_tool_with_input("add", "5 3").unwrap();

    assert!(call.arguments.is_empty());
    assert_eq!(
        client.handler().last_sent()["params"]["arguments"],
        json!({})
    );
    assert!(call.response.error.is_some());
}

#[test]
fn test_unknown_method_is_a_response_not_an_error() {
    let mut client = demo_client();
    let response = client.send_request("resources/list", None).unwrap();

    assert_eq!(response.id, json!(1));
    assert_eq!(response.error.unwrap().code, ErrorCode::MethodNotFound);
}

#[test]
fn test_null_params_are_omitted() {
    let mut client = demo_client();
    client.send_request("tools/list", Some(Value::Null)).unwrap();

    assert!(client.handler().last_sent().get("params").is_none());
}

#[test]
fn test_closure_handler_over_shared_server() {
    let server = DemoServer::new();
    let mut first = McpClient::new(|request: &str| server.handle(request));
    let mut second = McpClient::new(|request: &str| server.handle(request));

    first.initialize().unwrap();
    let response = second.list_tools().unwrap();

    // sessions are independent
    assert_eq!(response.id, json!(1));
    assert_eq!(second.tools().len(), 3);
    assert!(first.tools().is_empty());
}

#[test]
fn test_failing_handler_surfaces_transport_error() {
    let mut client = McpClient::new(FailingHandler);
    let err = client.initialize().unwrap_err();

    assert_matches!(err, ClientError::Transport(TransportError::Closed));
    assert!(client.server().is_none());
}

struct FailingHandler;

impl webmcp_client::RequestHandler for FailingHandler {
    fn handle_request(&mut self, _request_json: &str) -> Result<String, TransportError> {
        Err(TransportError::Closed)
    }
}
