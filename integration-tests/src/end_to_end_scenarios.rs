//! End-to-end scenarios covering the full client workflow

use crate::test_utils::*;
use proptest::prelude::*;
use serde_json::{Value, json};
use webmcp_client::{CoercedValue, McpClient, Session};
use webmcp_protocol::{Response, Tool};
use webmcp_server::DemoServer;

#[test]
fn test_full_workflow() {
    let mut client = demo_client();

    let init = client.initialize().unwrap();
    assert_eq!(init.id, json!(1));

    let list = client.list_tools().unwrap();
    assert_eq!(list.id, json!(2));
    let names: Vec<&str> = client.tools().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["getCurrentTime", "add", "formatJSON"]);

    let call = client
        .call_tool_with_input("formatJSON", r#"{"z":1,"a":2}"#)
        .unwrap();
    assert_eq!(call.response.id, json!(3));
    assert_eq!(
        first_text(&call.response).unwrap(),
        "{\n  \"z\": 1,\n  \"a\": 2\n}"
    );
    assert_eq!(client.session().issued(), 3);
}

#[test]
fn test_custom_tool_with_integer_schema() {
    let mut server = DemoServer::empty();
    server
        .register_tool(
            Tool {
                name: "repeat".to_string(),
                description: "Repeat a word".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "times": {"type": "integer"},
                        "word": {"type": "string"}
                    }
                }),
            },
            |args| {
                let times = args.get("times").and_then(Value::as_u64).unwrap_or(0);
                let word = args.get("word").and_then(Value::as_str).unwrap_or("");
                Ok(webmcp_protocol::CallToolResult::text(
                    vec![word; times as usize].join(" "),
                ))
            },
        )
        .unwrap();

    let mut client = McpClient::new(|request: &str| server.handle(request));
    client.list_tools().unwrap();
    let call = client.call_tool_with_input("repeat", "3 hey").unwrap();

    assert_eq!(call.arguments.get("word"), Some(&CoercedValue::Text("hey".to_string())));
    assert_eq!(first_text(&call.response).unwrap(), "hey hey hey");
}

#[test]
fn test_server_error_leaves_client_state() {
    let mut client = ready_client();
    let tools_before = client.tools().to_vec();

    // a method-not-found answer carries no result to record
    let response = client.send_request("tools/list2", None).unwrap();
    assert!(response.result.is_none());
    assert_eq!(client.tools(), tools_before.as_slice());
}

#[test]
fn test_server_parse_error_has_null_id() {
    let server = DemoServer::new();
    let response: Response = Session::decode(&server.handle("{not json")).unwrap();

    assert_eq!(response.id, Value::Null);
    assert_eq!(response.error.unwrap().code.as_i32(), -32700);
}

#[cfg(unix)]
#[test]
fn test_echo_process_response_has_no_result() {
    use webmcp_client::ProcessHandler;

    // `cat` hands every request straight back: valid JSON, but no result
    let handler = ProcessHandler::spawn(&["cat"]).unwrap();
    let mut client = McpClient::new(handler);

    let response = client.initialize().unwrap();
    assert_eq!(response.id, json!(1));
    assert!(response.result.is_none());
    assert!(client.server().is_none());

    client.list_tools().unwrap();
    assert!(client.tools().is_empty());
}

proptest! {
    #[test]
    fn add_matches_server_arithmetic(a in -1000i64..1000, b in -1000i64..1000) {
        let mut client = ready_client();
        let call = client
            .call_tool_with_input("add", &format!("{a} {b}"))
            .unwrap();

        let expected = format!("{:.2} + {:.2} = {:.2}", a as f64, b as f64, (a + b) as f64);
        prop_assert_eq!(first_text(&call.response).unwrap(), expected);
    }
}
