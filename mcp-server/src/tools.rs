//! Built-in demo tools

use crate::registry::{RegistryError, ToolRegistry};
use chrono::{Local, SecondsFormat};
use serde_json::{Map, Value, json};
use webmcp_protocol::{CallToolResult, Error, Tool};

/// Register `getCurrentTime`, `add` and `formatJSON`
///
/// # Errors
///
/// Returns an error if any of the names is already taken.
pub fn register_builtin_tools(registry: &mut ToolRegistry) -> Result<(), RegistryError> {
    registry.add_tool(
        Tool {
            name: "getCurrentTime".to_string(),
            description: "Returns the current time in RFC3339 format".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        |_| Ok(get_current_time()),
    )?;

    registry.add_tool(
        Tool {
            name: "add".to_string(),
            description: "Adds two numbers together".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "a": {"type": "number", "description": "First number to add"},
                    "b": {"type": "number", "description": "Second number to add"}
                },
                "required": ["a", "b"]
            }),
        },
        add,
    )?;

    registry.add_tool(
        Tool {
            name: "formatJSON".to_string(),
            description: "Formats and validates JSON data".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "data": {"type": "string", "description": "JSON string to format"}
                },
                "required": ["data"]
            }),
        },
        format_json,
    )?;

    Ok(())
}

fn get_current_time() -> CallToolResult {
    CallToolResult::text(Local::now().to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// `a + b`, rendered to two decimals
pub fn add(arguments: &Map<String, Value>) -> Result<CallToolResult, Error> {
    let a = number_argument(arguments, "a")?;
    let b = number_argument(arguments, "b")?;
    let sum = a + b;
    Ok(CallToolResult::text(format!("{a:.2} + {b:.2} = {sum:.2}")))
}

/// Re-indent a JSON document
pub fn format_json(arguments: &Map<String, Value>) -> Result<CallToolResult, Error> {
    let data = arguments
        .get("data")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::invalid_params("Parameter 'data' must be a string"))?;

    let parsed: Value = serde_json::from_str(data).map_err(|e| {
        Error::with_data(
            webmcp_protocol::ErrorCode::InvalidParams,
            "Invalid JSON",
            Value::String(e.to_string()),
        )
    })?;

    let formatted = serde_json::to_string_pretty(&parsed)
        .map_err(|e| Error::internal_error(format!("Serialization error: {e}")))?;
    Ok(CallToolResult::text(formatted))
}

fn number_argument(arguments: &Map<String, Value>, name: &str) -> Result<f64, Error> {
    arguments
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::invalid_params(format!("Parameter '{name}' must be a number")))
}
