//! Plain-text rendering of responses

use std::io::Write;
use webmcp_protocol::{Response, Tool};

/// Print a response as pretty JSON, as received
///
/// Members the typed view does not know about are printed too.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_response<W: Write>(out: &mut W, response: &Response) -> std::io::Result<()> {
    let document = response.to_value().map_err(std::io::Error::other)?;
    let text = serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;
    writeln!(out, "{text}")
}

/// One-line signature of a tool, e.g. `add(a: number, b: number)`
pub fn tool_signature(tool: &Tool) -> String {
    let params = tool
        .parameters()
        .iter()
        .map(|p| match p.kind {
            Some(kind) => format!("{}: {kind}", p.name),
            None => p.name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({params})", tool.name)
}

/// Print the listed tools with their descriptions
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_tool_summary<W: Write>(out: &mut W, tools: &[Tool]) -> std::io::Result<()> {
    if tools.is_empty() {
        return writeln!(out, "No tools listed. Run `list` after `init`.");
    }
    for tool in tools {
        writeln!(out, "  {}  {}", tool_signature(tool), tool.description)?;
    }
    Ok(())
}
