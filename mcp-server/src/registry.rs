//! Registry of callable tools

use serde_json::{Map, Value};
use thiserror::Error;
use webmcp_protocol::{CallToolResult, Error as ProtocolError, Tool};

/// Function run for a `tools/call`
pub type ToolFn =
    Box<dyn Fn(&Map<String, Value>) -> Result<CallToolResult, ProtocolError> + Send + Sync>;

/// Error type for registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Tool '{0}' already registered")]
    Duplicate(String),
}

struct Entry {
    tool: Tool,
    run: ToolFn,
}

/// Tools in registration order
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<Entry>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.entries.iter().map(|e| &e.tool.name).collect::<Vec<_>>())
            .finish()
    }
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if a tool with the same name exists.
    pub fn add_tool<F>(&mut self, tool: Tool, run: F) -> Result<(), RegistryError>
    where
        F: Fn(&Map<String, Value>) -> Result<CallToolResult, ProtocolError> + Send + Sync + 'static,
    {
        if self.get_tool(&tool.name).is_some() {
            return Err(RegistryError::Duplicate(tool.name));
        }
        self.entries.push(Entry {
            tool,
            run: Box::new(run),
        });
        Ok(())
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&Tool> {
        self.entries.iter().find(|e| e.tool.name == name).map(|e| &e.tool)
    }

    /// List all tools
    pub fn list_tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    /// Run a tool, `None` if no such tool is registered
    pub fn call(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Option<Result<CallToolResult, ProtocolError>> {
        self.entries
            .iter()
            .find(|e| e.tool.name == name)
            .map(|e| (e.run)(arguments))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
