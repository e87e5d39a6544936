//! Tool registry
//!
//! Tools are registered once at startup into a [`ToolRegistry`], which is then
//! handed to the server. Nothing about the tool set is process-global.

use super::content::ContentItem;
use crate::error::{FeedbackError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Tool schema as advertised by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A callable MCP tool
#[async_trait]
pub trait McpTool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    async fn call(&self, arguments: Value) -> Result<Vec<ContentItem>>;
}

/// Ordered set of tools exposed by one server
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn McpTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool; a later registration under the same name replaces it
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        let name = tool.definition().name;
        if let Some(existing) = self.tools.iter_mut().find(|t| t.definition().name == name) {
            warn!("Replacing already registered tool: {}", name);
            *existing = tool;
        } else {
            debug!("Registered tool: {}", name);
            self.tools.push(tool);
        }
    }

    pub fn with_tool(mut self, tool: Arc<dyn McpTool>) -> Self {
        self.register(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.iter().find(|t| t.definition().name == name)
    }

    /// Definitions in registration order
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Execute a tool call
    pub async fn execute(&self, name: &str, arguments: Value) -> Result<Vec<ContentItem>> {
        debug!("Executing tool: {}", name);

        match self.get(name) {
            Some(tool) => tool.call(arguments).await,
            None => {
                warn!("Unknown tool: {}", name);
                Err(FeedbackError::InvalidParams(format!("Unknown tool: {}", name)))
            }
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field(
                "tools",
                &self.tools.iter().map(|t| t.definition().name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
