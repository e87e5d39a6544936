//! Model Context Protocol (MCP) server implementation
//!
//! Provides a JSON-RPC 2.0 server over stdio exposing the
//! `interactive_feedback` tool.

pub mod content;
pub mod feedback;
pub mod protocol;
pub mod server;
pub mod tools;

pub use content::{CallToolResult, ContentItem};
pub use feedback::InteractiveFeedbackTool;
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use server::McpServer;
pub use tools::{McpTool, ToolDefinition, ToolRegistry};

use crate::launcher::FeedbackLauncher;
use std::sync::Arc;

/// Registry with the feedback tool wired to the given launcher
pub fn default_registry(launcher: Arc<dyn FeedbackLauncher>) -> ToolRegistry {
    ToolRegistry::new().with_tool(Arc::new(InteractiveFeedbackTool::new(launcher)))
}
