//! MCP server startup command

use interactive_feedback_mcp::{error::Result, mcp, FeedbackConfig, McpServer, UiLauncher};
use std::sync::Arc;
use tracing::{debug, info};

/// Handle MCP server startup command
pub async fn handle(config: FeedbackConfig) -> Result<()> {
    debug!("Starting MCP server...");

    let launcher = Arc::new(UiLauncher::new(config.ui));
    let registry = mcp::default_registry(launcher);
    debug!("Tools: {:?}", registry);

    let server = McpServer::new(registry);

    // Run server with graceful shutdown on signals
    tokio::select! {
        result = server.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, stopping MCP server gracefully...");
        }
    }

    info!("MCP server shut down complete");
    Ok(())
}
