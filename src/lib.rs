//! Interactive Feedback MCP
//!
//! Lets an AI agent pause mid-task and ask a human for feedback. The agent
//! calls the `interactive_feedback` MCP tool; the server launches a desktop UI
//! as a child process, waits for the user to submit text and images, and
//! returns them as MCP content.
//!
//! # Architecture
//!
//! - **Types**: request/result documents exchanged with the UI
//! - **Launcher**: child-process lifecycle and temporary result file
//! - **MCP**: JSON-RPC 2.0 stdio server, tool registry, the feedback tool
//! - **Config**: which UI program to run and for how long
//!
//! # Example
//!
//! ```no_run
//! use interactive_feedback_mcp::{mcp, FeedbackConfig, McpServer, UiLauncher};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FeedbackConfig::load(None)?;
//!     let launcher = Arc::new(UiLauncher::new(config.ui));
//!     let server = McpServer::new(mcp::default_registry(launcher));
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod mcp;
pub mod types;

// Re-export commonly used types
pub use config::{FeedbackConfig, UiConfig};
pub use error::{FeedbackError, Result};
pub use launcher::{launch_ui, DecodedImage, FeedbackLauncher, UiLauncher};
pub use mcp::{ContentItem, McpServer, ToolRegistry};
pub use types::{first_line, FeedbackRequest, FeedbackResult, ImageAttachment, ImageEntry};
