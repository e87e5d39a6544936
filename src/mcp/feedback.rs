//! The `interactive_feedback` tool
//!
//! Asks the user for feedback through the launcher and turns the answer into
//! one text item followed by the attached images.

use super::content::ContentItem;
use super::tools::{McpTool, ToolDefinition};
use crate::error::{FeedbackError, Result};
use crate::launcher::{convert_images, FeedbackLauncher};
use crate::types::FeedbackRequest;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub const TOOL_NAME: &str = "interactive_feedback";

pub const TOOL_DESCRIPTION: &str = "Interactive tool for collecting user feedback. AI can report completed work, and users can provide text and image feedback.";

/// Label placed in front of the user's text (full-width colon)
pub const FEEDBACK_TEXT_PREFIX: &str = "feedback_text\u{FF1A}";

#[derive(Debug, Deserialize)]
struct FeedbackParams {
    project_directory: String,
    summary: String,
}

pub struct InteractiveFeedbackTool {
    launcher: Arc<dyn FeedbackLauncher>,
}

impl InteractiveFeedbackTool {
    pub fn new(launcher: Arc<dyn FeedbackLauncher>) -> Self {
        Self { launcher }
    }

    /// Collect feedback for a project; launcher errors pass through untouched
    pub async fn interactive_feedback(
        &self,
        project_directory: &str,
        summary: &str,
    ) -> Result<Vec<ContentItem>> {
        let request = FeedbackRequest::new(project_directory, summary);
        let result = self.launcher.launch(&request).await?;

        let images = convert_images(&result.images);
        debug!(
            "Converted {} of {} image(s)",
            images.len(),
            result.images.len()
        );

        let mut items = Vec::with_capacity(images.len() + 1);
        items.push(ContentItem::text(format!(
            "{}{}",
            FEEDBACK_TEXT_PREFIX, result.interactive_feedback
        )));
        items.extend(images.into_iter().map(ContentItem::from));
        Ok(items)
    }
}

#[async_trait]
impl McpTool for InteractiveFeedbackTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_directory": {
                        "type": "string",
                        "description": "Full path to the project directory"
                    },
                    "summary": {
                        "type": "string",
                        "description": "Short, one-line summary of the changes"
                    }
                },
                "required": ["project_directory", "summary"]
            }),
        }
    }

    async fn call(&self, arguments: Value) -> Result<Vec<ContentItem>> {
        let params: FeedbackParams = serde_json::from_value(arguments)
            .map_err(|e| FeedbackError::InvalidParams(e.to_string()))?;

        self.interactive_feedback(&params.project_directory, &params.summary)
            .await
    }
}
