//! MCP tool result content

use crate::launcher::DecodedImage;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::{Serialize, Serializer};
use serde_json::json;

/// One item in a `tools/call` result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Text { text: String },
    Image(DecodedImage),
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentItem::Image(_))
    }
}

impl From<DecodedImage> for ContentItem {
    fn from(image: DecodedImage) -> Self {
        ContentItem::Image(image)
    }
}

// Images travel as base64 again on the wire; they are binary everywhere else.
impl Serialize for ContentItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self {
            ContentItem::Text { text } => json!({
                "type": "text",
                "text": text,
            }),
            ContentItem::Image(image) => json!({
                "type": "image",
                "data": BASE64_STANDARD.encode(&image.data),
                "mimeType": image.mime_type(),
            }),
        };
        value.serialize(serializer)
    }
}

/// `tools/call` result body
#[derive(Debug, Clone, Serialize)]
pub struct CallToolResult {
    pub content: Vec<ContentItem>,

    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl CallToolResult {
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Tool-level failure, reported to the agent as text
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }
}
