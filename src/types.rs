//! Core data types for a single feedback round trip
//!
//! None of these outlive one `interactive_feedback` call: a request goes to
//! the UI process, a result comes back through the temporary output file.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// MIME type assumed for attachments that don't declare one
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/png";

/// Reduce free text to its first line, trimmed.
///
/// Agents occasionally pass multi-paragraph summaries or paths with trailing
/// newlines; only the first line is ever handed to the UI process.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default().trim()
}

/// What the agent asks the user about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Project the agent is working in
    pub project_directory: String,

    /// One-line summary shown to the user as the prompt
    pub summary: String,
}

impl FeedbackRequest {
    /// Build a request, keeping only the first line of each field
    pub fn new(project_directory: &str, summary: &str) -> Self {
        Self {
            project_directory: first_line(project_directory).to_string(),
            summary: first_line(summary).to_string(),
        }
    }
}

/// Document written by the UI process to the output file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    /// Free-text feedback typed by the user
    #[serde(default)]
    pub interactive_feedback: String,

    /// Output of commands run from the UI (not forwarded to the agent)
    #[serde(default)]
    pub command_logs: String,

    /// Attached images, in the order the user added them
    #[serde(default, deserialize_with = "lenient_images")]
    pub images: Vec<ImageEntry>,
}

/// Base64-encoded image attached in the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub filename: String,

    #[serde(default = "default_mime_type")]
    pub mime_type: String,

    /// Standard base64 of the raw file bytes
    #[serde(default, deserialize_with = "string_or_empty")]
    pub data: String,
}

/// One element of the `images` array.
///
/// Entries that don't have the attachment shape are kept as raw JSON so a
/// single bad image never invalidates the rest of the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImageEntry {
    Attachment(ImageAttachment),
    Malformed(Value),
}

impl ImageEntry {
    pub fn from_value(value: Value) -> Self {
        match ImageAttachment::deserialize(&value) {
            Ok(attachment) => ImageEntry::Attachment(attachment),
            Err(_) => ImageEntry::Malformed(value),
        }
    }
}

impl From<ImageAttachment> for ImageEntry {
    fn from(attachment: ImageAttachment) -> Self {
        ImageEntry::Attachment(attachment)
    }
}

fn default_mime_type() -> String {
    DEFAULT_IMAGE_MIME_TYPE.to_string()
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_images<'de, D>(deserializer: D) -> Result<Vec<ImageEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(ImageEntry::from_value).collect()),
        Value::Null => Ok(Vec::new()),
        other => {
            warn!("Ignoring 'images' that is not an array: {}", other);
            Ok(Vec::new())
        }
    }
}
