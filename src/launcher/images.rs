//! Conversion of UI image attachments into binary images
//!
//! Conversion is best-effort: an entry that is malformed or fails to decode
//! is logged and dropped, the rest of the result still goes back to the agent.

use crate::types::{ImageAttachment, ImageEntry};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde_json::Value;
use tracing::{debug, warn};

/// Format used when an attachment's MIME type has no usable subtype
pub const FALLBACK_IMAGE_FORMAT: &str = "png";

/// Decoded image ready to be sent as MCP image content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Raw image bytes
    pub data: Vec<u8>,

    /// Format tag derived from the MIME subtype (e.g. "png", "jpeg")
    pub format: String,
}

impl DecodedImage {
    /// MIME type advertised on the wire
    pub fn mime_type(&self) -> String {
        format!("image/{}", self.format.to_lowercase())
    }
}

/// Derive the format tag from a MIME type such as `image/jpeg`
pub fn format_from_mime(mime_type: &str) -> &str {
    match mime_type.rsplit_once('/') {
        Some((_, subtype)) if !subtype.trim().is_empty() => subtype.trim(),
        _ => FALLBACK_IMAGE_FORMAT,
    }
}

/// Decode standard base64, ignoring embedded whitespace and line breaks
pub fn decode_base64(data: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    BASE64_STANDARD.decode(compact)
}

/// Decode a single attachment
pub fn decode_attachment(
    attachment: &ImageAttachment,
) -> std::result::Result<DecodedImage, base64::DecodeError> {
    let data = decode_base64(&attachment.data)?;
    Ok(DecodedImage {
        data,
        format: format_from_mime(&attachment.mime_type).to_string(),
    })
}

fn describe_malformed(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "fields have unexpected types",
        Value::Array(_) => "entry is an array",
        Value::String(_) => "entry is a string",
        Value::Number(_) => "entry is a number",
        Value::Bool(_) => "entry is a boolean",
        Value::Null => "entry is null",
    }
}

/// Decode all attachments, skipping empty, malformed and undecodable ones,
/// keeping order
pub fn convert_images(entries: &[ImageEntry]) -> Vec<DecodedImage> {
    let mut images = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let attachment = match entry {
            ImageEntry::Attachment(attachment) => attachment,
            ImageEntry::Malformed(value) => {
                warn!(
                    "Error converting image #{}: {}",
                    index + 1,
                    describe_malformed(value)
                );
                continue;
            }
        };

        if attachment.data.trim().is_empty() {
            debug!("Skipping image without data: {}", attachment.filename);
            continue;
        }

        match decode_attachment(attachment) {
            Ok(image) => images.push(image),
            Err(e) => {
                warn!("Error converting image '{}': {}", attachment.filename, e);
            }
        }
    }

    images
}
