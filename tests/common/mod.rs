//! Common test utilities and helpers

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use interactive_feedback_mcp::{FeedbackResult, ImageAttachment, ImageEntry, UiConfig};
use serde_json::Value;

/// 1x1 red pixel PNG
pub const RED_PIXEL_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+hHgAHggJ/PchI7wAAAABJRU5ErkJggg==";

/// Parses the protocol flags into `$project`, `$prompt` and `$output`
const ARG_PARSER: &str = r#"
while [ $# -gt 0 ]; do
  case "$1" in
    --project-directory) project="$2"; shift 2 ;;
    --prompt) prompt="$2"; shift 2 ;;
    --output-file) output="$2"; shift 2 ;;
    *) shift ;;
  esac
done
"#;

/// A fake UI: `sh -c <script>` where the script sees the parsed flags
pub fn fake_ui(body: &str) -> UiConfig {
    UiConfig {
        program: "sh".to_string(),
        args: vec![
            "-c".to_string(),
            format!("{}\n{}", ARG_PARSER, body),
            "fake-feedback-ui".to_string(),
        ],
        timeout_secs: None,
    }
}

/// A fake UI that writes `result` to the output file and exits 0
pub fn fake_ui_returning(result: &FeedbackResult) -> UiConfig {
    let json = serde_json::to_string(result).expect("serialize result");
    fake_ui(&format!("cat > \"$output\" <<'JSON'\n{}\nJSON\n", json))
}

/// A fake UI that echoes its arguments back: feedback is `project|prompt`,
/// command logs hold the output file path
pub fn fake_ui_echo() -> UiConfig {
    fake_ui(
        r#"printf '{"interactive_feedback":"%s|%s","command_logs":"%s"}' "$project" "$prompt" "$output" > "$output""#,
    )
}

pub fn attachment(filename: &str, data: &str) -> ImageEntry {
    ImageEntry::Attachment(ImageAttachment {
        filename: filename.to_string(),
        mime_type: "image/png".to_string(),
        data: data.to_string(),
    })
}

/// An `images` element exactly as the UI wrote it
pub fn raw_entry(value: Value) -> ImageEntry {
    ImageEntry::from_value(value)
}

pub fn encoded(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}
