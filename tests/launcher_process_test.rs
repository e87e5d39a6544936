//! Integration tests for the UI launcher against real child processes
//!
//! The "UI" is a small shell script that honours the same command-line
//! protocol as the desktop feedback window.

#![cfg(unix)]

mod common;

use common::{
    attachment, encoded, fake_ui, fake_ui_echo, fake_ui_returning, raw_entry, RED_PIXEL_PNG,
};
use interactive_feedback_mcp::mcp::InteractiveFeedbackTool;
use interactive_feedback_mcp::{
    ContentItem, FeedbackError, FeedbackLauncher, FeedbackRequest, FeedbackResult, UiLauncher,
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_successful_launch_reads_result_and_removes_file() {
    let launcher = UiLauncher::new(fake_ui_echo());

    let result = launcher
        .launch(&FeedbackRequest::new("/work/app", "All tests pass"))
        .await
        .unwrap();

    assert_eq!(result.interactive_feedback, "/work/app|All tests pass");
    let output_file = result.command_logs;
    assert!(output_file.ends_with(".json"));
    assert!(
        !Path::new(&output_file).exists(),
        "output file should be removed after a successful call"
    );
}

#[tokio::test]
async fn test_only_first_line_reaches_the_ui() {
    let tool = InteractiveFeedbackTool::new(Arc::new(UiLauncher::new(fake_ui_echo())));

    let items = tool
        .interactive_feedback("/work/app\n/ignored", "Finished refactor\nDetails:\n- a\n- b")
        .await
        .unwrap();

    assert_eq!(
        items,
        vec![ContentItem::text("feedback_text：/work/app|Finished refactor")]
    );
}

#[tokio::test]
async fn test_nonzero_exit_fails_and_removes_file() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("output-path");
    let launcher = UiLauncher::new(fake_ui(&format!(
        "printf '%s' \"$output\" > '{}'\necho '{{\"interactive_feedback\":\"partial\"}}' > \"$output\"\nexit 1",
        record.display()
    )));

    let err = launcher
        .launch(&FeedbackRequest::new("/work/app", "summary"))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedbackError::Launch { code: Some(1) }));
    assert_eq!(err.to_string(), "Failed to launch feedback UI: 1");

    let output_file = std::fs::read_to_string(&record).unwrap();
    assert!(!output_file.is_empty());
    assert!(!Path::new(&output_file).exists());
}

#[tokio::test]
async fn test_exit_zero_without_writing_is_read_failure() {
    let launcher = UiLauncher::new(fake_ui("exit 0"));

    let err = launcher
        .launch(&FeedbackRequest::new("/work/app", "summary"))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedbackError::ReadResult(_)));
}

#[tokio::test]
async fn test_missing_output_file_is_read_failure() {
    let launcher = UiLauncher::new(fake_ui("rm -f \"$output\""));

    let err = launcher
        .launch(&FeedbackRequest::new("/work/app", "summary"))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedbackError::ReadResult(_)));
}

#[tokio::test]
async fn test_malformed_json_fails_and_removes_file() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("output-path");
    let launcher = UiLauncher::new(fake_ui(&format!(
        "printf '%s' \"$output\" > '{}'\necho 'not json at all' > \"$output\"",
        record.display()
    )));

    let err = launcher
        .launch(&FeedbackRequest::new("/work/app", "summary"))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedbackError::ReadResult(_)));
    let output_file = std::fs::read_to_string(&record).unwrap();
    assert!(!Path::new(&output_file).exists());
}

#[tokio::test]
async fn test_timeout_kills_ui_and_removes_file() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("output-path");
    let mut config = fake_ui(&format!(
        "printf '%s' \"$output\" > '{}'\nsleep 30",
        record.display()
    ));
    config.timeout_secs = Some(1);

    let err = UiLauncher::new(config)
        .launch(&FeedbackRequest::new("/work/app", "summary"))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedbackError::Timeout(_)));
    let output_file = std::fs::read_to_string(&record).unwrap();
    assert!(!Path::new(&output_file).exists());
}

#[tokio::test]
async fn test_ui_stdio_is_detached() {
    // A UI reading stdin must see EOF immediately rather than block on ours
    let launcher = UiLauncher::new(fake_ui(
        r#"input=$(cat)
printf '{"interactive_feedback":"stdin=[%s]"}' "$input" > "$output""#,
    ));

    let result = launcher
        .launch(&FeedbackRequest::new("/work/app", "summary"))
        .await
        .unwrap();

    assert_eq!(result.interactive_feedback, "stdin=[]");
}

#[tokio::test]
async fn test_images_through_real_process() {
    let result = FeedbackResult {
        interactive_feedback: "See screenshots".to_string(),
        command_logs: "cargo test: ok".to_string(),
        images: vec![
            attachment("red.png", RED_PIXEL_PNG),
            attachment("broken.png", "@@@ definitely not base64 @@@"),
            attachment("bytes.png", &encoded(&[0, 1, 2, 254, 255])),
        ],
    };
    let tool = InteractiveFeedbackTool::new(Arc::new(UiLauncher::new(fake_ui_returning(&result))));

    let items = tool.interactive_feedback("/work/app", "summary").await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], ContentItem::text("feedback_text：See screenshots"));
    match (&items[1], &items[2]) {
        (ContentItem::Image(first), ContentItem::Image(second)) => {
            assert!(first.data.starts_with(&[0x89, b'P', b'N', b'G']));
            assert_eq!(second.data, vec![0, 1, 2, 254, 255]);
            assert_eq!(second.mime_type(), "image/png");
        }
        other => panic!("expected two images, got {:?}", other),
    }
}

#[tokio::test]
async fn test_badly_shaped_image_entries_are_skipped() {
    let bad_entries = vec![
        json!({"filename": "a.png", "mime_type": null, "data": RED_PIXEL_PNG}),
        json!({"filename": "b.png", "mime_type": 42, "data": RED_PIXEL_PNG}),
        json!({"filename": "c.png", "mime_type": "image/png", "data": null}),
        json!("not an object"),
    ];

    for bad in bad_entries {
        let result = FeedbackResult {
            interactive_feedback: "one good image".to_string(),
            command_logs: String::new(),
            images: vec![attachment("red.png", RED_PIXEL_PNG), raw_entry(bad.clone())],
        };
        let tool =
            InteractiveFeedbackTool::new(Arc::new(UiLauncher::new(fake_ui_returning(&result))));

        let items = tool
            .interactive_feedback("/work/app", "summary")
            .await
            .unwrap_or_else(|e| panic!("entry {} failed the call: {}", bad, e));

        assert_eq!(items.len(), 2, "entry {}", bad);
        assert_eq!(items[0], ContentItem::text("feedback_text：one good image"));
        assert!(items[1].is_image());
    }
}

#[tokio::test]
async fn test_line_wrapped_base64_through_real_process() {
    let (head, tail) = RED_PIXEL_PNG.split_at(40);
    let result = FeedbackResult {
        interactive_feedback: "wrapped".to_string(),
        command_logs: String::new(),
        images: vec![attachment("red.png", &format!("{}\n{}\n", head, tail))],
    };
    let tool = InteractiveFeedbackTool::new(Arc::new(UiLauncher::new(fake_ui_returning(&result))));

    let items = tool.interactive_feedback("/work/app", "summary").await.unwrap();

    assert_eq!(items.len(), 2);
    match &items[1] {
        ContentItem::Image(image) => assert!(image.data.starts_with(&[0x89, b'P', b'N', b'G'])),
        other => panic!("expected image, got {:?}", other),
    }
}
