//! Manual UI test command
//!
//! Runs the configured feedback UI once, outside of MCP, and prints a report
//! of the document it produced. Optionally drops a few sample PNGs into the
//! temp directory to attach from the UI.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use interactive_feedback_mcp::launcher::images::decode_base64;
use interactive_feedback_mcp::{
    error::Result, FeedbackConfig, FeedbackError, FeedbackLauncher, FeedbackRequest,
    FeedbackResult, ImageEntry, UiLauncher,
};
use std::path::PathBuf;
use tracing::warn;

/// 1x1 red pixel PNG
const SAMPLE_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+hHgAHggJ/PchI7wAAAABJRU5ErkJggg==";

const SAMPLE_IMAGE_NAMES: [&str; 3] = ["test_red.png", "test_blue.png", "test_green.png"];

/// Handle the launch command
pub async fn handle(
    config: FeedbackConfig,
    project_directory: Option<String>,
    prompt: String,
    sample_images: bool,
) -> Result<()> {
    let project_directory = match project_directory {
        Some(dir) => dir,
        None => std::env::current_dir()?.to_string_lossy().to_string(),
    };

    let samples = if sample_images {
        let paths = write_sample_images()?;
        println!("Created test images:");
        for path in &paths {
            println!("  - {}", path.display());
        }
        println!();
        println!("Attach them from the UI, submit, and check the report below.");
        paths
    } else {
        Vec::new()
    };

    println!("Launching feedback UI (close the window to continue)...");

    let launcher = UiLauncher::new(config.ui);
    let outcome = launcher
        .launch(&FeedbackRequest::new(&project_directory, &prompt))
        .await;

    match &outcome {
        Ok(result) => print_report(result),
        Err(e) => println!("Error testing feedback UI: {}", e),
    }

    if !samples.is_empty() {
        println!();
        println!("Cleaning up test images...");
        for path in &samples {
            match std::fs::remove_file(path) {
                Ok(()) => println!("  Removed: {}", path.display()),
                Err(e) => println!("  Failed to remove {}: {}", path.display(), e),
            }
        }
    }

    outcome.map(|_| ())
}

fn write_sample_images() -> Result<Vec<PathBuf>> {
    let png = BASE64_STANDARD
        .decode(SAMPLE_PNG_BASE64)
        .map_err(|e| FeedbackError::Other(format!("Invalid sample image: {}", e)))?;

    let temp_dir = std::env::temp_dir();
    let mut paths = Vec::with_capacity(SAMPLE_IMAGE_NAMES.len());
    for name in SAMPLE_IMAGE_NAMES {
        let path = temp_dir.join(name);
        std::fs::write(&path, &png)?;
        paths.push(path);
    }
    Ok(paths)
}

fn print_report(result: &FeedbackResult) {
    println!();
    println!("{}", "=".repeat(50));
    println!("FEEDBACK RESULT:");
    println!("{}", "=".repeat(50));
    println!("Command logs: {}", result.command_logs);
    println!("Interactive feedback: {}", result.interactive_feedback);
    println!("Number of images: {}", result.images.len());

    for (i, entry) in result.images.iter().enumerate() {
        println!();
        println!("Image {}:", i + 1);

        let image = match entry {
            ImageEntry::Attachment(image) => image,
            ImageEntry::Malformed(value) => {
                warn!("Image entry {} is malformed", i + 1);
                println!("  ✗ Malformed image entry: {}", value);
                continue;
            }
        };

        println!("  Filename: {}", image.filename);
        println!("  MIME type: {}", image.mime_type);
        println!("  Data size: {} characters (base64)", image.data.len());

        match decode_base64(&image.data) {
            Ok(decoded) => {
                println!("  Decoded size: {} bytes", decoded.len());
                println!("  ✓ Valid base64 data");
            }
            Err(e) => {
                warn!("Image {} has invalid base64 data", image.filename);
                println!("  ✗ Invalid base64 data: {}", e);
            }
        }
    }
}
