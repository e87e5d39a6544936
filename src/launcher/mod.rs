//! Feedback UI launcher
//!
//! Runs the feedback UI as an isolated child process and collects the JSON
//! document it leaves in a temporary output file.
//!
//! # Lifecycle
//! 1. Create a uniquely named temporary file (guarded, removed on drop)
//! 2. Spawn the UI with `--project-directory`, `--prompt`, `--output-file`
//! 3. Wait for it to exit
//! 4. On exit code 0, parse the output file as a [`FeedbackResult`]
//! 5. Remove the temporary file, whatever happened above
//!
//! # Usage
//! ```no_run
//! use interactive_feedback_mcp::config::UiConfig;
//! use interactive_feedback_mcp::launcher::{FeedbackLauncher, UiLauncher};
//! use interactive_feedback_mcp::types::FeedbackRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let launcher = UiLauncher::new(UiConfig::default());
//!     let request = FeedbackRequest::new("/path/to/project", "Refactored the parser");
//!     let result = launcher.launch(&request).await?;
//!     println!("{}", result.interactive_feedback);
//!     Ok(())
//! }
//! ```

pub mod images;

use crate::config::UiConfig;
use crate::error::{FeedbackError, Result};
use crate::types::{FeedbackRequest, FeedbackResult};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tempfile::TempPath;
use tokio::process::Command;
use tracing::{debug, info, warn};

pub use images::{convert_images, DecodedImage};

/// Something that can collect feedback from the user
#[async_trait]
pub trait FeedbackLauncher: Send + Sync {
    /// Ask the user and wait for their answer
    async fn launch(&self, request: &FeedbackRequest) -> Result<FeedbackResult>;
}

/// Launches the configured UI program as a child process
#[derive(Debug, Clone)]
pub struct UiLauncher {
    config: UiConfig,
}

impl UiLauncher {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }

    /// Build the child command: no shell, no inherited stdio
    fn build_command(&self, request: &FeedbackRequest, output_file: &Path) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .args(&self.config.args)
            .arg("--project-directory")
            .arg(&request.project_directory)
            .arg("--prompt")
            .arg(&request.summary)
            .arg("--output-file")
            .arg(output_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        command
    }

    async fn run_child(&self, request: &FeedbackRequest, output_file: &Path) -> Result<()> {
        debug!(
            "Spawning feedback UI: {} {:?} (output: {})",
            self.config.program,
            self.config.args,
            output_file.display()
        );

        let mut child = self
            .build_command(request, output_file)
            .spawn()
            .map_err(FeedbackError::Spawn)?;

        let status = match self.config.timeout() {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status?,
                Err(_) => {
                    warn!("Feedback UI did not exit within {:?}, killing it", limit);
                    if let Err(e) = child.kill().await {
                        warn!("Failed to kill feedback UI: {}", e);
                    }
                    return Err(FeedbackError::Timeout(limit));
                }
            },
            None => child.wait().await?,
        };

        if !status.success() {
            return Err(FeedbackError::Launch {
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl FeedbackLauncher for UiLauncher {
    async fn launch(&self, request: &FeedbackRequest) -> Result<FeedbackResult> {
        info!("Launching feedback UI for {}", request.project_directory);

        let output_file = create_output_file()?;
        self.run_child(request, &output_file).await?;
        let result = read_result(&output_file).await?;

        debug!(
            "Feedback received: {} chars, {} image(s)",
            result.interactive_feedback.len(),
            result.images.len()
        );

        if let Err(e) = output_file.close() {
            warn!("Failed to remove feedback output file: {}", e);
        }

        Ok(result)
    }
}

/// Launch the UI once with the given configuration
pub async fn launch_ui(config: &UiConfig, request: &FeedbackRequest) -> Result<FeedbackResult> {
    UiLauncher::new(config.clone()).launch(request).await
}

/// Temporary output path; the file is deleted when the guard drops
fn create_output_file() -> Result<TempPath> {
    let file = tempfile::Builder::new()
        .prefix("feedback-")
        .suffix(".json")
        .tempfile()?;
    // Release our handle so the child is free to replace the file
    Ok(file.into_temp_path())
}

async fn read_result(path: &Path) -> Result<FeedbackResult> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FeedbackError::ReadResult(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| FeedbackError::ReadResult(format!("invalid feedback JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_removed_on_drop() {
        let output_file = create_output_file().unwrap();
        let path = output_file.to_path_buf();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));

        drop(output_file);
        assert!(!path.exists());
    }

    #[test]
    fn test_output_files_are_unique() {
        let a = create_output_file().unwrap();
        let b = create_output_file().unwrap();
        assert_ne!(a.to_path_buf(), b.to_path_buf());
    }

    #[test]
    fn test_command_arguments() {
        let launcher = UiLauncher::new(UiConfig {
            program: "ui".to_string(),
            args: vec!["-u".to_string(), "feedback_ui.py".to_string()],
            timeout_secs: None,
        });
        let request = FeedbackRequest::new("/work/app", "Summary");
        let command = launcher.build_command(&request, Path::new("/tmp/out.json"));

        let std_command = command.as_std();
        assert_eq!(std_command.get_program(), "ui");
        let args: Vec<_> = std_command
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            args,
            vec![
                "-u",
                "feedback_ui.py",
                "--project-directory",
                "/work/app",
                "--prompt",
                "Summary",
                "--output-file",
                "/tmp/out.json",
            ]
        );
    }

    #[tokio::test]
    async fn test_read_result_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = read_result(&temp.path().join("gone.json")).await.unwrap_err();
        assert!(matches!(err, FeedbackError::ReadResult(_)));
    }

    #[tokio::test]
    async fn test_read_result_malformed_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{\"interactive_feedback\": ").unwrap();

        let err = read_result(&path).await.unwrap_err();
        assert!(err.to_string().contains("invalid feedback JSON"));
    }

    #[tokio::test]
    async fn test_spawn_failure_for_missing_program() {
        let launcher = UiLauncher::new(UiConfig {
            program: "/nonexistent/feedback-ui-binary".to_string(),
            args: Vec::new(),
            timeout_secs: None,
        });
        let request = FeedbackRequest::new("/tmp", "test");

        let err = launcher.launch(&request).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Spawn(_)));
    }
}
