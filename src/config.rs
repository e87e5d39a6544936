//! Configuration for the feedback UI command
//!
//! Resolution order: TOML file (explicit path, else the user config dir if the
//! file exists, else built-in defaults), then `FEEDBACK_UI_*` environment
//! overrides, then validation.

use crate::error::{FeedbackError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Name of the UI script looked up next to the executable
pub const DEFAULT_UI_SCRIPT: &str = "feedback_ui.py";

const ENV_UI_PROGRAM: &str = "FEEDBACK_UI_PROGRAM";
const ENV_UI_ARGS: &str = "FEEDBACK_UI_ARGS";
const ENV_UI_TIMEOUT: &str = "FEEDBACK_UI_TIMEOUT_SECS";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

/// How to start the feedback UI process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Program to execute (no shell involved)
    pub program: String,

    /// Leading arguments, placed before the protocol flags
    #[serde(default)]
    pub args: Vec<String>,

    /// Give up on the UI after this many seconds; unset waits forever
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec![
                "-u".to_string(),
                default_ui_script().to_string_lossy().to_string(),
            ],
            timeout_secs: None,
        }
    }
}

impl UiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// `feedback_ui.py` in the directory holding the running executable
fn default_ui_script() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_UI_SCRIPT)
}

/// Default config file location (`~/.config/interactive-feedback-mcp/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("interactive-feedback-mcp").join("config.toml"))
}

impl FeedbackConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FeedbackError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: FeedbackConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration for this process
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!("Using config file: {}", path.display());
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `FEEDBACK_UI_*` environment variables on top of file values
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(program) = env::var(ENV_UI_PROGRAM) {
            if !program.is_empty() {
                debug!("UI program overridden by {}", ENV_UI_PROGRAM);
                self.ui.program = program;
            }
        }

        if let Ok(args) = env::var(ENV_UI_ARGS) {
            self.ui.args = args.split_whitespace().map(str::to_string).collect();
        }

        if let Ok(secs) = env::var(ENV_UI_TIMEOUT) {
            let secs = secs.trim();
            self.ui.timeout_secs = if secs.is_empty() {
                None
            } else {
                Some(secs.parse().map_err(|_| {
                    FeedbackError::Config(format!(
                        "{} must be a whole number of seconds, got '{}'",
                        ENV_UI_TIMEOUT, secs
                    ))
                })?)
            };
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.program.trim().is_empty() {
            return Err(FeedbackError::Config(
                "ui.program must not be empty".to_string(),
            ));
        }

        if self.ui.timeout_secs == Some(0) {
            return Err(FeedbackError::Config(
                "ui.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
