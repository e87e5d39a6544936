//! Interactive Feedback MCP
//!
//! Entry point for the MCP server that collects human feedback through a
//! desktop UI, plus a manual harness for exercising the UI directly.

mod cli;

use clap::{Parser, Subcommand};
use interactive_feedback_mcp::FeedbackConfig;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "interactive-feedback-mcp")]
#[command(about = "Collect interactive human feedback for AI agents over MCP", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Set log level (logs go to stderr)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Config file (defaults to the user config directory)
    #[arg(long, env = "FEEDBACK_MCP_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server (stdio mode, the default)
    Serve,

    /// Launch the feedback UI once and print what it returned
    Launch {
        /// Project directory passed to the UI
        #[arg(long)]
        project_directory: Option<String>,

        /// Prompt shown to the user
        #[arg(
            long,
            default_value = "Testing image upload functionality. Please upload some test images and provide feedback."
        )]
        prompt: String,

        /// Write sample PNG files to the temp directory for attaching
        #[arg(long)]
        sample_images: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::new(format!(
        "interactive_feedback_mcp={}",
        level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries the protocol
        .init();

    debug!("Interactive Feedback MCP v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = FeedbackConfig::load(cli.config.as_deref())?;
    debug!("UI command: {} {:?}", config.ui.program, config.ui.args);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => cli::serve::handle(config).await?,
        Commands::Launch {
            project_directory,
            prompt,
            sample_images,
        } => cli::launch::handle(config, project_directory, prompt, sample_images).await?,
    }

    Ok(())
}
