//! Command-line interface for git-chat
//!
//! Loads configuration, opens the repository and the completion client, then
//! hands stdin/stdout to the interactive chat loop.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_api_key, load_config, resolve_repo_root, CliOverrides};
use crate::git::GitIntrospector;
use crate::llm::OpenAiClient;
use crate::router::{Assistant, Router};

pub mod chat;

/// Ask natural-language questions about a Git repository and its source code
#[derive(Parser)]
#[command(name = "git-chat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository root to introspect [default: current directory]
    #[arg(short, long, value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Dotenv file holding OPENAI_API_KEY
    #[arg(long, value_name = "FILE")]
    env_file: Option<PathBuf>,

    /// Config file (TOML) [default: ./git-chat.toml if present]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Completion model name
    #[arg(short, long, value_name = "NAME")]
    model: Option<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let overrides = CliOverrides { repo_path: cli.repo, env_file: cli.env_file, model: cli.model };
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&cwd, cli.config.as_deref(), &overrides)?;

    let api_key = load_api_key(config.env_file.as_deref())?;
    let repo_root = resolve_repo_root(&config.repo_path)?;
    let git = GitIntrospector::open(&repo_root)
        .with_context(|| format!("Not a git repository: {}", repo_root.display()))?;

    let timeout = config.request_timeout_secs.map(Duration::from_secs);
    let llm = OpenAiClient::with_timeout(api_key, timeout)
        .context("Failed to build completion client")?
        .with_api_base(config.api_base.as_str())
        .with_model(config.model.as_str());

    let assistant = Assistant::new(Router::new(config.current_branch_first), git, repo_root, llm);

    let stdin = io::stdin();
    let stdout = io::stdout();
    chat::run_loop(&assistant, stdin.lock(), stdout.lock())?;
    Ok(())
}
