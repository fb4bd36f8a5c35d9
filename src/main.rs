use anyhow::Result;
use clap::Parser;
use git_history_mcp::config::Config;
use git_history_mcp::history::GitHistory;
use git_history_mcp::locator;
use git_history_mcp::mcp_server::HistoryMcpServer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// MCP server giving AI assistants access to git file history, blame, and
/// past revisions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Repository to pre-select (defaults to the nearest repository
    /// enclosing the current directory, if any)
    #[arg(long)]
    repo: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the local completion endpoint
    #[arg(long, env = "GIT_HISTORY_MCP_OLLAMA_URL")]
    ollama_url: Option<String>,

    /// Model identifier for summarization
    #[arg(long, env = "GIT_HISTORY_MCP_MODEL")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol; all logging goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.ollama_url {
        config.llm.base_url = url;
    }
    if let Some(model) = cli.model {
        config.llm.model = model;
    }

    // Pre-select a repository when one can be found; tools report the
    // absence otherwise and the caller selects one with set_repository_path.
    let repository = match locator::find_repo_root(cli.repo.as_deref()) {
        Some(root) => {
            tracing::info!("Using repository: {}", root.display());
            Some(GitHistory::new(root))
        }
        None => {
            tracing::info!("Not in a git repository - use set_repository_path to specify one");
            None
        }
    };

    let server = HistoryMcpServer::new(config, repository);
    server.serve_stdio().await?;

    Ok(())
}
