/// Centralized error types for git-history-mcp using thiserror
///
/// Query failures cross the tool boundary as data: their `Display` output is
/// the text the assistant sees, so messages are written for a human reader.
use thiserror::Error;

/// Main error type for the server
#[derive(Error, Debug)]
pub enum HistoryMcpError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the git query operations. Never fatal: each variant is
/// rendered to text and returned to the caller, who can retry with corrected
/// input.
#[derive(Error, Debug)]
pub enum QueryError {
    /// No repository root has been selected for this session.
    #[error("Not in a git repository")]
    NoRepositorySelected,

    /// The requested path does not resolve to a regular file under the root.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The git subprocess exited non-zero or could not be spawned. Carries
    /// git's own stderr text so the caller sees the underlying cause.
    #[error("Git command error: {0}")]
    GitCommand(String),
}

/// Errors from the completion endpoint
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request to completion endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Completion response contained no message content")]
    EmptyResponse,
}

/// Errors related to configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}
