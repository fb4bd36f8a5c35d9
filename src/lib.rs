//! # Git History MCP - Version History Access for AI Assistants
//!
//! A Rust-based Model Context Protocol (MCP) server that lets AI assistants
//! inspect the version history of files in a local git repository: commit
//! history for a file or line, file content at a past revision, and line-level
//! authorship (blame).
//!
//! ## Overview
//!
//! The crate is a thin coordination layer. Git operations are delegated to the
//! `git` binary invoked as a subprocess, and optional natural-language
//! summarization of history text is delegated to a local Ollama completion
//! endpoint. Nothing is parsed into a commit data model: git's formatted text
//! output is passed through verbatim so callers see exactly what the tool
//! produced.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   MCP Client    │  (Claude, VS Code, etc.)
//! └────────┬────────┘
//!          │ stdio
//! ┌────────▼────────┐
//! │ HistoryMcpServer│  (6 tools, 3 prompts)
//! └────────┬────────┘
//!          │
//!    ┌─────┴──────┬─────────────┐
//!    │            │             │
//! ┌──▼───────┐ ┌──▼────────┐ ┌──▼─────────┐
//! │ locator  │ │ history   │ │ llm        │
//! │(.git walk│ │(git sub-  │ │(Ollama     │
//! │ upward)  │ │ process)  │ │ /api/chat) │
//! └──────────┘ └───────────┘ └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`mcp_server`]: MCP protocol server implementation with tools and prompts
//! - [`locator`]: repository root discovery by ancestor-directory walking
//! - [`history`]: git query operations (log, show, blame, file listing)
//! - [`llm`]: best-effort summarization via a local completion endpoint
//! - [`config`]: configuration management with environment variable support
//! - [`types`]: MCP request types with JSON schema
//! - [`error`]: error types and result aliases
//!
//! ## Usage Example
//!
//! ```no_run
//! use git_history_mcp::config::Config;
//! use git_history_mcp::mcp_server::HistoryMcpServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = HistoryMcpServer::new(Config::default(), None);
//!     server.serve_stdio().await?;
//!     Ok(())
//! }
//! ```

/// Configuration management with environment variable overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// Git query operations via the `git` subprocess
pub mod history;

/// Summarization through a local Ollama completion endpoint
pub mod llm;

/// Repository root discovery
pub mod locator;

/// MCP server implementation with tools and prompts
pub mod mcp_server;

/// MCP request types with JSON schema definitions
pub mod types;
