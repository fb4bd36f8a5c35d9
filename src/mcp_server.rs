use crate::config::Config;
use crate::error::QueryError;
use crate::history::{self, GitHistory};
use crate::llm::Summarizer;
use crate::locator;
use crate::types::*;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::prompt::PromptRouter, tool::ToolRouter, wrapper::Parameters},
    model::*,
    prompt, prompt_handler, prompt_router,
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router,
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// History longer than this many lines is worth summarizing
const SUMMARY_LINE_THRESHOLD: usize = 3;

const DEFAULT_QUESTION: &str = "What changed in this file?";

const NO_REPOSITORY_MSG: &str =
    "No repository selected. Use set_repository_path first to specify which git repository to analyze.";

#[derive(Clone)]
pub struct HistoryMcpServer {
    /// Session state: the currently selected repository. Replaced wholesale
    /// by set_repository_path; readers clone the handle out of the lock
    /// before touching git, so the lock is never held across a subprocess.
    repository: Arc<RwLock<Option<GitHistory>>>,
    summarizer: Arc<Summarizer>,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

impl HistoryMcpServer {
    /// Create a server, optionally pre-selecting a repository.
    pub fn new(config: Config, repository: Option<GitHistory>) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
            summarizer: Arc::new(Summarizer::new(&config.llm)),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    /// The currently selected repository, if any
    pub async fn current_repository(&self) -> Option<GitHistory> {
        self.repository.read().await.clone()
    }
}

#[tool_router(router = tool_router)]
impl HistoryMcpServer {
    #[tool(
        description = "Set the git repository path to analyze. Use this before asking about file history."
    )]
    async fn set_repository_path(
        &self,
        Parameters(req): Parameters<SetRepositoryRequest>,
    ) -> Result<String, String> {
        match locator::find_repo_root(Some(Path::new(&req.repo_path))) {
            Some(root) => {
                tracing::info!("Selected repository: {}", root.display());
                let handle = GitHistory::new(root);
                let confirmation = format!("Now analyzing repository: {}", handle.root().display());
                *self.repository.write().await = Some(handle);
                Ok(confirmation)
            }
            None => Ok("Not a valid git repository. Please check the path.".to_string()),
        }
    }

    #[tool(
        description = "Get the git commit history for a file or line number with intelligent summarization."
    )]
    async fn get_file_history(
        &self,
        Parameters(req): Parameters<FileHistoryRequest>,
    ) -> Result<String, String> {
        let Some(repo) = self.current_repository().await else {
            return Ok(NO_REPOSITORY_MSG.to_string());
        };

        let result = match repo.file_history(&req.file_path, req.line_number).await {
            Ok(result) => result,
            Err(QueryError::FileNotFound(path)) => {
                return Ok(format!(
                    "File not found in repository: {path}\nRepository root: {}",
                    repo.root().display()
                ));
            }
            Err(e) => return Ok(e.to_string()),
        };

        // Summarization is best-effort: short histories and a dead endpoint
        // both fall back to the raw git output.
        if result.lines().count() > SUMMARY_LINE_THRESHOLD && self.summarizer.is_available().await {
            let question = req.user_question.as_deref().unwrap_or(DEFAULT_QUESTION);
            return Ok(self.summarizer.summarize(&result, question).await);
        }

        Ok(result)
    }

    #[tool(description = "Get what a file looked like at a previous commit.")]
    async fn get_previous_version(
        &self,
        Parameters(req): Parameters<PreviousVersionRequest>,
    ) -> Result<String, String> {
        let Some(repo) = self.current_repository().await else {
            return Ok(NO_REPOSITORY_MSG.to_string());
        };

        match repo.previous_version(&req.file_path, &req.commit_hash).await {
            Ok(content) => Ok(format!(
                "File content at commit {}:\n\n{content}",
                req.commit_hash
            )),
            Err(e) => Ok(e.to_string()),
        }
    }

    #[tool(description = "See who last modified each line of a file and when.")]
    async fn get_blame_info(
        &self,
        Parameters(req): Parameters<BlameRequest>,
    ) -> Result<String, String> {
        let Some(repo) = self.current_repository().await else {
            return Ok(NO_REPOSITORY_MSG.to_string());
        };

        match repo.blame(&req.file_path, req.line_number).await {
            Ok(blame) => Ok(blame),
            Err(e) => Ok(e.to_string()),
        }
    }

    #[tool(description = "Get the currently selected git repository path.")]
    async fn get_current_repository(
        &self,
        Parameters(_req): Parameters<CurrentRepositoryRequest>,
    ) -> Result<String, String> {
        match self.current_repository().await {
            Some(repo) => Ok(format!("Current repository: {}", repo.root().display())),
            None => Ok(NO_REPOSITORY_MSG.to_string()),
        }
    }

    #[tool(description = "List all files in the current repository.")]
    async fn list_repository_files(
        &self,
        Parameters(_req): Parameters<ListFilesRequest>,
    ) -> Result<String, String> {
        let Some(repo) = self.current_repository().await else {
            return Ok(NO_REPOSITORY_MSG.to_string());
        };

        Ok(history::format_file_listing(&repo.list_files()))
    }
}

// Prompts for slash commands
#[prompt_router]
impl HistoryMcpServer {
    #[prompt(
        name = "history",
        description = "Show and summarize the commit history of a file"
    )]
    async fn history_prompt(
        &self,
        Parameters(args): Parameters<serde_json::Value>,
    ) -> Result<Vec<PromptMessage>, McpError> {
        let file = args.get("file").and_then(|v| v.as_str()).unwrap_or("");

        Ok(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            format!("Please show the commit history of '{}' and summarize how it evolved.", file),
        )])
    }

    #[prompt(
        name = "blame",
        description = "Show who last modified each line of a file"
    )]
    async fn blame_prompt(
        &self,
        Parameters(args): Parameters<serde_json::Value>,
    ) -> Result<Vec<PromptMessage>, McpError> {
        let file = args.get("file").and_then(|v| v.as_str()).unwrap_or("");

        Ok(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            format!("Please show the blame information for '{}'.", file),
        )])
    }

    #[prompt(
        name = "previous",
        description = "Show a file's content as of a past commit"
    )]
    async fn previous_prompt(
        &self,
        Parameters(args): Parameters<serde_json::Value>,
    ) -> Result<GetPromptResult, McpError> {
        let file = args.get("file").and_then(|v| v.as_str()).unwrap_or("");
        let commit = args.get("commit").and_then(|v| v.as_str()).unwrap_or("HEAD");

        let messages = vec![PromptMessage::new_text(
            PromptMessageRole::User,
            format!("Please show the content of '{}' as of commit {}.", file, commit),
        )];

        Ok(GetPromptResult {
            description: Some(format!("Content of {} at {}", file, commit)),
            messages,
        })
    }
}

#[tool_handler(router = self.tool_router)]
#[prompt_handler]
impl ServerHandler for HistoryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "git-history-mcp".into(),
                title: Some("Git History - Version History Access for AI Assistants".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Git history access for the current project. \
                Use set_repository_path to choose a repository, get_file_history to see \
                how a file (or a single line) changed, get_previous_version to read a \
                file at a past commit, and get_blame_info for line-level authorship."
                    .into(),
            ),
        }
    }
}

impl HistoryMcpServer {
    pub async fn serve_stdio(self) -> Result<()> {
        tracing::info!("Starting git history MCP server");

        let transport = rmcp::transport::io::stdio();

        self.serve(transport).await?.waiting().await?;

        Ok(())
    }
}
