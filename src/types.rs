use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request to select the repository to analyze
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetRepositoryRequest {
    /// Full path to the git repository (e.g., /home/user/MyRepo). A path to
    /// a file or subdirectory inside the repository also works: the nearest
    /// enclosing repository root is selected.
    pub repo_path: String,
}

/// Request for the commit history of a file or line
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FileHistoryRequest {
    /// Path of the file, relative to the repository root
    pub file_path: String,
    /// Optional line number to get the history of a single line
    #[serde(default)]
    pub line_number: Option<u32>,
    /// Optional question to focus the summarization on (e.g., "When was
    /// this function renamed?"). Used only when the local LLM is available.
    #[serde(default)]
    pub user_question: Option<String>,
}

/// Request for a file's content at a past commit
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PreviousVersionRequest {
    /// Path of the file, relative to the repository root
    pub file_path: String,
    /// Commit hash (full or abbreviated) identifying the revision
    pub commit_hash: String,
}

/// Request for line-level authorship of a file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BlameRequest {
    /// Path of the file, relative to the repository root
    pub file_path: String,
    /// Optional line number of interest. Accepted for future filtering;
    /// the full-file blame is currently returned regardless.
    #[serde(default)]
    pub line_number: Option<u32>,
}

/// Request for the currently selected repository (no parameters)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CurrentRepositoryRequest {}

/// Request to list repository files (no parameters)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFilesRequest {}
