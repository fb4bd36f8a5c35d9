//! Git query operations.
//!
//! [`GitHistory`] holds a resolved repository root and shells out to the `git`
//! binary for every query, returning its formatted output verbatim. Commit
//! metadata is deliberately not parsed into structured records: the server is
//! a pass-through over git's own text, not a git data model.

use crate::error::QueryError;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use walkdir::WalkDir;

/// Maximum number of entries shown by [`format_file_listing`]
const FILE_LISTING_LIMIT: usize = 50;

/// Query handle over a single repository root.
///
/// Cheap to clone; callers hold one per selected repository and replace it
/// wholesale when a new repository is chosen.
#[derive(Debug, Clone)]
pub struct GitHistory {
    root: PathBuf,
}

impl GitHistory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The repository root this handle queries
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get commit history for a file, or for a single line of it.
    ///
    /// With a line number this runs git's line-history query
    /// (`log -L n,n:file`) formatted as `<short-hash> - <author>,
    /// <relative-date> : <subject>`; without one it runs the one-line-per-
    /// commit log scoped to the file. A file with no commits yet is a
    /// success with the payload `"No history found"`.
    pub async fn file_history(
        &self,
        file_path: &str,
        line_number: Option<u32>,
    ) -> Result<String, QueryError> {
        self.validate_file(file_path)?;

        let output = match line_number {
            Some(line) => {
                let range = format!("-L{line},{line}:{file_path}");
                self.run_git(&["log", &range, "--pretty=format:%h - %an, %ar : %s"])
                    .await?
            }
            None => self.run_git(&["log", "--oneline", "--", file_path]).await?,
        };

        if output.is_empty() {
            Ok("No history found".to_string())
        } else {
            Ok(output)
        }
    }

    /// Get a file's exact content as of a specific commit.
    ///
    /// The hash is passed through to git unvalidated; an unknown or malformed
    /// revision comes back as [`QueryError::GitCommand`] carrying git's own
    /// error text.
    pub async fn previous_version(
        &self,
        file_path: &str,
        commit_hash: &str,
    ) -> Result<String, QueryError> {
        let spec = format!("{commit_hash}:{file_path}");
        self.run_git(&["show", &spec]).await
    }

    /// Get line-level authorship for a file.
    ///
    /// Runs blame in whitespace-insensitive mode with machine-parsable
    /// per-line output. `line_number` is accepted for future filtering but
    /// the full-file blame is always returned.
    pub async fn blame(
        &self,
        file_path: &str,
        line_number: Option<u32>,
    ) -> Result<String, QueryError> {
        tracing::debug!(file_path, ?line_number, "blame requested");
        self.run_git(&["blame", "-w", "--line-porcelain", file_path])
            .await
    }

    /// List every non-hidden file under the root, as sorted root-relative
    /// paths. Directories named `.git` are pruned entirely; unreadable
    /// entries are skipped.
    pub fn list_files(&self) -> Vec<String> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            !(entry.file_type().is_dir() && entry.file_name().to_str() == Some(".git"))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path());
            files.push(relative.to_string_lossy().into_owned());
        }

        files.sort();
        files
    }

    /// Check that `file_path` names an existing regular file under the root.
    ///
    /// A plain join + existence test, matching the permissive contract: there
    /// is no canonicalization and no rejection of `..` components.
    fn validate_file(&self, file_path: &str) -> Result<(), QueryError> {
        let full_path = self.root.join(file_path);
        if full_path.is_file() {
            Ok(())
        } else {
            Err(QueryError::FileNotFound(file_path.to_string()))
        }
    }

    /// Run git against this root and hand back trimmed stdout, or stderr as a
    /// [`QueryError::GitCommand`] on non-zero exit.
    async fn run_git(&self, args: &[&str]) -> Result<String, QueryError> {
        tracing::debug!(root = %self.root.display(), ?args, "running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .await
            .map_err(|e| QueryError::GitCommand(format!("failed to run git: {e}")))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout)
                .trim_end_matches('\n')
                .to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(QueryError::GitCommand(stderr))
        }
    }
}

/// Render a file listing for the tool surface: a count header, the first 50
/// entries, and a remainder suffix when the listing was truncated.
pub fn format_file_listing(files: &[String]) -> String {
    if files.is_empty() {
        return "No files found in repository (or only hidden/git files).".to_string();
    }

    let mut listing = files[..files.len().min(FILE_LISTING_LIMIT)].join("\n");
    if files.len() > FILE_LISTING_LIMIT {
        listing.push_str(&format!(
            "\n\n... and {} more files",
            files.len() - FILE_LISTING_LIMIT
        ));
    }

    format!("Found {} files in repository:\n\n{}", files.len(), listing)
}
