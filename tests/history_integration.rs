//! End-to-end tests against a real git repository in a tempdir.

use git_history_mcp::config::{Config, LlmConfig};
use git_history_mcp::history::{GitHistory, format_file_listing};
use git_history_mcp::llm::Summarizer;
use git_history_mcp::locator::find_repo_root;
use git_history_mcp::mcp_server::HistoryMcpServer;
use std::path::Path;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .env("GIT_AUTHOR_NAME", "Integration Tester")
        .env("GIT_AUTHOR_EMAIL", "it@example.com")
        .env("GIT_COMMITTER_NAME", "Integration Tester")
        .env("GIT_COMMITTER_EMAIL", "it@example.com")
        .output()
        .expect("git binary available");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn commit_file(dir: &Path, rel_path: &str, content: &str, message: &str) -> String {
    let full = dir.join(rel_path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full, content).unwrap();
    git(dir, &["add", rel_path]);
    git(dir, &["commit", "-q", "-m", message]);
    git(dir, &["rev-parse", "--short", "HEAD"])
}

#[tokio::test]
async fn full_history_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    git(root, &["init", "-q"]);

    let first = commit_file(root, "src/app.rs", "fn run() {}\n", "initial app");
    let _second = commit_file(root, "src/app.rs", "fn run() { start(); }\n", "wire up start");
    commit_file(root, "src/app.rs", "fn run() { start(); stop(); }\n", "add stop");

    // Locator finds the root from anywhere inside the tree
    let located = find_repo_root(Some(&root.join("src/app.rs"))).unwrap();
    assert_eq!(located, root);

    let history = GitHistory::new(located);

    // Three commits touching the file, newest first
    let log = history.file_history("src/app.rs", None).await.unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("add stop"));

    // Line history carries the formatted header for the touching commits
    let line_log = history.file_history("src/app.rs", Some(1)).await.unwrap();
    assert!(line_log.contains("Integration Tester"));

    // The first revision is retrievable byte-for-byte (modulo trailing newline)
    let old = history.previous_version("src/app.rs", &first).await.unwrap();
    assert_eq!(old, "fn run() {}");

    // Blame attributes every line
    let blame = history.blame("src/app.rs", None).await.unwrap();
    assert!(blame.contains("author Integration Tester"));

    // Listing excludes .git internals
    let files = history.list_files();
    assert_eq!(files, vec!["src/app.rs".to_string()]);
    assert!(format_file_listing(&files).contains("Found 1 files in repository:"));
}

#[tokio::test]
async fn server_starts_with_preselected_repository() {
    let temp_dir = TempDir::new().unwrap();
    git(temp_dir.path(), &["init", "-q"]);

    let config = Config {
        llm: LlmConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..LlmConfig::default()
        },
    };
    let repo = GitHistory::new(temp_dir.path().to_path_buf());
    let server = HistoryMcpServer::new(config, Some(repo));

    let selected = server.current_repository().await.unwrap();
    assert_eq!(selected.root(), temp_dir.path());
}

#[tokio::test]
async fn summarizer_degrades_without_endpoint() {
    let summarizer = Summarizer::new(&LlmConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        model: "phi3:mini".to_string(),
        max_tokens: 500,
    });

    assert!(!summarizer.is_available().await);

    let fallback = summarizer
        .summarize("abc1234 initial app", "What changed?")
        .await;
    assert!(fallback.contains("Could not"));
}
