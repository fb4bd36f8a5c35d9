//! Repository root discovery.
//!
//! Walks ancestor directories from a start path looking for a `.git` entry.
//! Finding nothing is a normal outcome ("no repository here"), not an error,
//! so the result is an `Option` rather than a `Result`.

use std::path::{Path, PathBuf};

/// Find the nearest ancestor directory containing a `.git` entry.
///
/// Starts from `start`, or the current working directory when `None`. A start
/// path naming a file begins the walk at its parent directory. The `.git`
/// entry may be a directory or a file (worktrees and submodules record their
/// metadata location in a `.git` file), so only presence is checked.
pub fn find_repo_root(start: Option<&Path>) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok();

    let start = match start {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.as_ref()?.join(path),
        None => cwd?,
    };

    let mut current = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start
    };

    loop {
        if current.join(".git").exists() {
            return Some(current);
        }
        // pop() returns false once the filesystem root is reached
        if !current.pop() {
            return None;
        }
    }
}
