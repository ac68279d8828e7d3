//! Recursive markdown scanner feeding the task extractor.
//!
//! Walks one or more root directories, extracts checklist tasks from
//! every `.md` file, optionally filters them through a parsed query, and
//! returns the survivors sorted by `(file_path, line_number)`. Unreadable
//! files are skipped with a warning; an unresolvable root fails the scan.

pub mod error;

pub use error::{Result, ScanError};

use mdtask_core::{extract_task, Query, Task};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Scans `roots` for markdown tasks, keeping only those matching `query`.
///
/// Passing `None` keeps everything. File paths in the result are rewritten
/// relative to their scan root when possible.
pub fn scan_tasks(roots: &[PathBuf], query: Option<&Query>) -> Result<Vec<Task>> {
    let mut all = Vec::new();

    for root in roots {
        let root = resolve_root(root)?;
        debug!(root = %root.display(), "scanning root");

        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }

            let contents = match fs::read_to_string(entry.path()) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "skipping unreadable file");
                    continue;
                }
            };

            let display_path = display_path(entry.path(), &root);
            for task in extract_from_str(&contents, &display_path) {
                if query.map_or(true, |q| q.matches(&task)) {
                    all.push(task);
                }
            }
        }
    }

    all.sort_by(|a, b| {
        a.file_path
            .cmp(&b.file_path)
            .then(a.line_number.cmp(&b.line_number))
    });

    Ok(all)
}

/// Scans `roots` without filtering.
pub fn scan_tasks_all(roots: &[PathBuf]) -> Result<Vec<Task>> {
    scan_tasks(roots, None)
}

/// Extracts every task from a single document, no directory walk.
pub fn extract_from_file(path: &Path) -> Result<Vec<Task>> {
    let contents = fs::read_to_string(path)?;
    Ok(extract_from_str(&contents, &path.to_string_lossy()))
}

/// Runs the extractor over each line of `contents` with 1-based numbering.
pub fn extract_from_str(contents: &str, file_path: &str) -> Vec<Task> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| extract_task(line, file_path, idx + 1))
        .collect()
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    fs::canonicalize(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{extract_from_str, is_markdown};
    use std::path::Path;

    #[test]
    fn extract_from_str_numbers_lines_from_one() {
        let contents = "# heading\n- [ ] first\ntext\n- [x] second\n";
        let tasks = extract_from_str(contents, "todo.md");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].line_number, 2);
        assert_eq!(tasks[0].id, "todo.md:2");
        assert_eq!(tasks[1].line_number, 4);
    }

    #[test]
    fn markdown_extension_is_case_insensitive() {
        assert!(is_markdown(Path::new("notes/todo.md")));
        assert!(is_markdown(Path::new("notes/TODO.MD")));
        assert!(!is_markdown(Path::new("notes/todo.txt")));
        assert!(!is_markdown(Path::new("notes/todo")));
    }
}
