//! Filesystem helpers for staging the templates tree.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Pair every file under `source` with its destination under `dest`.
///
/// The walk is iterative and visits entries in file-name order, which keeps
/// the result stable between runs. Symlinks are followed, so a linked
/// directory contributes its files.
pub fn plan_tree_copy(source: &Path, dest: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = if rel.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(rel)
        };
        files.push((entry.into_path(), target));
    }

    Ok(files)
}

/// Count regular files below `dir`. A missing directory counts as zero.
pub fn count_files(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in WalkDir::new(dir) {
        if entry?.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

/// Create the parent directory of `path` if needed
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
