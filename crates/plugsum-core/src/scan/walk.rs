//! Directory walking for full scans.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::PlugsumConfig;

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// Collect every regular file under the configured scan directories, in a
/// deterministic order. Symlinks are not followed. Returns the file paths
/// and the number of entries skipped because of walk errors.
pub fn collect_local_files(base_dir: &Path, cfg: &PlugsumConfig) -> (Vec<PathBuf>, usize) {
    let mut files = Vec::new();
    let mut failed = 0usize;

    for dir in &cfg.scan_dirs {
        let root = base_dir.join(dir);
        if !root.is_dir() {
            tracing::debug!("scan dir absent, skipping: {}", root.display());
            continue;
        }

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !cfg.skip_hidden || !is_hidden(e));

        for entry in walker {
            match entry {
                Ok(e) if e.file_type().is_file() => files.push(e.into_path()),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("walk error under {}: {}", root.display(), e);
                    failed += 1;
                }
            }
        }
    }

    (files, failed)
}
