//! Recompute checksums from local files and fold the results into a
//! collection.
//!
//! Two entry points: `update_from_local` walks the configured scan
//! directories; `update_files` restricts the pass to an explicit file list
//! (trailing CLI arguments). Only the full walk marks absent records
//! `Missing` — a partial pass can't tell absent from unvisited.

mod walk;

pub use walk::collect_local_files;

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::checksum;
use crate::config::PlugsumConfig;
use crate::progress::Progress;
use crate::registry::{ChecksumState, PluginCollection, PluginRecord, PluginStatus};

/// Counters for one scan pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files successfully checksummed.
    pub scanned: usize,
    /// Known records whose checksum changed.
    pub modified: usize,
    /// Files not previously in the database.
    pub local_only: usize,
    /// Records absent from disk (full scans only).
    pub missing: usize,
    /// Files skipped because they could not be read.
    pub failed: usize,
}

/// Checksums local plugin files against a collection.
pub struct Checksummer<'a> {
    base_dir: &'a Path,
    progress: &'a mut dyn Progress,
}

impl<'a> Checksummer<'a> {
    pub fn new(base_dir: &'a Path, progress: &'a mut dyn Progress) -> Self {
        Self { base_dir, progress }
    }

    /// Walk the configured scan directories, checksum every file, and update
    /// the collection. Records whose files were not seen are marked
    /// `Missing`. Unreadable files are logged and counted, not fatal.
    pub fn update_from_local(
        &mut self,
        collection: &mut PluginCollection,
        cfg: &PlugsumConfig,
    ) -> Result<ScanSummary> {
        let (files, walk_failed) = collect_local_files(self.base_dir, cfg);
        let mut summary = ScanSummary {
            failed: walk_failed,
            ..Default::default()
        };

        self.progress.begin("checksumming", files.len());
        let mut seen = HashSet::with_capacity(files.len());
        for path in &files {
            let name = plugin_name(self.base_dir, path);
            self.progress.item(&name);
            if let Err(e) = self.apply(collection, &name, path, &mut summary) {
                tracing::warn!("skipping {}: {:#}", name, e);
                summary.failed += 1;
            }
            // The walk found the file either way; a record is missing only
            // when its file is absent from the walk.
            seen.insert(name);
        }
        self.progress.end();

        for record in collection.iter_mut() {
            if !seen.contains(&record.name) {
                record.status = PluginStatus::Missing;
                summary.missing += 1;
            }
        }

        Ok(summary)
    }

    /// Checksum an explicit file list. Paths may be absolute or relative to
    /// the base directory; a listed file that does not exist or cannot be
    /// read is an error.
    pub fn update_files(
        &mut self,
        collection: &mut PluginCollection,
        files: &[PathBuf],
    ) -> Result<ScanSummary> {
        let mut summary = ScanSummary::default();

        self.progress.begin("checksumming", files.len());
        for given in files {
            let path = if given.is_absolute() {
                given.clone()
            } else {
                self.base_dir.join(given)
            };
            if !path.is_file() {
                bail!("no such file: {}", path.display());
            }
            let name = plugin_name(self.base_dir, &path);
            self.progress.item(&name);
            self.apply(collection, &name, &path, &mut summary)?;
        }
        self.progress.end();

        Ok(summary)
    }

    fn apply(
        &mut self,
        collection: &mut PluginCollection,
        name: &str,
        path: &Path,
        summary: &mut ScanSummary,
    ) -> Result<()> {
        let state = ChecksumState {
            checksum: checksum::sha256_path(path)?,
            timestamp: file_mtime(path)?,
        };
        summary.scanned += 1;

        match collection.get_mut(name) {
            Some(record) => {
                let changed = record
                    .current
                    .as_ref()
                    .map(|c| c.checksum != state.checksum)
                    .unwrap_or(true);
                if changed {
                    summary.modified += 1;
                    record.status = PluginStatus::Modified;
                } else {
                    record.status = PluginStatus::Installed;
                }
                record.current = Some(state);
            }
            None => {
                summary.local_only += 1;
                collection.upsert(PluginRecord::new(name, state, PluginStatus::LocalOnly));
            }
        }
        Ok(())
    }
}

/// Registry name for a file: slash-separated path relative to the base
/// directory, or the full path when the file lives outside it.
pub fn plugin_name(base_dir: &Path, path: &Path) -> String {
    match path.strip_prefix(base_dir) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

fn file_mtime(path: &Path) -> Result<i64> {
    let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    let mtime = meta
        .modified()
        .with_context(|| format!("mtime {}", path.display()))?;
    // Pre-epoch mtimes clamp to 0.
    Ok(mtime
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0))
}
