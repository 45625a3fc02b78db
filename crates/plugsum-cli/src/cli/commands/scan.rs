//! `plugsum scan` – recompute checksums, update the database, print the
//! sorted collection.

use anyhow::{Context, Result};
use plugsum_core::config::PlugsumConfig;
use plugsum_core::db;
use plugsum_core::progress::StderrProgress;
use plugsum_core::scan::Checksummer;
use std::path::{Path, PathBuf};

pub fn run_scan(base_dir: &Path, cfg: &PlugsumConfig, files: &[PathBuf]) -> Result<()> {
    let db_path = db::db_path(base_dir);
    let mut collection = db::load(&db_path)
        .with_context(|| format!("load plugin database {}", db_path.display()))?
        .unwrap_or_default();

    let mut progress = StderrProgress::default();
    let mut checksummer = Checksummer::new(base_dir, &mut progress);
    let summary = if files.is_empty() {
        checksummer.update_from_local(&mut collection, cfg)?
    } else {
        checksummer.update_files(&mut collection, files)?
    };

    collection.sort();
    for record in &collection {
        if let Some(state) = &record.current {
            println!("{} {}", record.name, state.checksum);
        }
    }

    db::save(&db_path, &collection)
        .with_context(|| format!("save plugin database {}", db_path.display()))?;

    tracing::info!(
        scanned = summary.scanned,
        modified = summary.modified,
        local_only = summary.local_only,
        missing = summary.missing,
        failed = summary.failed,
        "scan complete"
    );
    if summary.failed > 0 {
        eprintln!("warning: {} file(s) could not be read", summary.failed);
    }
    Ok(())
}
