//! `plugsum status` – show the recorded state of every known plugin.

use anyhow::{Context, Result};
use plugsum_core::db;
use std::path::Path;

pub fn run_status(base_dir: &Path) -> Result<()> {
    let db_path = db::db_path(base_dir);
    let collection = db::load(&db_path)
        .with_context(|| format!("load plugin database {}", db_path.display()))?;

    let Some(mut collection) = collection else {
        println!("No plugin database.");
        return Ok(());
    };

    collection.sort();
    println!("{:<44} {:<12} {:<18} {}", "NAME", "STATUS", "CHECKSUM", "MODIFIED");
    for record in &collection {
        let (checksum, modified) = match &record.current {
            Some(state) => (short_digest(&state.checksum), state.timestamp.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        println!(
            "{:<44} {:<12} {:<18} {}",
            record.name,
            record.status.as_str(),
            checksum,
            modified
        );
    }
    Ok(())
}

/// First 16 hex chars; enough to eyeball, keeps the table narrow.
fn short_digest(checksum: &str) -> String {
    checksum.chars().take(16).collect()
}
