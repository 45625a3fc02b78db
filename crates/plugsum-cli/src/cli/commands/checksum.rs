//! `plugsum checksum` – compute SHA-256 of a single file.

use anyhow::Result;
use plugsum_core::checksum;
use std::path::Path;

pub fn run_checksum(path: &Path) -> Result<()> {
    let digest = checksum::sha256_path(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
