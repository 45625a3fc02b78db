//! Persistence for the plugin registry: gzip-compressed JSON at
//! `<base>/db.json.gz`.
//!
//! Saves go through a sibling temp file plus rename so a crash mid-write
//! never corrupts an existing database.

mod error;

pub use error::DbError;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::registry::PluginCollection;

pub const DB_FILENAME: &str = "db.json.gz";

/// Path of the plugin database under a base directory.
pub fn db_path(base_dir: &Path) -> PathBuf {
    base_dir.join(DB_FILENAME)
}

/// Load the collection from `path`. Returns `Ok(None)` when no database
/// exists yet; a present but unreadable or malformed file is an error.
pub fn load(path: &Path) -> Result<Option<PluginCollection>, DbError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DbError::io(path, e)),
    };
    let decoder = GzDecoder::new(BufReader::new(file));
    let collection =
        serde_json::from_reader(decoder).map_err(|e| DbError::parse(path, e))?;
    Ok(Some(collection))
}

/// Write the collection to `path` atomically (temp file in the same
/// directory, then rename). Creates parent directories as needed.
pub fn save(path: &Path, collection: &PluginCollection) -> Result<(), DbError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DbError::io(parent, e))?;
        }
    }

    let tmp_path = path.with_extension("gz.tmp");
    let tmp = File::create(&tmp_path).map_err(|e| DbError::io(&tmp_path, e))?;
    let mut encoder = GzEncoder::new(BufWriter::new(tmp), Compression::default());
    serde_json::to_writer(&mut encoder, collection).map_err(|e| DbError::parse(&tmp_path, e))?;
    encoder
        .finish()
        .and_then(|mut w| w.flush().map(|()| w))
        .map_err(|e| DbError::io(&tmp_path, e))?;

    fs::rename(&tmp_path, path).map_err(|e| DbError::io(path, e))?;
    Ok(())
}
