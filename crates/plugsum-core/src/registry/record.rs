//! Per-plugin record types stored in the registry.

use serde::{Deserialize, Serialize};

/// Digest plus the file modification time (unix seconds) observed when the
/// digest was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumState {
    pub checksum: String,
    pub timestamp: i64,
}

/// How a plugin file relates to the persisted database after a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginStatus {
    /// Known and unchanged since the last scan.
    Installed,
    /// Known, but the on-disk checksum differs from the recorded one.
    Modified,
    /// Present on disk but absent from the database.
    LocalOnly,
    /// In the database but not found by a full scan.
    Missing,
}

impl PluginStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PluginStatus::Installed => "installed",
            PluginStatus::Modified => "modified",
            PluginStatus::LocalOnly => "local-only",
            PluginStatus::Missing => "missing",
        }
    }
}

/// One plugin file tracked by the registry. `name` is the slash-separated
/// path relative to the base directory (e.g. `plugins/Foo_.jar`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub current: Option<ChecksumState>,
    pub status: PluginStatus,
}

impl PluginRecord {
    pub fn new(name: impl Into<String>, state: ChecksumState, status: PluginStatus) -> Self {
        Self {
            name: name.into(),
            current: Some(state),
            status,
        }
    }
}
