//! Registry of known plugin files and their checksum state.
//!
//! The collection is what scans update and what gets persisted to the
//! database file. Names are unique; callers sort before printing so output
//! is stable across runs.

mod record;

pub use record::{ChecksumState, PluginRecord, PluginStatus};

use serde::{Deserialize, Serialize};

/// Ordered set of plugin records, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginCollection {
    plugins: Vec<PluginRecord>,
}

impl PluginCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PluginRecord> {
        self.plugins.iter().find(|r| r.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PluginRecord> {
        self.plugins.iter_mut().find(|r| r.name == name)
    }

    /// Insert a record, replacing any existing record with the same name.
    pub fn upsert(&mut self, record: PluginRecord) {
        match self.get_mut(&record.name) {
            Some(existing) => *existing = record,
            None => self.plugins.push(record),
        }
    }

    /// Order records lexicographically by name. Idempotent.
    pub fn sort(&mut self) {
        self.plugins.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginRecord> {
        self.plugins.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PluginRecord> {
        self.plugins.iter_mut()
    }
}

impl<'a> IntoIterator for &'a PluginCollection {
    type Item = &'a PluginRecord;
    type IntoIter = std::slice::Iter<'a, PluginRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, checksum: &str) -> PluginRecord {
        PluginRecord::new(
            name,
            ChecksumState {
                checksum: checksum.to_string(),
                timestamp: 0,
            },
            PluginStatus::Installed,
        )
    }

    #[test]
    fn upsert_inserts_then_replaces() {
        let mut c = PluginCollection::new();
        c.upsert(record("plugins/a.jar", "aa"));
        c.upsert(record("plugins/b.jar", "bb"));
        assert_eq!(c.len(), 2);

        c.upsert(record("plugins/a.jar", "a2"));
        assert_eq!(c.len(), 2);
        let a = c.get("plugins/a.jar").unwrap();
        assert_eq!(a.current.as_ref().unwrap().checksum, "a2");
    }

    #[test]
    fn sort_orders_by_name_and_is_idempotent() {
        let mut c = PluginCollection::new();
        c.upsert(record("plugins/z.jar", "z"));
        c.upsert(record("jars/a.jar", "a"));
        c.upsert(record("plugins/a.jar", "pa"));

        c.sort();
        let names: Vec<_> = c.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["jars/a.jar", "plugins/a.jar", "plugins/z.jar"]);

        c.sort();
        let again: Vec<_> = c.iter().map(|r| r.name.clone()).collect();
        assert_eq!(again, names);
    }

    #[test]
    fn get_missing_name_is_none() {
        let c = PluginCollection::new();
        assert!(c.get("plugins/a.jar").is_none());
        assert!(c.is_empty());
    }
}
