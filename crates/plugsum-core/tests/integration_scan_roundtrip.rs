//! End-to-end core flow: scan a plugin tree, persist the database, reload
//! it, and rescan after local changes.

use std::fs;
use std::path::Path;

use plugsum_core::config::PlugsumConfig;
use plugsum_core::db;
use plugsum_core::progress::SilentProgress;
use plugsum_core::registry::{PluginCollection, PluginStatus};
use plugsum_core::scan::Checksummer;

fn touch(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn scan_save_load_rescan() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    touch(&base.join("plugins/Alpha_.jar"), b"alpha v1");
    touch(&base.join("plugins/filters/Blur_.jar"), b"blur v1");
    touch(&base.join("jars/util.jar"), b"util v1");
    touch(&base.join("macros/count.ijm"), b"macro");
    touch(&base.join("plugins/.DS_Store"), b"noise");

    let cfg = PlugsumConfig::default();
    let db_path = db::db_path(base);

    // First scan: everything is new.
    let mut collection = db::load(&db_path).unwrap().unwrap_or_default();
    let mut progress = SilentProgress;
    let summary = Checksummer::new(base, &mut progress)
        .update_from_local(&mut collection, &cfg)
        .unwrap();
    assert_eq!(summary.scanned, 4);
    assert_eq!(summary.local_only, 4);
    assert_eq!(summary.failed, 0);

    collection.sort();
    let names: Vec<_> = collection.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "jars/util.jar",
            "macros/count.ijm",
            "plugins/Alpha_.jar",
            "plugins/filters/Blur_.jar",
        ]
    );

    db::save(&db_path, &collection).unwrap();

    // Mutate the tree: one modified, one removed, rest untouched.
    fs::write(base.join("plugins/Alpha_.jar"), b"alpha v2").unwrap();
    fs::remove_file(base.join("jars/util.jar")).unwrap();

    // Reload from disk and rescan, as a fresh process would.
    let mut reloaded = db::load(&db_path).unwrap().expect("database exists");
    assert_eq!(reloaded, collection);

    let summary = Checksummer::new(base, &mut progress)
        .update_from_local(&mut reloaded, &cfg)
        .unwrap();
    assert_eq!(summary.scanned, 3);
    assert_eq!(summary.modified, 1);
    assert_eq!(summary.missing, 1);
    assert_eq!(summary.local_only, 0);

    assert_eq!(
        reloaded.get("plugins/Alpha_.jar").unwrap().status,
        PluginStatus::Modified
    );
    assert_eq!(
        reloaded.get("jars/util.jar").unwrap().status,
        PluginStatus::Missing
    );
    assert_eq!(
        reloaded.get("macros/count.ijm").unwrap().status,
        PluginStatus::Installed
    );

    // The missing record keeps its last known checksum.
    let gone = reloaded.get("jars/util.jar").unwrap();
    assert!(gone.current.is_some());

    db::save(&db_path, &reloaded).unwrap();
    let final_state = db::load(&db_path).unwrap().unwrap();
    assert_eq!(final_state, reloaded);
}

#[test]
fn partial_scan_updates_listed_file_only() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path();
    touch(&base.join("plugins/Alpha_.jar"), b"alpha v1");
    touch(&base.join("plugins/Beta_.jar"), b"beta v1");

    let cfg = PlugsumConfig::default();
    let mut progress = SilentProgress;
    let mut collection = PluginCollection::new();
    Checksummer::new(base, &mut progress)
        .update_from_local(&mut collection, &cfg)
        .unwrap();
    let alpha_before = collection
        .get("plugins/Alpha_.jar")
        .unwrap()
        .current
        .clone()
        .unwrap();

    fs::write(base.join("plugins/Alpha_.jar"), b"alpha v2").unwrap();
    fs::write(base.join("plugins/Beta_.jar"), b"beta v2").unwrap();

    Checksummer::new(base, &mut progress)
        .update_files(&mut collection, &["plugins/Alpha_.jar".into()])
        .unwrap();

    let alpha = collection.get("plugins/Alpha_.jar").unwrap();
    assert_eq!(alpha.status, PluginStatus::Modified);
    assert_ne!(alpha.current.as_ref().unwrap().checksum, alpha_before.checksum);

    // Beta changed on disk but was not listed, so its record is untouched.
    let beta = collection.get("plugins/Beta_.jar").unwrap();
    assert_eq!(beta.status, PluginStatus::LocalOnly);
}
