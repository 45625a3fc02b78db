//! Progress reporting for scans.
//!
//! Scan output (the `name checksum` lines) goes to stdout, so progress must
//! stay on stderr. The trait keeps the scanner quiet in library and test use.

use std::io::Write;

pub trait Progress {
    /// A pass over `total` files is starting.
    fn begin(&mut self, label: &str, total: usize);
    /// One file is about to be processed.
    fn item(&mut self, name: &str);
    /// The pass finished.
    fn end(&mut self);
}

/// Progress reporter that writes one line per file to stderr.
#[derive(Debug, Default)]
pub struct StderrProgress {
    total: usize,
    count: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, label: &str, total: usize) {
        self.total = total;
        self.count = 0;
        let _ = writeln!(std::io::stderr(), "{label}: {total} file(s)");
    }

    fn item(&mut self, name: &str) {
        self.count += 1;
        let _ = writeln!(std::io::stderr(), "[{}/{}] {}", self.count, self.total, name);
    }

    fn end(&mut self) {
        let _ = writeln!(std::io::stderr(), "done ({} of {})", self.count, self.total);
    }
}

/// No-op reporter for tests and embedding.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn begin(&mut self, _label: &str, _total: usize) {}
    fn item(&mut self, _name: &str) {}
    fn end(&mut self) {}
}
