//! CLI command handlers, one file per command.

mod checksum;
mod scan;
mod status;

pub use checksum::run_checksum;
pub use scan::run_scan;
pub use status::run_status;
