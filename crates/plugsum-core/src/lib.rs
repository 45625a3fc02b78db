pub mod config;
pub mod logging;

pub mod checksum;
pub mod db;
pub mod progress;
pub mod registry;
pub mod scan;
