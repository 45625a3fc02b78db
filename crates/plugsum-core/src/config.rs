use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the plugin base directory (overrides config,
/// is overridden by the `--base-dir` flag).
pub const BASE_DIR_ENV: &str = "PLUGSUM_DIR";

/// Directories scanned under the base directory when no explicit file list
/// is given.
pub const DEFAULT_SCAN_DIRS: &[&str] = &["plugins", "jars", "scripts", "macros", "luts"];

fn default_scan_dirs() -> Vec<String> {
    DEFAULT_SCAN_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_skip_hidden() -> bool {
    true
}

/// Global configuration loaded from `~/.config/plugsum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlugsumConfig {
    /// Plugin base directory; the `PLUGSUM_DIR` env var and the `--base-dir`
    /// flag take precedence.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Subdirectories of the base directory to walk during a full scan.
    /// Missing directories are skipped.
    #[serde(default = "default_scan_dirs")]
    pub scan_dirs: Vec<String>,
    /// Skip dot-prefixed files and directories during walks.
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,
}

impl Default for PlugsumConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            scan_dirs: default_scan_dirs(),
            skip_hidden: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("plugsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PlugsumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PlugsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PlugsumConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Resolve the plugin base directory: `--base-dir` flag, then `PLUGSUM_DIR`,
/// then the config file, then the current working directory.
pub fn resolve_base_dir(flag: Option<&Path>, cfg: &PlugsumConfig) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(BASE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = &cfg.base_dir {
        return Ok(dir.clone());
    }
    Ok(std::env::current_dir()?)
}
