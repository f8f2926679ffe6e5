//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hacker-stories/`, `~/.cache/hacker-stories/`
//! - macOS: `~/Library/Application Support/hacker-stories/`, `~/Library/Caches/hacker-stories/`
//! - Windows: `%APPDATA%\hacker-stories\`, `%LOCALAPPDATA%\hacker-stories\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hacker-stories";
const LOCAL_STORAGE_FILE: &str = ".hacker-stories.storage.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to global storage file
pub fn global_storage_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("storage.toml"))
}

/// Get path to local storage file (in CWD)
pub fn local_storage_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_STORAGE_FILE))
}

/// Check if local storage file exists
pub fn has_local_storage() -> bool {
    local_storage_path().map(|p| p.exists()).unwrap_or(false)
}
