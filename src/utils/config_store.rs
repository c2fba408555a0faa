//! ConfigStore - Local Configuration Storage
//!
//! The dashboard only reads its configuration; nothing is written back.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::config::DashboardConfig;
use crate::error::{Error, Result};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "smite", APP_DIR_NAME)
}

/// Path of the configuration file (may not exist)
pub fn config_path() -> Result<PathBuf> {
    let dirs = project_dirs().ok_or(Error::ConfigDir { kind: "config" })?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Directory for log files, created if missing
pub fn log_dir() -> Result<PathBuf> {
    let dirs = project_dirs().ok_or(Error::ConfigDir { kind: "data" })?;
    let dir = dirs.data_local_dir().join("logs");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load the configuration from `path`; a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<DashboardConfig> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }

    toml::from_str(&content).map_err(|source| Error::TomlDe {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the configuration from the platform config directory
pub fn load_config() -> Result<DashboardConfig> {
    let path = config_path()?;
    info!(path = ?path, "Loading config file");
    load_config_from(&path)
}

/// Load the configuration, logging and falling back to defaults on error
pub fn load_or_default() -> DashboardConfig {
    load_config().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        DashboardConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "\n").expect("write");
        assert_eq!(load_config_from(&path).expect("defaults"), DashboardConfig::default());
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "locale = \"zh-CN\"\nsidebar_open = false\n\n[window]\nwidth = 1280.0\n",
        )
        .expect("write");

        let config = load_config_from(&path).expect("valid config");
        assert_eq!(config.locale.as_deref(), Some("zh-CN"));
        assert!(!config.sidebar_open);
        assert_eq!(config.window.width, 1280.0);
        assert!(!config.tabs.interactive);
    }

    #[test]
    fn malformed_file_is_a_toml_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "sidebar_open = \"maybe\"").expect("write");

        let err = load_config_from(&path).expect_err("type mismatch");
        assert!(matches!(err, Error::TomlDe { .. }));
    }
}
