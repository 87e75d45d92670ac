//! Configuration module for GNews-RS
//!
//! Handles loading and validating settings from YAML files.

mod settings;

pub use settings::*;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default locations searched by [`load`], in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("gnews.yml"),
        PathBuf::from("config/gnews.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("gnews-rs/gnews.yml"));
    }
    paths
}

/// Load settings from an explicit file, the first default path that exists,
/// or fall back to defaults
pub fn load(path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = path {
        info!("Loading settings from: {}", path.display());
        return Settings::from_file(path);
    }

    for path in default_paths() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return Settings::from_file(&path);
        }
    }

    info!("No settings file found, using defaults");
    Ok(Settings::default())
}
