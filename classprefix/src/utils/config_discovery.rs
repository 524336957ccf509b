//! Locates and loads the configuration file for a run.
//!
//! Lookup order: an explicit path (flag or `CLASSPREFIX_CONFIG`), then
//! `./.classprefix.yaml`, then `<config dir>/classprefix/config.yaml`.
//! When none exists the embedded defaults are used.

use anyhow::{Context, Result, bail};
use classprefix_core::PrefixConfig;
use log::debug;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".classprefix.yaml";
const APP_DIR: &str = "classprefix";
const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// The implicit locations searched when no explicit path is given.
pub fn config_candidate_paths(working_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![working_dir.join(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(APP_DIR).join(GLOBAL_CONFIG_FILE));
    }
    candidates
}

/// Loads the configuration for a run.
pub fn load_config(explicit: Option<&Path>) -> Result<PrefixConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Configuration file '{}' does not exist.", path.display());
        }
        return PrefixConfig::load_from_file(path);
    }

    let working_dir = std::env::current_dir().context("Failed to determine the working directory")?;
    for candidate in config_candidate_paths(&working_dir) {
        if candidate.is_file() {
            debug!("Using configuration file {}", candidate.display());
            return PrefixConfig::load_from_file(&candidate);
        }
    }

    debug!("No configuration file found; using built-in defaults.");
    PrefixConfig::load_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_file_is_searched_first() {
        let dir = tempdir().unwrap();
        let candidates = config_candidate_paths(dir.path());
        assert_eq!(candidates[0], dir.path().join(LOCAL_CONFIG_FILE));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "prefix: \"ui-\"\n").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().prefix, "ui-");
    }
}
