//! Configuration management for `classprefix-core`.
//!
//! This module defines [`PrefixConfig`], the immutable value every entry point of the
//! engine receives. It handles YAML (de)serialization, loading the embedded defaults,
//! validation, and layering command-line overrides on top of a loaded file.
//!
//! The engine never reads configuration from anywhere else: callers load a
//! `PrefixConfig` once and pass it in explicitly.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::PrefixError;

/// Maximum allowed length for a single attribute pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Prefix applied when no configuration overrides it.
pub const DEFAULT_PREFIX: &str = "app-";

/// Regex fragment offered by default in regex mode.
pub const DEFAULT_REGEX_PATTERN: &str = r"\w+ClassName";

/// Settings controlling which attributes are rewritten and how.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PrefixConfig {
    /// The prefix added to (or stripped from) every class token.
    pub prefix: String,
    /// Tokens left untouched when adding. Exact matches only.
    pub skip_classes: Vec<String>,
    /// Wildcard attribute-name templates, `*` standing for any run of `[\w$-]`.
    pub custom_patterns: Vec<String>,
    /// When true, `custom_regex_patterns` replaces `custom_patterns`.
    pub use_regex: bool,
    /// Raw regex fragments matching attribute names.
    pub custom_regex_patterns: Vec<String>,
    /// Ask the host to reformat the document after a successful edit.
    pub format_after_edit: bool,
    /// Formatter command line used by the host, e.g. `prettier --write`.
    /// The edited file path is appended as the last argument.
    pub formatter: Option<String>,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            skip_classes: Vec::new(),
            custom_patterns: vec!["*ClassName".to_string()],
            use_regex: false,
            custom_regex_patterns: vec![DEFAULT_REGEX_PATTERN.to_string()],
            format_after_edit: false,
            formatter: None,
        }
    }
}

/// Values supplied on the command line that take precedence over a loaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub prefix: Option<String>,
    /// Appended to the configured skip list, not replacing it.
    pub extra_skip_classes: Vec<String>,
    pub use_regex: Option<bool>,
    pub format_after_edit: Option<bool>,
}

impl PrefixConfig {
    /// Loads a configuration from a YAML file. Keys missing from the file keep
    /// their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: PrefixConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!(
            "Loaded configuration from {}: prefix='{}', {} skip classes, use_regex={}",
            path.display(),
            config.prefix,
            config.skip_classes.len(),
            config.use_regex
        );
        Ok(config)
    }

    /// Loads the built-in defaults from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: PrefixConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), PrefixError> {
        if self.prefix.is_empty() || self.prefix.chars().any(char::is_whitespace) {
            return Err(PrefixError::InvalidPrefix(self.prefix.clone()));
        }

        for skipped in &self.skip_classes {
            if skipped.chars().any(char::is_whitespace) {
                warn!(
                    "Skip entry '{}' contains whitespace and can never match a single class token.",
                    skipped
                );
            }
        }

        if self.use_regex && self.custom_regex_patterns.is_empty() {
            debug!("Regex mode enabled with no patterns; only the default attribute will match.");
        }

        Ok(())
    }

    /// The skip list as a set for exact-match lookups.
    pub fn skip_set(&self) -> HashSet<String> {
        self.skip_classes.iter().cloned().collect()
    }

    /// Layers command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(prefix) = &overrides.prefix {
            debug!("Overriding prefix with '{}'", prefix);
            self.prefix = prefix.clone();
        }

        for class in &overrides.extra_skip_classes {
            if !self.skip_classes.contains(class) {
                self.skip_classes.push(class.clone());
            }
        }

        if let Some(use_regex) = overrides.use_regex {
            self.use_regex = use_regex;
        }

        if let Some(format) = overrides.format_after_edit {
            self.format_after_edit = format;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let loaded = PrefixConfig::load_default().unwrap();
        assert_eq!(loaded, PrefixConfig::default());
    }

    #[test]
    fn rejects_empty_and_whitespace_prefixes() {
        let mut config = PrefixConfig::default();
        config.prefix = String::new();
        assert!(matches!(config.validate(), Err(PrefixError::InvalidPrefix(_))));

        config.prefix = "tw -".to_string();
        assert!(matches!(config.validate(), Err(PrefixError::InvalidPrefix(_))));
    }

    #[test]
    fn overrides_extend_skip_list_without_duplicates() {
        let mut config = PrefixConfig::default();
        config.skip_classes = vec!["hidden".to_string()];
        let overrides = ConfigOverrides {
            prefix: Some("tw-".to_string()),
            extra_skip_classes: vec!["hidden".to_string(), "sr-only".to_string()],
            use_regex: Some(true),
            format_after_edit: None,
        };

        let merged = config.with_overrides(&overrides);
        assert_eq!(merged.prefix, "tw-");
        assert_eq!(merged.skip_classes, vec!["hidden", "sr-only"]);
        assert!(merged.use_regex);
        assert!(!merged.format_after_edit);
    }
}
