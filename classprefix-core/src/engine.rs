// classprefix-core/src/engine.rs
//! Defines the `RewriteEngine` trait.
//!
//! The trait decouples hosts (the CLI, editor integrations, tests) from the
//! concrete engine, so a host only ever holds a `&dyn RewriteEngine` built from
//! an explicit configuration.
//!
//! License: MIT OR APACHE 2.0

use crate::config::PrefixConfig;
use crate::matchers::PatternWarning;
use crate::rewrite_report::RewriteReport;
use crate::tokens::Direction;

/// A class-name rewriting engine.
pub trait RewriteEngine: Send + Sync {
    /// Rewrites every matched class list in `content`.
    ///
    /// Never fails: malformed regions are left unchanged. When nothing changes
    /// the report's outcome is `RewriteOutcome::Unchanged`.
    fn rewrite(&self, content: &str, direction: Direction) -> RewriteReport;

    /// Returns the configuration the engine was built from.
    fn config(&self) -> &PrefixConfig;

    /// Returns the problems found while compiling attribute patterns.
    fn pattern_warnings(&self) -> &[PatternWarning];
}
