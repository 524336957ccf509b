// classprefix-core/src/rewrite_report.rs
//! Result types returned by a rewrite run, plus debug logging helpers.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::matchers::PatternWarning;

/// Whether a run changed the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The new buffer. Always differs from the input.
    Rewritten(String),
    /// No class list was found, or every one was already in the requested form.
    Unchanged,
}

/// Counts gathered during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteSummary {
    /// Direct `name="..."` values whose text changed.
    pub direct_values: usize,
    /// `name={...}` blocks whose body changed.
    pub expression_values: usize,
    /// Quoted strings handed to the token processor inside expression blocks.
    pub strings_visited: usize,
    /// `name={` openers left alone because no matching `}` was found.
    pub unbalanced_skipped: usize,
    /// Individual class tokens that gained or lost the prefix.
    pub tokens_changed: usize,
}

/// Everything a host needs after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub outcome: RewriteOutcome,
    pub summary: RewriteSummary,
    /// Attribute patterns dropped while building the matcher.
    pub warnings: Vec<PatternWarning>,
}

impl RewriteReport {
    pub fn is_changed(&self) -> bool {
        matches!(self.outcome, RewriteOutcome::Rewritten(_))
    }

    /// The resulting buffer, falling back to a copy of `original` when unchanged.
    pub fn into_text(self, original: &str) -> String {
        match self.outcome {
            RewriteOutcome::Rewritten(text) => text,
            RewriteOutcome::Unchanged => original.to_string(),
        }
    }
}

pub(crate) fn log_class_list_debug(kind: &str, before: &str, after: &str) {
    if before != after {
        debug!("{} class list rewritten: '{}' -> '{}'", kind, before, after);
    }
}
