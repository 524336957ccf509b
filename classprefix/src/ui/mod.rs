//! Terminal output: colored messages, diffs and the rewrite summary.

pub mod diff_viewer;
pub mod output_format;
pub mod rewrite_summary;
