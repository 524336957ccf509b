// classprefix-core/src/lib.rs
//! # classprefix Core Library
//!
//! `classprefix-core` rewrites class-name tokens in JSX-like source text. Given a buffer,
//! it finds attribute values holding whitespace-separated class tokens and adds or strips
//! a configured prefix on each token, leaving every other byte untouched.
//!
//! The library works on raw text and never parses the host language. Attribute values
//! are located with regexes built from the configuration; expression values (`{...}`)
//! are walked with a small quote-aware scanner that treats template literals as opaque.
//!
//! ## Modules
//!
//! * `config`: [`PrefixConfig`], YAML loading, validation and command-line overrides.
//! * `tokens`: The per-class-list add/remove transformation.
//! * `scanner`: Brace matching and quoted-string discovery inside expression values.
//! * `matchers`: Compiles attribute-name patterns (fixed, wildcard, regex) into one alternation.
//! * `engine`: The `RewriteEngine` trait hosts program against.
//! * `engines`: The concrete `PrefixEngine`.
//! * `rewrite_report`: Outcome and summary types returned by a run.
//! * `headless`: One-shot `add_prefix` / `remove_prefix` helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use classprefix_core::{add_prefix, remove_prefix, PrefixConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = PrefixConfig::default();
//!     let input = r#"<div className={twMerge('header', cond && "hidden")}></div>"#;
//!
//!     let prefixed = add_prefix(input, &config)?;
//!     assert_eq!(prefixed, r#"<div className={twMerge('app-header', cond && "app-hidden")}></div>"#);
//!     assert_eq!(remove_prefix(&prefixed, &config)?, input);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Only an invalid configuration is an error ([`PrefixError`]). Malformed regions of a
//! buffer are left unchanged, and invalid user attribute patterns are dropped and
//! reported as [`PatternWarning`]s.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod matchers;
pub mod rewrite_report;
pub mod scanner;
pub mod tokens;

/// Re-exports the configuration types.
pub use config::{ConfigOverrides, PrefixConfig, DEFAULT_PREFIX, DEFAULT_REGEX_PATTERN, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::PrefixError;

/// Re-exports the engine trait and its implementation.
pub use engine::RewriteEngine;
pub use engines::prefix_engine::PrefixEngine;

pub use matchers::{build_attribute_matcher, AttributeMatcher, MatcherDefaults, PatternWarning};
pub use rewrite_report::{RewriteOutcome, RewriteReport, RewriteSummary};
pub use scanner::{matching_close, rewrite_quoted_strings, QuotedStrings, Segment};
pub use tokens::{rewrite_class_list, Direction};

/// Re-exports the one-shot entry points.
pub use headless::{add_prefix, remove_prefix};
