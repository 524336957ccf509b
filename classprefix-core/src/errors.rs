//! errors.rs - Custom error types for the classprefix-core library.
//!
//! Only configuration problems are errors. Everything that can go wrong while
//! scanning a buffer (unbalanced braces, unterminated strings, bad user regex
//! fragments) degrades to "leave that region unchanged" and never reaches here.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `classprefix-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PrefixError {
    #[error("Invalid prefix '{0}': a prefix must be non-empty and contain no whitespace")]
    InvalidPrefix(String),

    #[error("Failed to compile attribute pattern '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("Attribute pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),
}
