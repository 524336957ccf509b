//! Attribute-name matching.
//!
//! This module turns the attribute settings of a `PrefixConfig` (the fixed default
//! name, wildcard templates, raw regex fragments) into compiled regexes the engine
//! uses to find `name="..."` and `name={...}` occurrences.

pub mod compiler;

pub use compiler::{
    build_attribute_matcher, wildcard_to_fragment, AttributeMatcher, MatcherDefaults,
    PatternWarning, DEFAULT_ATTRIBUTE, DEFAULT_WILDCARD_PATTERNS,
};
