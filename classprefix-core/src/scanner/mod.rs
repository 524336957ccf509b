// classprefix-core/src/scanner/mod.rs
//! Character-level scanners used inside expression values.
//!
//! Neither scanner parses the host language. Both walk the raw bytes with a
//! small explicit state machine that knows about single quotes, double quotes
//! and template literals, which is enough to find class strings in partially
//! written code.
//!
//! Every delimiter the scanners care about is ASCII, so walking bytes is safe on
//! UTF-8 input: continuation bytes of multi-byte characters never compare equal
//! to a delimiter, and every slice boundary produced lands on an ASCII byte.
//!
//! Scope limit: `${...}` interpolations inside a template literal are not
//! re-entered. A class string nested inside an interpolation is left alone.

pub mod braces;
pub mod quoted;

pub use braces::matching_close;
pub use quoted::{rewrite_quoted_strings, QuotedStrings, Segment};

/// Lexical state of the scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Normal,
    InSingle,
    InDouble,
    InTemplate,
}

impl ScanState {
    /// The state entered when `byte` is seen in `Normal` state, if any.
    pub(crate) fn opened_by(byte: u8) -> Option<Self> {
        match byte {
            b'\'' => Some(ScanState::InSingle),
            b'"' => Some(ScanState::InDouble),
            b'`' => Some(ScanState::InTemplate),
            _ => None,
        }
    }

    /// The byte that ends this state.
    pub(crate) fn closing_byte(self) -> Option<u8> {
        match self {
            ScanState::Normal => None,
            ScanState::InSingle => Some(b'\''),
            ScanState::InDouble => Some(b'"'),
            ScanState::InTemplate => Some(b'`'),
        }
    }
}
