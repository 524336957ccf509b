//! Token-level prefix transformation for a single class list.

use std::collections::HashSet;

/// Which way a run rewrites class tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Prepend the prefix to every token that lacks it.
    Add,
    /// Strip one leading prefix from every token that has it.
    Remove,
}

impl Direction {
    pub fn is_adding(self) -> bool {
        matches!(self, Direction::Add)
    }
}

/// Rewrites one whitespace-separated class list.
///
/// Tokens are rejoined with a single space, so irregular whitespace is
/// normalized even when no token changes. `skip` is only consulted when adding.
pub fn rewrite_class_list(
    list: &str,
    prefix: &str,
    skip: &HashSet<String>,
    direction: Direction,
) -> String {
    list.split_whitespace()
        .map(|token| rewrite_token(token, prefix, skip, direction))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rewrite_token(token: &str, prefix: &str, skip: &HashSet<String>, direction: Direction) -> String {
    match direction {
        Direction::Add => {
            if token.starts_with(prefix) || skip.contains(token) {
                token.to_string()
            } else {
                format!("{prefix}{token}")
            }
        }
        Direction::Remove => token.strip_prefix(prefix).unwrap_or(token).to_string(),
    }
}

/// Counts tokens whose text differs between two class lists of equal length.
pub(crate) fn changed_tokens(before: &str, after: &str) -> usize {
    before
        .split_whitespace()
        .zip(after.split_whitespace())
        .filter(|(a, b)| a != b)
        .count()
}
