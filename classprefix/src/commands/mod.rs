//! Command implementations for the classprefix CLI.

pub mod rewrite;
