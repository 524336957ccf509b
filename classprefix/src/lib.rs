// classprefix/src/lib.rs
//! # classprefix CLI
//!
//! The host side of classprefix: argument parsing, configuration discovery, the
//! file-type gate, terminal output and the optional formatter hook. All rewriting
//! is delegated to `classprefix-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::rewrite::{run_rewrite, run_rewrite_command, RewriteOptions, RunStatus};
