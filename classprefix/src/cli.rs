//! This file defines the command-line interface (CLI) for the classprefix application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "classprefix",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Add or strip a prefix on class names in JSX/TSX source",
    long_about = "classprefix rewrites class-name tokens in JSX-like source. It finds className attributes (and any attributes matched by your configured patterns), both as quoted strings and as {...} expressions, and adds or removes a prefix on every class token while leaving the rest of the file byte-for-byte unchanged.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress informational messages and the summary.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `classprefix` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Adds the prefix to every class token that lacks it.
    #[command(about = "Add the prefix to every class token that lacks it.")]
    Add(RewriteCommand),

    /// Strips the prefix from every class token that has it.
    #[command(about = "Strip the prefix from every class token that has it.")]
    Remove(RewriteCommand),
}

/// Arguments shared by `add` and `remove`.
#[derive(Parser, Debug, Clone, Default)]
pub struct RewriteCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write the result to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", conflicts_with = "in_place", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Rewrite the input file in place.
    #[arg(long = "in-place", requires = "input_file", help = "Write the result back to the input file.")]
    pub in_place: bool,

    /// Path to a configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "CLASSPREFIX_CONFIG", help = "Path to a configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Overrides the configured prefix.
    #[arg(long = "prefix", value_name = "PREFIX", help = "Prefix to add or remove (overrides the configuration).")]
    pub prefix: Option<String>,

    /// Extra class names never prefixed (comma-separated).
    #[arg(long = "skip", value_delimiter = ',', help = "Class names never prefixed when adding (comma-separated).")]
    pub skip: Vec<String>,

    /// Use the configured regex attribute patterns instead of wildcards.
    #[arg(long = "use-regex", help = "Match attributes with the configured regex patterns instead of wildcards.")]
    pub use_regex: bool,

    /// Show a unified diff instead of the rewritten buffer.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes instead of the rewritten buffer.")]
    pub diff: bool,

    /// Suppress the rewrite summary.
    #[arg(long = "no-summary", help = "Suppress the rewrite summary.")]
    pub no_summary: bool,

    /// Accept inputs whose extension is not a supported source type.
    #[arg(long, help = "Process the input even if its extension is not .js/.jsx/.ts/.tsx/.mjs/.cjs/.mdx.")]
    pub force: bool,

    /// Run the configured formatter after a successful edit.
    #[arg(long, help = "Run the configured formatter on the written file after a successful edit.")]
    pub format: bool,

    /// Exit with a non-zero code if the input would change; only the JSON summary is written.
    #[arg(long, conflicts_with_all = ["output", "in_place", "diff"], help = "Exit with code 1 if the input would be rewritten. Only the JSON summary is written.")]
    pub check: bool,

    /// Export the rewrite summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the rewrite summary to a JSON file.")]
    pub json_file: Option<PathBuf>,
}
