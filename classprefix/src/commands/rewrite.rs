//! `add` / `remove` command implementation.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use classprefix_core::{
    ConfigOverrides, Direction, PrefixEngine, RewriteEngine, RewriteOutcome, RewriteReport,
};

use crate::cli::RewriteCommand;
use crate::ui::{diff_viewer, output_format, rewrite_summary};
use crate::utils::{config_discovery, file_gate, formatter};

/// Options for the `run_rewrite` API.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub direction: Direction,
    pub input: String,
    /// Destination file; stdout when `None`.
    pub output_path: Option<PathBuf>,
    /// `output_path` is the input file itself.
    pub in_place: bool,
    pub diff: bool,
    pub check: bool,
    pub no_summary: bool,
    pub quiet: bool,
    pub format: bool,
    pub json_file: Option<PathBuf>,
}

/// How a run ended. `CheckFailed` maps to a non-zero exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Rewritten,
    Unchanged,
    CheckFailed,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Resolves configuration and input for `cmd`, then runs the rewrite.
pub fn run_rewrite_command(cmd: &RewriteCommand, direction: Direction, quiet: bool) -> Result<RunStatus> {
    let overrides = ConfigOverrides {
        prefix: cmd.prefix.clone(),
        extra_skip_classes: cmd.skip.clone(),
        use_regex: cmd.use_regex.then_some(true),
        format_after_edit: None,
    };
    let config = config_discovery::load_config(cmd.config.as_deref())?.with_overrides(&overrides);

    let input = match &cmd.input_file {
        Some(path) => {
            file_gate::ensure_supported(path, cmd.force)?;
            fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("Failed to read from stdin")?;
            buffer
        }
    };

    let output_path = if cmd.in_place { cmd.input_file.clone() } else { cmd.output.clone() };

    let engine = PrefixEngine::new(config).context("Failed to initialize the rewrite engine")?;
    let opts = RewriteOptions {
        direction,
        input,
        output_path,
        in_place: cmd.in_place,
        diff: cmd.diff,
        check: cmd.check,
        no_summary: cmd.no_summary,
        quiet,
        format: cmd.format,
        json_file: cmd.json_file.clone(),
    };

    run_rewrite(&engine, &opts)
}

/// The main operation runner for the classprefix CLI.
pub fn run_rewrite(engine: &dyn RewriteEngine, opts: &RewriteOptions) -> Result<RunStatus> {
    info!("Starting {:?} run with prefix '{}'.", opts.direction, engine.config().prefix);

    let report = engine.rewrite(&opts.input, opts.direction);
    for warning in &report.warnings {
        warn_msg(warning.to_string());
    }

    if opts.check {
        handle_json_summary(&report, opts)?;
        return Ok(handle_check(&report, opts));
    }

    let rewritten = match &report.outcome {
        RewriteOutcome::Rewritten(text) => text.as_str(),
        RewriteOutcome::Unchanged => {
            if !opts.quiet {
                info_msg("No class names found to update.");
            }
            // The input is passed through unchanged; only an in-place edit is skipped.
            match &opts.output_path {
                Some(path) if !opts.in_place => write_output_file(path, &opts.input)?,
                Some(_) => debug!("Input file already up to date; not rewriting it."),
                None if !opts.diff => write_stdout(&opts.input)?,
                None => {}
            }
            handle_json_summary(&report, opts)?;
            return Ok(RunStatus::Unchanged);
        }
    };

    debug!(
        "Content rewritten. Original length: {}, rewritten length: {}",
        opts.input.len(),
        rewritten.len()
    );

    handle_primary_output(opts, rewritten)?;
    handle_rewrite_summary(&report, opts)?;
    handle_json_summary(&report, opts)?;
    handle_formatter(engine, opts);

    info!("{:?} run completed.", opts.direction);
    Ok(RunStatus::Rewritten)
}

fn handle_check(report: &RewriteReport, opts: &RewriteOptions) -> RunStatus {
    if report.is_changed() {
        if !opts.quiet {
            info_msg(format!(
                "{} class token(s) would be rewritten.",
                report.summary.tokens_changed
            ));
        }
        RunStatus::CheckFailed
    } else {
        RunStatus::Unchanged
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write!(writer, "{}", text)?;
    writer.flush()?;
    Ok(())
}

fn write_output_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write output file: {}", path.display()))
}

fn handle_primary_output(opts: &RewriteOptions, rewritten: &str) -> Result<()> {
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing rewritten content to file: {}", path.display()));
        }
        write_output_file(path, rewritten)?;
    }

    if opts.diff {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        diff_viewer::print_diff(&opts.input, rewritten, &mut writer, supports_color)?;
    } else if opts.output_path.is_none() {
        write_stdout(rewritten)?;
    }
    Ok(())
}

fn handle_rewrite_summary(report: &RewriteReport, opts: &RewriteOptions) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        let supports_color = io::stderr().is_terminal();
        rewrite_summary::print_summary(&report.summary, opts.direction, &mut io::stderr(), supports_color)?;
    }
    Ok(())
}

fn handle_json_summary(report: &RewriteReport, opts: &RewriteOptions) -> Result<()> {
    if let Some(path) = &opts.json_file {
        let json = serde_json::to_string_pretty(&report.summary).context("Failed to serialize rewrite summary")?;
        fs::write(path, json).with_context(|| format!("Failed to write JSON summary: {}", path.display()))?;
    }
    Ok(())
}

fn handle_formatter(engine: &dyn RewriteEngine, opts: &RewriteOptions) {
    let config = engine.config();
    if !(opts.format || config.format_after_edit) {
        return;
    }
    let Some(path) = &opts.output_path else {
        debug!("Formatting requested but output went to stdout; skipping formatter.");
        return;
    };
    match &config.formatter {
        Some(command) => {
            if let Err(e) = formatter::run_formatter(command, path) {
                warn_msg(format!("Formatter failed: {:#}", e));
            }
        }
        None => warn_msg("Formatting requested but no `formatter` is configured."),
    }
}
