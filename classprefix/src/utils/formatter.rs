//! Post-edit reformat hook.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::path::Path;
use std::process::Command;

/// Runs `command_line` (split on whitespace) with `path` appended.
pub fn run_formatter(command_line: &str, path: &Path) -> Result<()> {
    let mut parts = command_line.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("The configured formatter command is empty.");
    };

    debug!("Running formatter '{}' on {}", command_line, path.display());
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to start formatter '{}'", program))?;

    if !status.success() {
        bail!("Formatter '{}' exited with {}", command_line, status);
    }

    info!("Formatted {}", path.display());
    Ok(())
}
