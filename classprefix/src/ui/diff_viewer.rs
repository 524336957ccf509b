//! Unified diff of a rewrite.
//!
//! Highlights exactly which lines lost (red) or gained (green) a prefix.

use anyhow::Result;
use diffy::{Line as DiffLine, create_patch};
use owo_colors::OwoColorize;
use std::io::Write;

/// Writes a unified diff between `original` and `rewritten`.
pub fn print_diff<W: Write + ?Sized>(
    original: &str,
    rewritten: &str,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    let patch = create_patch(original, rewritten);

    let header = "--- original\n+++ rewritten";
    if supports_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        let range = format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len());
        if supports_color {
            writeln!(writer, "{}", range.cyan())?;
        } else {
            writeln!(writer, "{}", range)?;
        }

        for line in hunk.lines() {
            let (marker, text) = match line {
                DiffLine::Delete(s) => ('-', *s),
                DiffLine::Insert(s) => ('+', *s),
                DiffLine::Context(s) => (' ', *s),
            };
            let text = text.strip_suffix('\n').unwrap_or(text);
            match (marker, supports_color) {
                ('-', true) => writeln!(writer, "{}", format!("-{text}").red())?,
                ('+', true) => writeln!(writer, "{}", format!("+{text}").green())?,
                _ => writeln!(writer, "{marker}{text}")?,
            }
        }
    }

    Ok(())
}
