//! Summary table printed after a successful rewrite.

use anyhow::Result;
use classprefix_core::{Direction, RewriteSummary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::Write;

/// Builds the summary table for `summary`.
pub fn build_summary_table(summary: &RewriteSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Class values", "Count"]);

    let rows = [
        ("Direct values rewritten", summary.direct_values),
        ("Expression values rewritten", summary.expression_values),
        ("Quoted strings scanned", summary.strings_visited),
        ("Unbalanced expressions skipped", summary.unbalanced_skipped),
        ("Tokens changed", summary.tokens_changed),
    ];
    for (label, count) in rows {
        table.add_row(vec![label.to_string(), count.to_string()]);
    }
    table
}

pub fn print_summary<W: Write + ?Sized>(
    summary: &RewriteSummary,
    direction: Direction,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    let title = match direction {
        Direction::Add => "Prefix added",
        Direction::Remove => "Prefix removed",
    };
    if supports_color {
        writeln!(writer, "{}", title.green().bold())?;
    } else {
        writeln!(writer, "{}", title)?;
    }
    writeln!(writer, "{}", build_summary_table(summary))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_count() {
        let summary = RewriteSummary {
            direct_values: 2,
            expression_values: 1,
            strings_visited: 3,
            unbalanced_skipped: 0,
            tokens_changed: 7,
        };
        let rendered = build_summary_table(&summary).to_string();
        assert!(rendered.contains("Direct values rewritten"));
        assert!(rendered.contains("Tokens changed"));
        assert!(rendered.contains('7'));
    }
}
