// src/output/summary.rs

use crate::constants;
use crate::core_types::StubReport;
use crate::output::format_path_for_display;
use log::debug;
use std::io::{self, Write};

/// Writes the summary section: one line per stubbed file with its line counts.
pub fn write_summary(writer: &mut dyn Write, reports: &[StubReport]) -> io::Result<()> {
    debug!("Writing summary for {} files...", reports.len());
    writeln!(writer, "{}", constants::SUMMARY_SEPARATOR)?;
    writeln!(
        writer,
        "{}: ({})",
        constants::SUMMARY_HEADER_PREFIX,
        reports.len()
    )?;

    for report in reports {
        let stats = &report.stats;
        write!(
            writer,
            "- {} -> {} (kept {}/{} lines, {} block(s) removed",
            format_path_for_display(&report.source),
            format_path_for_display(&report.destination),
            stats.lines_emitted,
            stats.lines_read,
            stats.blocks_opened
        )?;
        if stats.unterminated {
            write!(writer, ", unterminated")?;
        }
        writeln!(writer, ")")?;
    }
    writer.flush()
}
