// src/output/dry_run.rs

use crate::core_types::StubJob;
use crate::output::format_path_for_display;
use log::debug;
use std::io::{self, Write};

/// Writes the output for a dry run (-D): every file that would be written.
pub fn write_dry_run_output(writer: &mut dyn Write, jobs: &[StubJob]) -> io::Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "--- Dry Run: Files that would be stubbed ---")?;

    for job in jobs {
        writeln!(
            writer,
            "- {} -> {}",
            format_path_for_display(&job.source),
            format_path_for_display(&job.destination)
        )?;
    }

    writeln!(writer, "--- End Dry Run ---")?;
    writer.flush()
}
