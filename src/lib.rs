//! `stubbify` is a library and command-line tool that strips development-only
//! blocks from source files.
//!
//! A block starts at a begin-marker line (`// STUB` by default, any case) and
//! ends at an end-marker line (`// ENDSTUB`). Marker lines and everything
//! between them are removed; every other line passes through unchanged. The
//! tool does not parse the host language, it only looks at whole lines.
//!
//! The library is layered:
//! 1.  [`filter`]: the line-by-line state machine ([`filter::LineFilter`]).
//! 2.  [`stream`]: byte-stream adapters that reassemble lines across chunks.
//! 3.  [`processing`]: per-file stubbing into a mirrored destination tree.
//! 4.  [`discover`], [`stub`] and [`run`]: the batch pipeline used by the binary.
//!
//! # Example: Library Usage
//!
//! ```
//! use stubbify::{discover, stub, CancellationToken, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with a file to stub.
//! let temp_dir = tempdir().unwrap();
//! let source = temp_dir.path().join("app.js");
//! fs::write(&source, "start();\n// STUB\nenableDebugPanel();\n// ENDSTUB\n").unwrap();
//!
//! // 2. Create a Config object programmatically using the builder.
//! let out_dir = temp_dir.path().join("dist");
//! let config = ConfigBuilder::new()
//!     .input(source.to_str().unwrap())
//!     .destination(out_dir.to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! // 3. Discover and stub the files.
//! let token = CancellationToken::new();
//! let jobs = discover(&config, &token).unwrap();
//! let reports = stub(&jobs, &config, &token).unwrap();
//!
//! assert_eq!(fs::read_to_string(&reports[0].destination).unwrap(), "start();\n");
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filter;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod signal;
pub mod stream;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{StubJob, StubReport};
pub use filter::{filter_str, FilterState, FilterStats, LineFilter, LinePattern, Markers};
pub use processing::stub_file;

use crate::errors::{Error, Result};
use std::io::Write;

/// Finds every file the configuration asks to stub.
///
/// This is the first stage of the pipeline. Inputs are expanded into jobs
/// pairing each source file with its mirrored destination; nothing is read or
/// written yet.
pub fn discover(config: &Config, token: &CancellationToken) -> Result<Vec<StubJob>> {
    discovery::discover_jobs(config, token)
}

/// Stubs the discovered files.
///
/// This is the second stage of the pipeline. Files are independent and are
/// processed in parallel, each with its own filter.
pub fn stub(
    jobs: &[StubJob],
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<StubReport>> {
    processing::stub_files(jobs, &config.markers, token)
}

/// Executes the complete pipeline: discover, stub, and report.
///
/// In a dry run the planned destinations are written to `writer` and no file
/// is touched. Otherwise files are stubbed, and a summary is written to
/// `writer` if `config.summary` is set.
///
/// # Errors
/// Returns `Err(Error::NoFilesFound)` if the inputs expand to no files. Other
/// errors are propagated from the underlying stages.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    writer: &mut dyn Write,
) -> Result<Vec<StubReport>> {
    let jobs = discover(config, token)?;
    if jobs.is_empty() {
        return Err(Error::NoFilesFound);
    }

    if config.dry_run {
        output::dry_run::write_dry_run_output(writer, &jobs).map_err(Error::Report)?;
        return Ok(Vec::new());
    }

    let reports = stub(&jobs, config, token)?;
    log::info!(
        "Stubbed {} file(s) into {}",
        reports.len(),
        config.destination.display()
    );

    if config.summary {
        output::summary::write_summary(writer, &reports).map_err(Error::Report)?;
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_basic_success() -> anyhow::Result<()> {
        // 1. Setup
        let temp_dir = tempdir()?;
        let src = temp_dir.path().join("src");
        fs::create_dir_all(&src)?;
        fs::write(src.join("a.js"), "a();\n//STUB\nx();\n//ENDSTUB\n")?;
        fs::write(src.join("b.js"), "b();\n")?;
        let out = temp_dir.path().join("out");

        let config = ConfigBuilder::new()
            .input(src.to_str().unwrap())
            .destination(out.to_str().unwrap())
            .build()?;

        // 2. Execute
        let mut stdout = Vec::new();
        let reports = run(&config, &CancellationToken::new(), &mut stdout)?;

        // 3. Assert
        assert_eq!(reports.len(), 2);
        assert_eq!(fs::read_to_string(&reports[0].destination)?, "a();\n");
        assert_eq!(fs::read_to_string(&reports[1].destination)?, "b();\n");
        assert!(stdout.is_empty()); // No summary requested
        Ok(())
    }

    #[test]
    fn test_run_dry_run_writes_nothing() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("a.js");
        fs::write(&source, "a();\n")?;
        let out = temp_dir.path().join("out");

        let config = ConfigBuilder::new()
            .input(source.to_str().unwrap())
            .destination(out.to_str().unwrap())
            .dry_run(true)
            .build()?;

        let mut stdout = Vec::new();
        let reports = run(&config, &CancellationToken::new(), &mut stdout)?;

        assert!(reports.is_empty());
        assert!(!out.exists());
        let listing = String::from_utf8(stdout)?;
        assert!(listing.contains("--- Dry Run: Files that would be stubbed ---"));
        assert!(listing.contains("a.js"));
        Ok(())
    }

    #[test]
    fn test_run_with_summary() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let source = temp_dir.path().join("a.js");
        fs::write(&source, "a();\n//STUB\n")?;

        let config = ConfigBuilder::new()
            .input(source.to_str().unwrap())
            .destination(temp_dir.path().join("out").to_str().unwrap())
            .summary(true)
            .build()?;

        let mut stdout = Vec::new();
        run(&config, &CancellationToken::new(), &mut stdout)?;

        let summary = String::from_utf8(stdout)?;
        assert!(summary.contains("Stubbed Files: (1)"));
        assert!(summary.contains("kept 1/2 lines, 1 block(s) removed, unterminated"));
        Ok(())
    }

    #[test]
    fn test_run_returns_no_files_found_error() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let config = ConfigBuilder::new()
            .input(temp_dir.path().to_str().unwrap())
            .destination(temp_dir.path().join("out").to_str().unwrap())
            .build()?;

        let result = run(&config, &CancellationToken::new(), &mut Vec::new());

        assert!(matches!(result, Err(Error::NoFilesFound)));
        Ok(())
    }

    #[test]
    fn test_run_respects_stop_signal() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("a.js"), "a();\n")?;
        let config = ConfigBuilder::new()
            .input(temp_dir.path().to_str().unwrap())
            .destination(temp_dir.path().join("out").to_str().unwrap())
            .build()?;

        let token = CancellationToken::new();
        token.cancel();
        let result = run(&config, &token, &mut Vec::new());

        assert!(matches!(result, Err(Error::Interrupted)));
        Ok(())
    }
}
