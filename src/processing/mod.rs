//! Handles the processing stage of the `stubbify` pipeline.
//!
//! Each file is read in full, run through its own [`LineFilter`](crate::filter::LineFilter)
//! and written to its mirrored path beneath the destination root. Files share
//! no state, so a batch is processed in parallel with Rayon.

use crate::cancellation::CancellationToken;
use crate::core_types::{StubJob, StubReport};
use crate::errors::{create_dir_error, write_error, Error, Result};
use crate::filter::Markers;
use crate::stream::filter_bytes;
use log::debug;
use rayon::prelude::*;
use std::fs;
use std::path::{Component, Path, PathBuf};

mod content_reader;

use content_reader::read_source;

/// Computes where `source` lands beneath `destination_root`.
///
/// The source's full path structure is kept: root and drive prefixes and `.`
/// components are dropped, so an absolute source is mirrored beneath the root
/// rather than replacing it. `..` removes the previously mirrored component.
///
/// # Errors
/// Returns [`Error::SourceEscapesDestination`] if `..` would climb above the root.
///
/// # Examples
/// ```
/// use stubbify::processing::mirror_path;
/// use std::path::Path;
///
/// let dest = mirror_path(Path::new("tmp"), Path::new("./test/fixtures/example.js")).unwrap();
/// assert_eq!(dest, Path::new("tmp/test/fixtures/example.js"));
///
/// let dest = mirror_path(Path::new("out"), Path::new("/abs/file.js")).unwrap();
/// assert_eq!(dest, Path::new("out/abs/file.js"));
/// ```
pub fn mirror_path(destination_root: &Path, source: &Path) -> Result<PathBuf> {
    let mut relative = PathBuf::new();
    for component in source.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if !relative.pop() {
                    return Err(Error::SourceEscapesDestination {
                        path: source.to_path_buf(),
                    });
                }
            }
            Component::Normal(part) => relative.push(part),
        }
    }
    Ok(destination_root.join(relative))
}

/// Stubs one file into its mirrored location under `destination_root`.
///
/// Reads `source` in full, drops every stub block, creates any missing
/// parent directories and writes the result, overwriting an existing file.
///
/// # Errors
/// Each failure is reported once, without retry:
/// - [`Error::ReadSource`] if the source cannot be read (nothing is created).
/// - [`Error::CreateDir`] if a parent directory cannot be created.
/// - [`Error::WriteOutput`] if the destination cannot be written. Directories
///   created before the failure are left in place.
pub fn stub_file(source: &Path, destination_root: &Path, markers: &Markers) -> Result<StubReport> {
    let destination = mirror_path(destination_root, source)?;
    stub_to(source, &destination, markers)
}

/// Stubs `source` into exactly `destination`.
pub(crate) fn stub_to(source: &Path, destination: &Path, markers: &Markers) -> Result<StubReport> {
    debug!("Stubbing {} -> {}", source.display(), destination.display());

    let content = read_source(source)?;
    let (output, stats) = filter_bytes(&content, markers);

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| create_dir_error(e, parent))?;
        }
    }
    fs::write(destination, output).map_err(|e| write_error(e, destination))?;

    debug!(
        "Wrote {}: {} of {} line(s) kept, {} block(s) removed",
        destination.display(),
        stats.lines_emitted,
        stats.lines_read,
        stats.blocks_opened
    );
    if stats.unterminated {
        debug!(
            "{}: stub block is never closed; everything after it was removed",
            source.display()
        );
    }

    Ok(StubReport {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        stats,
    })
}

/// Stubs a batch of jobs in parallel, one fresh filter per file.
///
/// Reports come back in job order. The first failure aborts the batch and is
/// returned; files already written stay written.
///
/// # Errors
/// Returns [`Error::Interrupted`] once `token` is cancelled, or the first
/// per-file I/O error.
pub fn stub_files(
    jobs: &[StubJob],
    markers: &Markers,
    token: &CancellationToken,
) -> Result<Vec<StubReport>> {
    jobs.par_iter()
        .map(|job| {
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            stub_to(&job.source, &job.destination, markers)
        })
        .collect()
}
