//! Expands the configured inputs into a list of files to stub.
use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::StubJob;
use crate::errors::{Error, Result};
use crate::processing::mirror_path;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Turns every input into one or more [`StubJob`]s.
///
/// File inputs are taken as given. Directory inputs are walked (recursively
/// unless `config.recursive` is off) in file-name order. Anything beneath the
/// destination directory is skipped so a re-run never stubs its own output.
/// A file reachable through several inputs is stubbed once.
///
/// # Errors
/// Returns [`Error::Discovery`] if an input or a walked entry cannot be
/// accessed, [`Error::SourceEscapesDestination`] for a source that cannot be
/// mirrored, and [`Error::Interrupted`] once `token` is cancelled.
///
/// # Examples
///
/// ```
/// use stubbify::{discover, CancellationToken, ConfigBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// std::fs::write(dir.path().join("a.js"), "a();\n")?;
///
/// let config = ConfigBuilder::new()
///     .input(dir.path().to_str().unwrap())
///     .destination(dir.path().join("out").to_str().unwrap())
///     .build()?;
/// let jobs = discover(&config, &CancellationToken::new())?;
///
/// assert_eq!(jobs.len(), 1);
/// assert!(jobs[0].source.ends_with("a.js"));
/// # Ok(())
/// # }
/// ```
pub fn discover_jobs(config: &Config, token: &CancellationToken) -> Result<Vec<StubJob>> {
    let skip_dir = fs::canonicalize(&config.destination).ok();
    let mut jobs = Vec::new();

    for input in &config.inputs {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let metadata = fs::metadata(input).map_err(|e| discovery_error(e, input))?;
        if metadata.is_dir() {
            for source in walk_directory(input, config.recursive, skip_dir.as_deref(), token)? {
                jobs.push(make_job(source, &config.destination)?);
            }
        } else {
            jobs.push(make_job(input.clone(), &config.destination)?);
        }
    }

    jobs.sort();
    jobs.dedup();
    debug!("Discovery complete. {} file(s) to stub.", jobs.len());
    Ok(jobs)
}

fn make_job(source: PathBuf, destination_root: &Path) -> Result<StubJob> {
    let destination = mirror_path(destination_root, &source)?;
    Ok(StubJob {
        source,
        destination,
    })
}

fn walk_directory(
    root: &Path,
    recursive: bool,
    skip_dir: Option<&Path>,
    token: &CancellationToken,
) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(root).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    let entries = walker.into_iter().filter_entry(|entry| {
        let is_output_dir = entry.file_type().is_dir()
            && skip_dir.is_some_and(|skip| {
                fs::canonicalize(entry.path()).is_ok_and(|path| path == skip)
            });
        if is_output_dir {
            debug!("Skipping destination directory: {}", entry.path().display());
        }
        !is_output_dir
    });

    for entry in entries {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            discovery_error(io::Error::from(e), path)
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn discovery_error<P: AsRef<Path>>(source: io::Error, path: P) -> Error {
    Error::Discovery {
        path: path.as_ref().to_path_buf(),
        source,
    }
}
