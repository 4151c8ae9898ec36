//! Defines core data structures passed between the pipeline stages.
//!
//! Discovery produces [`StubJob`]s; processing turns each job into a
//! [`StubReport`].

use crate::filter::FilterStats;
use std::path::PathBuf;

/// One file to stub: where it is read from and where the result goes.
///
/// # Examples
///
/// ```
/// use stubbify::core_types::StubJob;
/// use std::path::PathBuf;
///
/// let job = StubJob {
///     source: PathBuf::from("src/app.js"),
///     destination: PathBuf::from("dist/src/app.js"),
/// };
/// assert!(job.destination.ends_with(&job.source));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StubJob {
    /// The source path, as given or as found while walking an input directory.
    pub source: PathBuf,
    /// The mirrored path beneath the destination root.
    pub destination: PathBuf,
}

/// The outcome of stubbing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubReport {
    /// The file that was read.
    pub source: PathBuf,
    /// The file that was written.
    pub destination: PathBuf,
    /// Line counters from the filter run.
    pub stats: FilterStats,
}
