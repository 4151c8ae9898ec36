//! Defines the core `Config` struct for a stubbing run.
//!
//! A `Config` is produced by [`ConfigBuilder`], either programmatically or from
//! the parsed command line, and is consumed by [`crate::run`].

use crate::filter::Markers;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

/// Settings for one stubbing run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files and directories to stub, as given.
    pub inputs: Vec<PathBuf>,
    /// Directory under which the mirrored output tree is written.
    pub destination: PathBuf,
    /// The begin/end marker pair shared by every file in the run.
    pub markers: Markers,
    /// Whether to recurse into subdirectories of directory inputs.
    pub recursive: bool,
    /// If `true`, list the files that would be written without touching the disk.
    pub dry_run: bool,
    /// Whether to print a per-file summary after the run.
    pub summary: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            inputs: vec![PathBuf::from(".")],
            destination: PathBuf::from("stubbed"),
            markers: Markers::default(),
            recursive: true,
            dry_run: false,
            summary: false,
        }
    }
}
