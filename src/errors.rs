//! Defines library error types.
//!
//! `Error` categorizes everything that can go wrong while stubbing files,
//! carrying the offending path alongside the underlying `std::io::Error` so the
//! caller can tell a missing source apart from an unwritable destination.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A specialized `Result` type for `stubbify` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the library.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// The source file could not be read.
    #[error("Failed to read source file '{}': {source}", .path.display())]
    ReadSource {
        /// The source path.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An intermediate destination directory could not be created.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filtered output could not be written.
    #[error("Failed to write output file '{}': {source}", .path.display())]
    WriteOutput {
        /// The destination file path.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input path could not be walked during discovery.
    #[error("Failed to access input path '{}': {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source path climbs above the destination root via `..`.
    #[error("Source path '{}' escapes the destination directory", .path.display())]
    SourceEscapesDestination { path: PathBuf },

    /// The dry-run listing or summary could not be written.
    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),

    // --- Configuration Errors ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// No input files were found.
    #[error("No files found matching the specified inputs.")]
    NoFilesFound,
}

/// Errors arising from invalid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A begin or end marker pattern failed to compile.
    #[error("Invalid {option} pattern '{pattern}': {source}")]
    InvalidPattern {
        option: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A required option was not supplied.
    #[error("Missing required option: {0}")]
    Missing(String),

    /// An option was given a value it cannot accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },
}

/// Wraps a read failure with its path.
pub(crate) fn read_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::ReadSource {
        path: path.as_ref().to_path_buf(),
        source,
    }
}

/// Wraps a directory-creation failure with its path.
pub(crate) fn create_dir_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::CreateDir {
        path: path.as_ref().to_path_buf(),
        source,
    }
}

/// Wraps a write failure with its path.
pub(crate) fn write_error<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::WriteOutput {
        path: path.as_ref().to_path_buf(),
        source,
    }
}
