// src/cli.rs

use crate::filter::MarkerStyle;
use clap::Parser;

/// Strips development-only code blocks from source files.
///
/// Every line between a begin marker (`// STUB` by default) and an end marker
/// (`// ENDSTUB`) is removed, together with the marker lines themselves. The
/// stubbed files are written beneath the destination directory, mirroring
/// each input's path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Files or directories to stub. Directories are walked recursively.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Directory to write the stubbed files to.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub dest: String,

    // --- Marker Options ---
    /// Built-in marker style.
    #[arg(short = 's', long, value_enum, default_value_t = MarkerStyle::Slash)]
    pub style: MarkerStyle,

    /// Regular expression matching a begin marker line (overrides --style).
    #[arg(short = 'b', long, value_name = "REGEX")]
    pub begin: Option<String>,

    /// Regular expression matching an end marker line (overrides --style).
    #[arg(short = 'e', long, value_name = "REGEX")]
    pub end: Option<String>,

    /// Match --begin and --end case-insensitively.
    #[arg(short = 'i', long, action = clap::ArgAction::SetTrue)]
    pub ignore_case: bool,

    // --- Discovery Options ---
    /// Do not recurse into subdirectories of directory inputs.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_recursive: bool,

    // --- Execution Control ---
    /// Print the files that would be written without writing them.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Print a summary of stubbed files and line counts.
    #[arg(short = 'S', long, action = clap::ArgAction::SetTrue)]
    pub summary: bool,
}
