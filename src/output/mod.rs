//! Writes the human-readable reports printed after a run.

pub mod dry_run;
pub mod summary;

use std::path::Path;

/// Formats a path for display, always using forward slashes.
pub(crate) fn format_path_for_display(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
