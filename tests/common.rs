// tests/common.rs

use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn stubbify_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stubbify"))
}

/// Creates `relative_path` under `dir` with `content`, making parent directories.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, content: &str) -> std::io::Result<()> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)
}
