// src/processing/content_reader.rs

use crate::errors::{read_error, Result};
use std::{fs, path::Path};

/// Reads the entire content of a source file.
/// Wraps I/O errors with the offending path.
pub(super) fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| read_error(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_valid_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("test.js");
        fs::write(&file_path, "Hello, stubbify!")?;

        let read_content = read_source(&file_path)?;
        assert_eq!(read_content, b"Hello, stubbify!");

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_read_empty_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.js");
        fs::write(&file_path, "")?;

        assert!(read_source(&file_path)?.is_empty());

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_read_non_existent_file() {
        let path = Path::new("non_existent_file_for_stubbify_test.js");
        let result = read_source(path);
        match result {
            Err(Error::ReadSource { path, source }) => {
                assert!(path.ends_with("non_existent_file_for_stubbify_test.js"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Error::ReadSource, got {:?}", other),
        }
    }
}
