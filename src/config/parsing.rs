// src/config/parsing.rs

use crate::errors::ConfigError;
use regex::{Regex, RegexBuilder};

/// Compiles a user-supplied marker pattern.
pub(super) fn compile_pattern(
    pattern: &str,
    option: &str,
    ignore_case: bool,
) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|source| ConfigError::InvalidPattern {
            option: option.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}
