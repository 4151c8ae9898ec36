// src/constants.rs

/// Default begin marker: a line consisting solely of `//`, optional whitespace and `STUB`.
pub const DEFAULT_BEGIN_PATTERN: &str = r"(?i)^//\s*STUB\s*$";

/// Default end marker, same shape as [`DEFAULT_BEGIN_PATTERN`] with `ENDSTUB`.
pub const DEFAULT_END_PATTERN: &str = r"(?i)^//\s*ENDSTUB\s*$";

/// Begin marker for HTML-style comments such as `<!-- STUB -->`.
pub const HTML_BEGIN_PATTERN: &str = r"(?i)^.*<!-*\s*STUB\s*-*>";

/// End marker for HTML-style comments such as `<!-- ENDSTUB -->`.
pub const HTML_END_PATTERN: &str = r"(?i)^.*<!-*\s*ENDSTUB\s*-*>";

/// Separator used before the summary section.
pub const SUMMARY_SEPARATOR: &str = "---";

/// Prefix for the summary header line.
pub const SUMMARY_HEADER_PREFIX: &str = "Stubbed Files";
