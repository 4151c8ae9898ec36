//! Line predicates used to recognize begin and end markers.

use super::Markers;
use crate::constants::{
    DEFAULT_BEGIN_PATTERN, DEFAULT_END_PATTERN, HTML_BEGIN_PATTERN, HTML_END_PATTERN,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A predicate over a single line of text (without its trailing newline).
///
/// Patterns are opaque to [`LineFilter`](super::LineFilter): it only asks whether
/// a whole line matches. Implementations must be shareable across threads so one
/// set of [`Markers`] can serve many files processed in parallel.
pub trait LinePattern: Send + Sync {
    /// Returns `true` if `line` is a marker line.
    fn matches(&self, line: &str) -> bool;
    /// Returns a human-readable description, used in logs and `Debug` output.
    fn describe(&self) -> String;
}

impl LinePattern for Regex {
    fn matches(&self, line: &str) -> bool {
        self.is_match(line)
    }
    fn describe(&self) -> String {
        self.as_str().to_string()
    }
}

impl<T: LinePattern + ?Sized> LinePattern for Box<T> {
    fn matches(&self, line: &str) -> bool {
        (**self).matches(line)
    }
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: LinePattern + ?Sized> LinePattern for Arc<T> {
    fn matches(&self, line: &str) -> bool {
        (**self).matches(line)
    }
    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Adapts a closure into a [`LinePattern`].
///
/// # Examples
/// ```
/// use stubbify::filter::{LinePattern, Predicate};
///
/// let begin = Predicate(|line: &str| line.starts_with("# STUB"));
/// assert!(begin.matches("# STUB"));
/// assert!(!begin.matches("code"));
/// ```
#[derive(Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<F> LinePattern for Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, line: &str) -> bool {
        (self.0)(line)
    }
    fn describe(&self) -> String {
        "<predicate>".to_string()
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

static DEFAULT_BEGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_BEGIN_PATTERN).expect("default begin pattern is valid"));
static DEFAULT_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_END_PATTERN).expect("default end pattern is valid"));
static HTML_BEGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(HTML_BEGIN_PATTERN).expect("html begin pattern is valid"));
static HTML_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(HTML_END_PATTERN).expect("html end pattern is valid"));

/// The default begin marker, matching `//STUB`, `// stub`, `//  Stub  `, and so on.
pub fn default_begin() -> Regex {
    DEFAULT_BEGIN.clone()
}

/// The default end marker, matching `//ENDSTUB` in the same forms as [`default_begin`].
pub fn default_end() -> Regex {
    DEFAULT_END.clone()
}

/// Built-in marker presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MarkerStyle {
    /// `// STUB` ... `// ENDSTUB` on lines of their own.
    #[default]
    Slash,
    /// `<!-- STUB -->` ... `<!-- ENDSTUB -->`, anywhere on the line.
    Html,
}

impl MarkerStyle {
    /// The compiled begin pattern for this style.
    pub fn begin(self) -> Regex {
        match self {
            MarkerStyle::Slash => DEFAULT_BEGIN.clone(),
            MarkerStyle::Html => HTML_BEGIN.clone(),
        }
    }

    /// The compiled end pattern for this style.
    pub fn end(self) -> Regex {
        match self {
            MarkerStyle::Slash => DEFAULT_END.clone(),
            MarkerStyle::Html => HTML_END.clone(),
        }
    }

    /// Both patterns of this style as a [`Markers`] pair.
    pub fn markers(self) -> Markers {
        Markers::new(self.begin(), self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_begin_is_case_insensitive() {
        let begin = default_begin();
        for line in ["//STUB", "//stub", "//Stub", "// STUB", "//\tSTUB  "] {
            assert!(begin.matches(line), "expected '{}' to match", line);
        }
    }

    #[test]
    fn test_default_begin_is_anchored() {
        let begin = default_begin();
        assert!(!begin.matches("hello world//STUB"));
        assert!(!begin.matches("hello world //STUB"));
        assert!(!begin.matches("  // STUB")); // Leading indentation is not trimmed
        assert!(!begin.matches("// STUB trailing"));
        assert!(!begin.matches("//STUBBED"));
        assert!(!begin.matches("//ENDSTUB"));
    }

    #[test]
    fn test_default_patterns_tolerate_carriage_return() {
        assert!(default_begin().matches("//STUB\r"));
        assert!(default_end().matches("// ENDSTUB\r"));
    }

    #[test]
    fn test_default_end() {
        let end = default_end();
        assert!(end.matches("//ENDSTUB"));
        assert!(end.matches("// endstub "));
        assert!(!end.matches("//STUB"));
        assert!(!end.matches("x //ENDSTUB"));
    }

    #[test]
    fn test_html_style() {
        let style = MarkerStyle::Html;
        assert!(style.begin().matches("<!-- STUB -->"));
        assert!(style.begin().matches("  <div></div><!--stub-->"));
        assert!(!style.begin().matches("<!-- ENDSTUB -->"));
        assert!(style.end().matches("<!-- ENDSTUB -->"));
        assert!(!style.end().matches("<!-- STUB -->"));
    }

    #[test]
    fn test_predicate_and_boxed_patterns() {
        let boxed: Box<dyn LinePattern> = Box::new(Predicate(|l: &str| l == "BEGIN"));
        assert!(boxed.matches("BEGIN"));
        assert!(!boxed.matches("begin"));
        assert_eq!(boxed.describe(), "<predicate>");

        let shared: Arc<dyn LinePattern> = Arc::new(default_end());
        assert_eq!(shared.describe(), DEFAULT_END_PATTERN);
    }
}
