//! The line-filtering state machine.
//!
//! [`LineFilter`] decides, line by line, whether a line is emitted. It knows
//! nothing about bytes, files or chunking; see [`crate::stream`] for the
//! adapter that feeds it from an arbitrary byte stream.

use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

pub mod patterns;

pub use patterns::{default_begin, default_end, LinePattern, MarkerStyle, Predicate};

/// A begin/end marker pair.
///
/// Cheap to clone; the patterns themselves are shared.
#[derive(Clone)]
pub struct Markers {
    begin: Arc<dyn LinePattern>,
    end: Arc<dyn LinePattern>,
}

impl Markers {
    /// Creates a marker pair from any two patterns.
    pub fn new<B, E>(begin: B, end: E) -> Self
    where
        B: LinePattern + 'static,
        E: LinePattern + 'static,
    {
        Self {
            begin: Arc::new(begin),
            end: Arc::new(end),
        }
    }

    /// Returns `true` if `line` opens a suppressed block.
    pub fn is_begin(&self, line: &str) -> bool {
        self.begin.matches(line)
    }

    /// Returns `true` if `line` closes a suppressed block.
    pub fn is_end(&self, line: &str) -> bool {
        self.end.matches(line)
    }
}

/// The `// STUB` / `// ENDSTUB` pair.
impl Default for Markers {
    fn default() -> Self {
        MarkerStyle::default().markers()
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Markers")
            .field("begin", &self.begin.describe())
            .field("end", &self.end.describe())
            .finish()
    }
}

/// Suppression state of a [`LineFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// Lines are emitted unchanged.
    #[default]
    Passing,
    /// Lines are dropped until an end marker is seen.
    Suppressing,
}

/// Counters collected while filtering one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    /// Number of lines fed to the filter.
    pub lines_read: usize,
    /// Number of lines emitted.
    pub lines_emitted: usize,
    /// Number of begin markers that opened a block (redundant ones excluded).
    pub blocks_opened: usize,
    /// `true` if the stream ended inside a block.
    pub unterminated: bool,
}

impl FilterStats {
    /// Number of lines dropped, marker lines included.
    pub fn lines_dropped(&self) -> usize {
        self.lines_read - self.lines_emitted
    }
}

/// Streaming STUB/ENDSTUB filter for a single stream.
///
/// A filter is created fresh for each stream and discarded when the stream
/// ends, since its state would otherwise leak into the next stream.
///
/// # Examples
/// ```
/// use stubbify::filter::{LineFilter, Markers};
///
/// let markers = Markers::default();
/// let mut filter = LineFilter::new(&markers);
///
/// assert_eq!(filter.process_line("keep"), Some("keep"));
/// assert_eq!(filter.process_line("// STUB"), None);
/// assert_eq!(filter.process_line("debug_only();"), None);
/// assert_eq!(filter.process_line("// ENDSTUB"), None);
/// assert_eq!(filter.process_line("keep too"), Some("keep too"));
/// ```
#[derive(Debug)]
pub struct LineFilter<'m> {
    markers: &'m Markers,
    state: FilterState,
    stats: FilterStats,
}

impl<'m> LineFilter<'m> {
    /// Creates a filter in the [`FilterState::Passing`] state.
    pub fn new(markers: &'m Markers) -> Self {
        Self {
            markers,
            state: FilterState::Passing,
            stats: FilterStats::default(),
        }
    }

    /// The current suppression state.
    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Counters collected so far.
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            unterminated: self.state == FilterState::Suppressing,
            ..self.stats
        }
    }

    /// Classifies one line (without its newline) and returns `true` if it is emitted.
    ///
    /// Marker lines are never emitted. A begin marker seen while already
    /// suppressing is absorbed; a single end marker resumes passing.
    pub fn admits(&mut self, line: &str) -> bool {
        self.stats.lines_read += 1;
        let emit = match self.state {
            FilterState::Passing if self.markers.is_begin(line) => {
                self.state = FilterState::Suppressing;
                self.stats.blocks_opened += 1;
                false
            }
            FilterState::Passing if self.markers.is_end(line) => {
                debug!(
                    "Dropping end marker outside a block at line {}",
                    self.stats.lines_read
                );
                false
            }
            FilterState::Passing => true,
            FilterState::Suppressing => {
                if self.markers.is_end(line) {
                    self.state = FilterState::Passing;
                }
                false
            }
        };
        if emit {
            self.stats.lines_emitted += 1;
        }
        emit
    }

    /// Returns the line unchanged if it is emitted, `None` if it is dropped.
    pub fn process_line<'l>(&mut self, line: &'l str) -> Option<&'l str> {
        self.admits(line).then_some(line)
    }

    /// Consumes the filter at end of stream and returns its counters.
    ///
    /// Ending inside a block is not an error; everything after the begin
    /// marker has simply been dropped.
    pub fn finish(self) -> FilterStats {
        let stats = self.stats();
        if stats.unterminated {
            warn!(
                "Stream ended inside a stub block; {} line(s) dropped since the last begin marker",
                stats.lines_dropped()
            );
        }
        stats
    }
}

/// Filters a sequence of lines, returning the emitted ones in order.
pub fn filter_lines<'l, I>(lines: I, markers: &Markers) -> Vec<&'l str>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut filter = LineFilter::new(markers);
    let emitted = lines
        .into_iter()
        .filter_map(|line| filter.process_line(line))
        .collect();
    filter.finish();
    emitted
}

/// Filters in-memory text. Every emitted line is terminated by exactly one `\n`.
///
/// # Examples
/// ```
/// use stubbify::filter::{filter_str, Markers};
///
/// let text = "a\n//STUB\nb\n//ENDSTUB\nc";
/// assert_eq!(filter_str(text, &Markers::default()), "a\nc\n");
/// ```
pub fn filter_str(content: &str, markers: &Markers) -> String {
    let mut output = String::with_capacity(content.len());
    for line in filter_lines(content.split_terminator('\n'), markers) {
        output.push_str(line);
        output.push('\n');
    }
    output
}
