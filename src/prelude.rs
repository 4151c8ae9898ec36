//! The `stubbify` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use stubbify::prelude::*;
//!
//! let markers = Markers::default();
//! let mut filter = LineFilter::new(&markers);
//! assert_eq!(filter.process_line("// STUB"), None);
//! assert_eq!(filter.state(), FilterState::Suppressing);
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::core_types::{StubJob, StubReport};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::filter::{
    filter_lines, filter_str, FilterState, FilterStats, LineFilter, LinePattern, MarkerStyle,
    Markers, Predicate,
};
pub use crate::processing::{mirror_path, stub_file};
pub use crate::stream::{filter_bytes, filter_stream, LineSplitter, StubWriter};
pub use crate::{discover, run, stub};
