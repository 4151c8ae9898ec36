//! Byte-stream adapters around [`LineFilter`].
//!
//! Input may arrive in arbitrarily sized chunks; chunk boundaries never affect
//! the output. [`LineSplitter`] reassembles newline-delimited lines and
//! [`StubWriter`] runs each of them through a fresh [`LineFilter`].

use crate::filter::{FilterStats, LineFilter, Markers};
use log::debug;
use std::borrow::Cow;
use std::io::{self, Read, Write};

/// Reassembles `\n`-delimited lines from a chunked byte stream.
///
/// Lines are handed out without their `\n`. A line that straddles chunk
/// boundaries is buffered until its newline (or the end of the stream) arrives.
#[derive(Debug, Default)]
pub struct LineSplitter {
    pending: Vec<u8>,
}

impl LineSplitter {
    /// Creates an empty splitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk, calling `on_line` for every line it completes.
    pub fn push<F>(&mut self, chunk: &[u8], mut on_line: F) -> io::Result<()>
    where
        F: FnMut(&[u8]) -> io::Result<()>,
    {
        let mut rest = chunk;
        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let (line, tail) = rest.split_at(pos);
            if self.pending.is_empty() {
                on_line(line)?;
            } else {
                self.pending.extend_from_slice(line);
                on_line(&self.pending)?;
                self.pending.clear();
            }
            rest = &tail[1..];
        }
        self.pending.extend_from_slice(rest);
        Ok(())
    }

    /// Flushes a trailing line that had no newline. An empty tail yields no line.
    pub fn finish<F>(&mut self, mut on_line: F) -> io::Result<()>
    where
        F: FnMut(&[u8]) -> io::Result<()>,
    {
        if !self.pending.is_empty() {
            on_line(&self.pending)?;
            self.pending.clear();
        }
        Ok(())
    }

    /// Number of bytes buffered for an incomplete line.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// A writer that strips stub blocks from everything written through it.
///
/// Emitted lines are forwarded to the inner writer byte for byte, each
/// followed by exactly one `\n`. Call [`StubWriter::finish`] at end of stream
/// to flush a trailing partial line; dropping the writer discards it.
///
/// # Examples
/// ```
/// use std::io::Write;
/// use stubbify::filter::Markers;
/// use stubbify::stream::StubWriter;
///
/// let markers = Markers::default();
/// let mut writer = StubWriter::new(Vec::new(), &markers);
/// writer.write_all(b"keep\n//ST").unwrap();
/// writer.write_all(b"UB\ndrop\n//ENDSTUB\ntail").unwrap();
/// let (output, stats) = writer.finish().unwrap();
///
/// assert_eq!(output, b"keep\ntail\n");
/// assert_eq!(stats.blocks_opened, 1);
/// ```
#[derive(Debug)]
pub struct StubWriter<'m, W: Write> {
    inner: W,
    splitter: LineSplitter,
    filter: LineFilter<'m>,
}

impl<'m, W: Write> StubWriter<'m, W> {
    /// Wraps `inner`, filtering with `markers`.
    pub fn new(inner: W, markers: &'m Markers) -> Self {
        Self {
            inner,
            splitter: LineSplitter::new(),
            filter: LineFilter::new(markers),
        }
    }

    /// Flushes any partial line, then returns the inner writer and the filter counters.
    pub fn finish(mut self) -> io::Result<(W, FilterStats)> {
        let Self {
            inner,
            splitter,
            filter,
        } = &mut self;
        splitter.finish(|line| emit_line(filter, inner, line))?;
        self.inner.flush()?;
        let stats = self.filter.finish();
        Ok((self.inner, stats))
    }
}

impl<W: Write> Write for StubWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Self {
            inner,
            splitter,
            filter,
        } = self;
        splitter.push(buf, |line| emit_line(filter, inner, line))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn emit_line<W: Write>(filter: &mut LineFilter<'_>, out: &mut W, line: &[u8]) -> io::Result<()> {
    let text: Cow<'_, str> = String::from_utf8_lossy(line);
    if filter.admits(&text) {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Copies `reader` into `writer`, dropping stub blocks along the way.
pub fn filter_stream<R, W>(mut reader: R, writer: W, markers: &Markers) -> io::Result<FilterStats>
where
    R: Read,
    W: Write,
{
    let mut stub_writer = StubWriter::new(writer, markers);
    let copied = io::copy(&mut reader, &mut stub_writer)?;
    let (_, stats) = stub_writer.finish()?;
    debug!(
        "Filtered {} bytes: {} of {} line(s) emitted",
        copied, stats.lines_emitted, stats.lines_read
    );
    Ok(stats)
}

/// Filters an in-memory byte buffer.
pub fn filter_bytes(content: &[u8], markers: &Markers) -> (Vec<u8>, FilterStats) {
    let mut writer = StubWriter::new(Vec::with_capacity(content.len()), markers);
    writer
        .write_all(content)
        .expect("writes to Vec<u8> are infallible");
    writer.finish().expect("writes to Vec<u8> are infallible")
}
