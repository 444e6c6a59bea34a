//! Driving loop: read lines, split them, route fragments to the sink

use crate::{
    error::{Result, SplitError},
    sink::ChunkSink,
    splitter::Splitter,
};
use std::io::BufRead;

/// Reads a stream line by line, keeping line terminators
///
/// The buffer is reused between lines.
pub struct LineSource<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(8 * 1024),
        }
    }

    /// Read the next line, terminator included
    ///
    /// Returns `Ok(None)` at end of stream. The last line may lack a
    /// terminator.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buffer.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .map_err(SplitError::ReadInput)?;

        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(&self.buffer))
        }
    }
}

/// Totals gathered while routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteStats {
    /// Lines read from the input
    pub lines_read: u64,
    /// Bytes read from the input
    pub bytes_read: u64,
    /// Chunk boundaries found (pattern occurrences)
    pub boundaries: u64,
}

/// Routes the fragments of every line to a sink
pub struct ChunkRouter {
    splitter: Splitter,
}

impl ChunkRouter {
    /// Create a router around `splitter`
    pub fn new(splitter: Splitter) -> Self {
        Self { splitter }
    }

    /// Route a single line
    ///
    /// Returns the number of chunk boundaries found in the line.
    pub fn route_line<S: ChunkSink>(&self, line: &[u8], sink: &mut S) -> Result<u64> {
        let mut boundaries = 0;
        for fragment in self.splitter.split(line) {
            if fragment.starts_new_chunk {
                boundaries += 1;
            }
            sink.write_fragment(fragment)?;
        }
        Ok(boundaries)
    }

    /// Route every line of `input` until end of stream
    ///
    /// The first read or write failure aborts the run.
    pub fn run<R: BufRead, S: ChunkSink>(&self, input: R, sink: &mut S) -> Result<RouteStats> {
        let mut source = LineSource::new(input);
        let mut stats = RouteStats::default();

        while let Some(line) = source.next_line()? {
            stats.lines_read += 1;
            stats.bytes_read += line.len() as u64;
            stats.boundaries += self.route_line(line, sink)?;
        }

        Ok(stats)
    }
}
