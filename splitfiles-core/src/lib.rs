//! Pattern-driven splitting of a text stream into numbered files
//!
//! Input is read line by line and split on every occurrence of a literal or
//! regular-expression pattern. Each occurrence closes the current output file
//! and opens the next name produced from a template such as `part-???.txt`.
//!
//! # Example
//!
//! ```no_run
//! use splitfiles_core::{split_stream, SplitConfig};
//! use std::io;
//!
//! let config = SplitConfig::new("----", "chapter-??.txt").verbose(true);
//! let summary = split_stream(&config, io::stdin().lock(), io::stderr()).unwrap();
//! assert!(summary.files_created >= 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod report;
pub mod router;
pub mod sequencer;
pub mod sink;
pub mod splitter;

// Re-export key types
pub use config::SplitConfig;
pub use error::{ConfigError, Result, SplitError};
pub use report::{Report, TextReport};
pub use router::{ChunkRouter, LineSource, RouteStats};
pub use sequencer::{CompiledFormat, FilenameSequencer};
pub use sink::{ChunkSink, FileRotationSink, LineCounter, OverwritePolicy, SinkStats};
pub use splitter::{Fragment, PatternKind, Splitter};

use std::io::{BufRead, Write};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Lines read from the input
    pub lines_read: u64,
    /// Bytes read from the input
    pub bytes_read: u64,
    /// Pattern occurrences, each of which started a new file
    pub boundaries: u64,
    /// Output files created
    pub files_created: u64,
    /// Generated names skipped because they already existed
    pub files_skipped: u64,
}

/// Split `input` into files as described by `config`
///
/// Every created filename is written to `report_to`, followed by a newline or,
/// when `config.verbose` is set, by `\t<line count>\n`. The template and the
/// pattern are validated before any file is touched. If the run fails midway,
/// the current file is still flushed, closed and its report line terminated
/// before the error is returned.
pub fn split_stream<R: BufRead, W: Write>(
    config: &SplitConfig,
    input: R,
    report_to: W,
) -> Result<SplitSummary> {
    let sequencer = FilenameSequencer::new(&config.template)?;
    let router = ChunkRouter::new(Splitter::new(&config.pattern, config.pattern_kind)?);

    log::info!(
        "splitting on {:?} ({:?}) into {:?}",
        config.pattern,
        config.pattern_kind,
        config.template
    );

    let report = TextReport::new(report_to, config.verbose);
    let mut sink = FileRotationSink::open(sequencer, config.overwrite, report)?;

    let route = match router.run(input, &mut sink) {
        Ok(route) => route,
        Err(err) => {
            if let Err(close_err) = sink.finish() {
                log::error!("could not close output after failure: {close_err}");
            }
            return Err(err);
        }
    };
    let sink_stats = sink.finish()?;

    let summary = SplitSummary {
        lines_read: route.lines_read,
        bytes_read: route.bytes_read,
        boundaries: route.boundaries,
        files_created: sink_stats.files_created,
        files_skipped: sink_stats.files_skipped,
    };
    log::info!(
        "done: {} lines ({} bytes), {} boundaries, {} files created, {} skipped",
        summary.lines_read,
        summary.bytes_read,
        summary.boundaries,
        summary.files_created,
        summary.files_skipped
    );

    Ok(summary)
}
