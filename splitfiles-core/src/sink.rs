//! Rotating output files
//!
//! Exactly one output file is open at any time. Rotation flushes and closes
//! the current file before the next generated filename is created.

use crate::{
    error::{Result, SplitError},
    report::Report,
    sequencer::FilenameSequencer,
    splitter::Fragment,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Consumer of routed fragments
pub trait ChunkSink {
    /// Write one fragment, starting a new chunk first when it is flagged so
    fn write_fragment(&mut self, fragment: Fragment<'_>) -> Result<()>;
}

/// What to do when a generated filename already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Warn and move on to the next generated filename
    #[default]
    Skip,
    /// Truncate the existing file
    Overwrite,
}

impl From<bool> for OverwritePolicy {
    fn from(force: bool) -> Self {
        if force {
            OverwritePolicy::Overwrite
        } else {
            OverwritePolicy::Skip
        }
    }
}

/// Line count of one output file
///
/// Counts terminated lines, plus one when bytes follow the last terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounter {
    terminated: u64,
    open_tail: bool,
}

impl LineCounter {
    /// Account for bytes appended to the file
    pub fn record(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.terminated += memchr::memchr_iter(b'\n', bytes).count() as u64;
        self.open_tail = bytes.last() != Some(&b'\n');
    }

    /// Current line count
    pub fn count(&self) -> u64 {
        self.terminated + u64::from(self.open_tail)
    }
}

/// The file currently receiving output
#[derive(Debug)]
struct OutputFileState {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: LineCounter,
}

impl OutputFileState {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|source| SplitError::WriteFile {
                path: self.path.clone(),
                source,
            })?;
        self.lines.record(bytes);
        Ok(())
    }

    /// Flush buffered output and close the handle
    fn close(self) -> Result<u64> {
        let lines = self.lines.count();
        let path = self.path;
        let file = self
            .writer
            .into_inner()
            .map_err(|e| SplitError::WriteFile {
                path: path.clone(),
                source: e.into_error(),
            })?;
        drop(file);
        log::debug!("closed {} ({} lines)", path.display(), lines);
        Ok(lines)
    }
}

/// Counters kept by the sink over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkStats {
    /// Files created (or truncated)
    pub files_created: u64,
    /// Generated names skipped because the file already existed
    pub files_skipped: u64,
}

/// Owns the open output file and rotates to the next generated filename
pub struct FileRotationSink<R: Report> {
    sequencer: FilenameSequencer,
    policy: OverwritePolicy,
    report: R,
    current: Option<OutputFileState>,
    stats: SinkStats,
}

impl<R: Report> FileRotationSink<R> {
    /// Create the sink and open the first output file
    pub fn open(
        sequencer: FilenameSequencer,
        policy: OverwritePolicy,
        report: R,
    ) -> Result<Self> {
        let mut sink = Self {
            sequencer,
            policy,
            report,
            current: None,
            stats: SinkStats::default(),
        };
        let first = sink.open_next()?;
        sink.current = Some(first);
        Ok(sink)
    }

    /// Create the next generated file, skipping existing ones unless overwriting
    fn open_next(&mut self) -> Result<OutputFileState> {
        let path = loop {
            let filename = self.sequencer.next_filename();
            let path = PathBuf::from(&filename);

            if self.policy == OverwritePolicy::Skip && path_exists(&path) {
                log::warn!("File {filename} already exists. Skipping it.");
                self.stats.files_skipped += 1;
                continue;
            }
            break path;
        };

        let file = File::create(&path).map_err(|source| SplitError::CreateFile {
            path: path.clone(),
            source,
        })?;
        self.stats.files_created += 1;
        self.report
            .file_opened(&path.to_string_lossy())
            .map_err(SplitError::Report)?;

        Ok(OutputFileState {
            path,
            writer: BufWriter::new(file),
            lines: LineCounter::default(),
        })
    }

    /// Close the current file (if any) and report its line count
    ///
    /// The report line is terminated even when the final flush fails.
    fn close_current(&mut self) -> Result<()> {
        if let Some(state) = self.current.take() {
            let lines = state.lines.count();
            let closed = state.close();
            self.report.file_closed(lines).map_err(SplitError::Report)?;
            closed?;
        }
        Ok(())
    }

    /// Close the current file and open the next one
    pub fn rotate(&mut self) -> Result<()> {
        let previous = self.current_path().map(Path::to_path_buf);
        self.close_current()?;
        let next = self.open_next()?;
        if let Some(previous) = previous {
            log::debug!(
                "rotated {} -> {}",
                previous.display(),
                next.path.display()
            );
        }
        self.current = Some(next);
        Ok(())
    }

    /// Path of the file currently receiving output
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_ref().map(|state| state.path.as_path())
    }

    /// Line count of the file currently receiving output
    pub fn current_line_count(&self) -> u64 {
        self.current
            .as_ref()
            .map_or(0, |state| state.lines.count())
    }

    /// Flush and close the last file and report it
    pub fn finish(mut self) -> Result<SinkStats> {
        self.close_current()?;
        Ok(self.stats)
    }
}

impl<R: Report> ChunkSink for FileRotationSink<R> {
    fn write_fragment(&mut self, fragment: Fragment<'_>) -> Result<()> {
        if fragment.starts_new_chunk {
            self.rotate()?;
        }
        // `current` is only empty after a failed rotation, which ends the run
        match self.current.as_mut() {
            Some(state) => state.write(fragment.text),
            None => Ok(()),
        }
    }
}

/// Anything that cannot be proven absent counts as existing
fn path_exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}
