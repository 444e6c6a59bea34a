//! Reporting of created files
//!
//! Every created file is announced by its name, followed once the file is
//! closed by either a newline or, in verbose mode, `\t<line count>\n`.

use std::io::{self, Write};

/// Receives file lifecycle events from the rotation sink
pub trait Report {
    /// A file was created and is about to receive content
    fn file_opened(&mut self, filename: &str) -> io::Result<()>;

    /// The file announced last was flushed and closed
    fn file_closed(&mut self, line_count: u64) -> io::Result<()>;
}

/// Plain text report writer
pub struct TextReport<W: Write> {
    writer: W,
    verbose: bool,
}

impl<W: Write> TextReport<W> {
    /// Create a report writing to `writer`
    pub fn new(writer: W, verbose: bool) -> Self {
        Self { writer, verbose }
    }

    /// Consume the report and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Report for TextReport<W> {
    fn file_opened(&mut self, filename: &str) -> io::Result<()> {
        write!(self.writer, "{filename}")
    }

    fn file_closed(&mut self, line_count: u64) -> io::Result<()> {
        if self.verbose {
            writeln!(self.writer, "\t{line_count}")?;
        } else {
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }
}
