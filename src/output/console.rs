//! Plain-text reporter
//!
//! Writes one line per event to any [`Write`] sink, standard output for the
//! binary and an in-memory buffer in tests.

use crate::output::Reporter;
use crate::prober::ProbeResult;
use std::io::{self, Stdout, Write};

/// Line reporter over a writer
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    writer: W,
}

impl ConsoleReporter<Stdout> {
    /// Creates a reporter writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the reporter and returns the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, line: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.writer.write_fmt(line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn info(&mut self, message: &str) -> io::Result<()> {
        self.line(format_args!("[INFO] {}", message))
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.line(format_args!("[ERROR] {}", message))
    }

    fn result(&mut self, result: &ProbeResult) -> io::Result<()> {
        self.line(format_args!("{}", result))
    }
}
