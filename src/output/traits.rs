//! Reporter trait

use crate::prober::ProbeResult;
use std::io;

/// Sink for the line-oriented run report
///
/// Implementations decide where lines go; the pipeline only decides what
/// is said and in which order.
pub trait Reporter {
    /// Reports an informational status line
    fn info(&mut self, message: &str) -> io::Result<()>;

    /// Reports an error status line
    fn error(&mut self, message: &str) -> io::Result<()>;

    /// Reports the outcome of one successful probe
    fn result(&mut self, result: &ProbeResult) -> io::Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn info(&mut self, message: &str) -> io::Result<()> {
        (**self).info(message)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        (**self).error(message)
    }

    fn result(&mut self, result: &ProbeResult) -> io::Result<()> {
        (**self).result(result)
    }
}
