//! Output generation module
//!
//! This module renders the run report: `[INFO]` and `[ERROR]` status lines
//! and one `[status] url - Title: title` line per probed path. The report
//! goes to standard output; diagnostics go through `tracing` instead.

mod console;
mod traits;

pub use console::ConsoleReporter;
pub use traits::Reporter;
