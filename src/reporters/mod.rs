//! Progress and output reporting for split operations
//!
//! The split pipeline reports through the [`SplitReporter`] trait so the core
//! logic stays decoupled from output formatting. The binary picks the console
//! reporter, or the silent one in quiet mode.

mod console;
mod silent;

pub use console::{format_chunk_line, format_summary, ConsoleSplitReporter};
pub use silent::SilentSplitReporter;

use crate::plan::{ChunkAssignment, DistributionPlan};
use std::path::Path;

/// Trait for reporting split progress and results
///
/// Errors are not routed through reporters: the binary prints them to stderr
/// even in quiet mode.
pub trait SplitReporter: Send + Sync {
    /// Report the loaded input and its line count
    fn report_input(&self, input: &Path, total_lines: usize);

    /// Report the derived distribution before any fragment is written
    fn report_plan(&self, plan: &DistributionPlan);

    /// Report one fragment; `written` is false in dry-run mode
    fn report_chunk(&self, file_name: &str, assignment: &ChunkAssignment, written: bool);

    /// Report that every written fragment passed verification
    fn report_verified(&self, fragments: usize);

    /// Report successful completion of the run
    fn report_complete(&self, message: &str);
}
