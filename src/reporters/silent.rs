//! Silent reporter for split operations
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::SplitReporter;
use crate::plan::{ChunkAssignment, DistributionPlan};
use std::path::Path;

#[derive(Default)]
pub struct SilentSplitReporter;

impl SilentSplitReporter {
    pub fn new() -> Self {
        Self
    }
}

impl SplitReporter for SilentSplitReporter {
    fn report_input(&self, _input: &Path, _total_lines: usize) {}
    fn report_plan(&self, _plan: &DistributionPlan) {}
    fn report_chunk(&self, _file_name: &str, _assignment: &ChunkAssignment, _written: bool) {}
    fn report_verified(&self, _fragments: usize) {}
    fn report_complete(&self, _message: &str) {}
}
