//! Console reporter for split operations
//!
//! Prints the run summary and one line per fragment to stdout.

use super::SplitReporter;
use crate::plan::{ChunkAssignment, DistributionPlan};
use std::path::Path;

#[derive(Default)]
pub struct ConsoleSplitReporter;

impl ConsoleSplitReporter {
    pub fn new() -> Self {
        Self
    }
}

impl SplitReporter for ConsoleSplitReporter {
    fn report_input(&self, input: &Path, total_lines: usize) {
        println!("Input: \"{}\" ({} lines)", input.display(), total_lines);
    }

    fn report_plan(&self, plan: &DistributionPlan) {
        print!("{}", format_summary(plan));
    }

    fn report_chunk(&self, file_name: &str, assignment: &ChunkAssignment, written: bool) {
        println!("{}", format_chunk_line(file_name, assignment, written));
    }

    fn report_verified(&self, fragments: usize) {
        println!("Verified {} fragments against the input.", fragments);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

/// Multi-line summary of the derived distribution, each line newline-terminated
pub fn format_summary(plan: &DistributionPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total lines:  {}\n", plan.total_lines));
    out.push_str(&format!("Header lines: {}\n", plan.header_lines));
    out.push_str(&format!(
        "Body lines:   {} ({} groups of {} lines)\n",
        plan.body_lines, plan.groups, plan.group_lines
    ));
    out.push_str(&format!(
        "Chunks:       {} (base {} groups, remainder {})\n",
        plan.chunks, plan.base, plan.rem
    ));
    if plan.rem > 0 {
        let extra = match plan.rem {
            1 => "chunk 1 gets".to_string(),
            n => format!("chunks 1-{} get", n),
        };
        out.push_str(&format!(
            "              {} {} groups, the rest get {}\n",
            extra,
            plan.base + 1,
            plan.base
        ));
    }
    out
}

/// One report line for a fragment
pub fn format_chunk_line(file_name: &str, assignment: &ChunkAssignment, written: bool) -> String {
    let verb = if written { "Wrote" } else { "Would write" };
    match assignment.range {
        Some(range) => format!(
            "{} {}: {} groups, {} lines (body lines {})",
            verb, file_name, assignment.groups, assignment.lines, range
        ),
        None => format!("{} {}: 0 groups (header only)", verb, file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineLayout;

    fn reference_plan() -> DistributionPlan {
        DistributionPlan::new(4499, &LineLayout::new(11, 4).unwrap(), 12).unwrap()
    }

    #[test]
    fn test_summary_mentions_derived_metrics() {
        let summary = format_summary(&reference_plan());
        assert!(summary.contains("4499"));
        assert!(summary.contains("4488"));
        assert!(summary.contains("1122 groups"));
        assert!(summary.contains("base 93"));
        assert!(summary.contains("remainder 6"));
        assert!(summary.contains("chunks 1-6 get 94 groups"));
    }

    #[test]
    fn test_summary_single_extra_chunk() {
        // 13 groups over 3 chunks: one chunk carries the extra group
        let plan = DistributionPlan::new(11 + 13 * 4, &LineLayout::new(11, 4).unwrap(), 3)
            .unwrap();
        let summary = format_summary(&plan);
        assert!(summary.contains("chunk 1 gets 5 groups, the rest get 4"));
        assert!(!summary.contains("1-1"));
    }

    #[test]
    fn test_summary_without_remainder() {
        let plan = DistributionPlan::new(11 + 12 * 4, &LineLayout::new(11, 4).unwrap(), 3)
            .unwrap();
        assert!(!format_summary(&plan).contains("the rest get"));
    }

    #[test]
    fn test_chunk_line_with_range() {
        let plan = reference_plan();
        let second = plan.assignments().nth(1).unwrap();
        let line = format_chunk_line("download_part_02.sh", &second, true);
        assert_eq!(
            line,
            "Wrote download_part_02.sh: 94 groups, 376 lines (body lines 377-752)"
        );
    }

    #[test]
    fn test_chunk_line_header_only() {
        let plan = DistributionPlan::new(11, &LineLayout::new(11, 4).unwrap(), 2).unwrap();
        let first = plan.assignments().next().unwrap();
        let line = format_chunk_line("download_part_01.sh", &first, false);
        assert_eq!(line, "Would write download_part_01.sh: 0 groups (header only)");
    }
}
