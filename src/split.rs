//! The split pipeline: load, validate, plan, stage, persist, optionally verify

use crate::config::SplitConfig;
use crate::error::Result;
use crate::fragment::{fragment_file_name, persist_fragments, stage_fragment};
use crate::plan::{ChunkAssignment, DistributionPlan};
use crate::reporters::SplitReporter;
use crate::script::ScriptLines;
use crate::verify::verify_fragments;
use log::{debug, info, warn};
use std::path::PathBuf;

/// What a split run produced
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub plan: DistributionPlan,
    /// Fragment file names in fragment order
    pub file_names: Vec<String>,
    /// Paths of written fragments; empty for a dry run
    pub written: Vec<PathBuf>,
}

/// Split `config.input` into `config.chunks` fragments.
///
/// All validation happens before the first fragment is staged, so a failed
/// check leaves the output directory untouched.
pub fn split_script(config: &SplitConfig, reporter: &dyn SplitReporter) -> Result<SplitOutcome> {
    let script = ScriptLines::read(&config.input)?;
    info!(
        "Loaded {} ({} lines, {} bytes)",
        config.input.display(),
        script.total_lines(),
        script.as_bytes().len()
    );
    reporter.report_input(&config.input, script.total_lines());

    let plan = DistributionPlan::new(script.total_lines(), &config.layout, config.chunks)?;
    reporter.report_plan(&plan);

    if plan.header_only_chunks() > 0 {
        warn!(
            "{} groups for {} chunks: {} fragments will contain only the header",
            plan.groups,
            plan.chunks,
            plan.header_only_chunks()
        );
    }

    let suffix = config.effective_suffix();
    let named: Vec<(String, ChunkAssignment)> = plan
        .assignments()
        .map(|a| (fragment_file_name(&config.prefix, a.index, &suffix), a))
        .collect();
    let file_names: Vec<String> = named.iter().map(|(name, _)| name.clone()).collect();

    if config.dry_run {
        for (name, assignment) in &named {
            reporter.report_chunk(name, assignment, false);
        }
        reporter.report_complete("Dry run: no fragments written.");
        return Ok(SplitOutcome {
            plan,
            file_names,
            written: Vec::new(),
        });
    }

    let header = script.header(&config.layout);
    let mut staged = Vec::with_capacity(named.len());
    for (name, assignment) in &named {
        let body = match assignment.range {
            Some(range) => script.body_lines(&config.layout, range),
            None => &[][..],
        };
        debug!(
            "Chunk {}: {} groups, {} lines",
            assignment.index, assignment.groups, assignment.lines
        );
        staged.push(stage_fragment(&config.output_dir, name, header, body)?);
    }

    let written = persist_fragments(staged)?;
    for (name, assignment) in &named {
        reporter.report_chunk(name, assignment, true);
    }

    if config.verify {
        verify_fragments(&script, &config.layout, &plan, &written)?;
        reporter.report_verified(written.len());
    }

    info!("Wrote {} fragments to {}", written.len(), config.output_dir.display());
    reporter.report_complete(&format!(
        "Split \"{}\" into {} fragments.",
        config.input.display(),
        written.len()
    ));

    Ok(SplitOutcome {
        plan,
        file_names,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineLayout;
    use crate::error::SplitError;
    use crate::reporters::SilentSplitReporter;
    use std::fs;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, header: usize, groups: usize, group: usize) -> PathBuf {
        let mut text = String::new();
        for i in 0..header {
            text.push_str(&format!("header {}\n", i));
        }
        for g in 0..groups {
            for l in 0..group {
                text.push_str(&format!("group {} line {}\n", g, l));
            }
        }
        let path = dir.path().join("input.sh");
        fs::write(&path, text).unwrap();
        path
    }

    fn config_for(dir: &TempDir, input: PathBuf, chunks: i64, layout: LineLayout) -> SplitConfig {
        let mut config = SplitConfig::new(input, chunks, layout);
        config.output_dir = dir.path().join("out");
        fs::create_dir_all(&config.output_dir).unwrap();
        config
    }

    #[test]
    fn test_split_writes_every_fragment() {
        let dir = TempDir::new().unwrap();
        let input = write_script(&dir, 2, 7, 3);
        let mut config = config_for(&dir, input, 3, LineLayout::new(2, 3).unwrap());
        config.verify = true;

        let outcome = split_script(&config, &SilentSplitReporter::new()).unwrap();
        assert_eq!(outcome.written.len(), 3);
        assert_eq!(
            outcome.file_names,
            vec!["download_part_01.sh", "download_part_02.sh", "download_part_03.sh"]
        );
        // 7 groups over 3 chunks: 3, 2, 2
        let lines: Vec<usize> = outcome
            .written
            .iter()
            .map(|p| fs::read_to_string(p).unwrap().lines().count())
            .collect();
        assert_eq!(lines, vec![2 + 9, 2 + 6, 2 + 6]);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = write_script(&dir, 2, 4, 2);
        let mut config = config_for(&dir, input, 2, LineLayout::new(2, 2).unwrap());
        config.dry_run = true;

        let outcome = split_script(&config, &SilentSplitReporter::new()).unwrap();
        assert!(outcome.written.is_empty());
        assert_eq!(outcome.file_names.len(), 2);
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_validation_failure_leaves_output_dir_empty() {
        let dir = TempDir::new().unwrap();
        let input = write_script(&dir, 2, 3, 2);
        let config = config_for(&dir, input, 0, LineLayout::new(2, 2).unwrap());

        let err = split_script(&config, &SilentSplitReporter::new()).unwrap_err();
        assert!(matches!(err, SplitError::InvalidChunkCount(_)));
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_input_is_read_error() {
        let dir = TempDir::new().unwrap();
        let config = config_for(
            &dir,
            dir.path().join("nope.sh"),
            2,
            LineLayout::default(),
        );
        let err = split_script(&config, &SilentSplitReporter::new()).unwrap_err();
        assert!(matches!(err, SplitError::InputRead { .. }));
    }
}
