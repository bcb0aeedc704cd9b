//! Post-write verification of fragments
//!
//! Each written fragment is read back and checked: it must start with the
//! input's header byte-for-byte and carry exactly the number of body lines the
//! plan assigned to it. The body parts of all fragments are fed, in order, into
//! one CRC32 that must equal the CRC32 of the input body.

use crate::config::LineLayout;
use crate::error::{Result, SplitError};
use crate::plan::DistributionPlan;
use crate::script::ScriptLines;
use crc32fast::Hasher;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Check written fragments (in fragment order) against the input they came from
pub fn verify_fragments(
    script: &ScriptLines,
    layout: &LineLayout,
    plan: &DistributionPlan,
    fragments: &[PathBuf],
) -> Result<()> {
    if fragments.len() != plan.chunks {
        return Err(SplitError::VerificationFailed(format!(
            "expected {} fragments, found {}",
            plan.chunks,
            fragments.len()
        )));
    }

    let header = script.header(layout);
    let mut reassembled = Hasher::new();

    for (path, assignment) in fragments.iter().zip(plan.assignments()) {
        let contents = fs::read(path).map_err(|source| SplitError::FragmentRead {
            file: path.clone(),
            source,
        })?;
        let body = contents.strip_prefix(header).ok_or_else(|| {
            SplitError::VerificationFailed(format!(
                "{} does not start with the input header",
                path.display()
            ))
        })?;

        let body_lines = ScriptLines::from_bytes(body.to_vec()).total_lines();
        if body_lines != assignment.lines {
            return Err(SplitError::VerificationFailed(format!(
                "{} has {} body lines, expected {}",
                path.display(),
                body_lines,
                assignment.lines
            )));
        }

        debug!("{}: header ok, {} body lines", path.display(), body_lines);
        reassembled.update(body);
    }

    let expected = crc32fast::hash(script.body(layout));
    let actual = reassembled.finalize();
    if expected != actual {
        return Err(SplitError::VerificationFailed(format!(
            "reassembled body CRC32 {:08x} does not match input body CRC32 {:08x}",
            actual, expected
        )));
    }

    Ok(())
}
