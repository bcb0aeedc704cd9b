//! Even distribution of body groups across output fragments
//!
//! With `groups` groups and `chunks` fragments, every fragment gets
//! `base = groups / chunks` groups and the first `rem = groups % chunks`
//! fragments get one extra. Fragments take consecutive, non-overlapping body
//! slices in index order, so together they cover the body exactly once.

use crate::config::LineLayout;
use crate::domain::{BodyLine, ChunkIndex, LineRange};
use crate::error::{Result, SplitError};

/// The part of the body assigned to one fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAssignment {
    pub index: ChunkIndex,
    pub groups: usize,
    pub lines: usize,
    /// `None` for a header-only fragment
    pub range: Option<LineRange>,
}

impl ChunkAssignment {
    pub fn is_header_only(&self) -> bool {
        self.range.is_none()
    }
}

/// Validated split parameters and the derived distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan {
    pub total_lines: usize,
    pub header_lines: usize,
    pub group_lines: usize,
    pub body_lines: usize,
    pub groups: usize,
    pub chunks: usize,
    pub base: usize,
    pub rem: usize,
}

impl DistributionPlan {
    /// Validate the input shape and chunk count, in that order, and derive the
    /// distribution. The first violated check is returned.
    pub fn new(total_lines: usize, layout: &LineLayout, chunks: i64) -> Result<Self> {
        let header_lines = layout.header_lines();
        let group_lines = layout.group_lines();

        if total_lines < header_lines {
            return Err(SplitError::InputTooShort {
                total: total_lines,
                header: header_lines,
            });
        }

        let body_lines = total_lines - header_lines;
        if body_lines % group_lines != 0 {
            return Err(SplitError::MisalignedBody {
                body: body_lines,
                group: group_lines,
            });
        }

        let chunks = match usize::try_from(chunks) {
            Ok(n) if n > 0 => n,
            _ => return Err(SplitError::InvalidChunkCount(chunks.to_string())),
        };

        let groups = body_lines / group_lines;

        Ok(Self {
            total_lines,
            header_lines,
            group_lines,
            body_lines,
            groups,
            chunks,
            base: groups / chunks,
            rem: groups % chunks,
        })
    }

    /// Groups assigned to the fragment at `index`
    pub fn groups_for(&self, index: ChunkIndex) -> usize {
        if index.as_usize() <= self.rem {
            self.base + 1
        } else {
            self.base
        }
    }

    /// Number of fragments that receive no body lines
    pub fn header_only_chunks(&self) -> usize {
        self.chunks.saturating_sub(self.groups)
    }

    /// Per-fragment assignments in fragment order
    pub fn assignments(&self) -> Assignments<'_> {
        Assignments {
            plan: self,
            next: 1,
            cursor: BodyLine::FIRST,
        }
    }
}

/// Iterator over [`ChunkAssignment`]s, advancing a body cursor as it goes
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    plan: &'a DistributionPlan,
    next: usize,
    cursor: BodyLine,
}

impl Iterator for Assignments<'_> {
    type Item = ChunkAssignment;

    fn next(&mut self) -> Option<ChunkAssignment> {
        if self.next > self.plan.chunks {
            return None;
        }
        let index = ChunkIndex::new(self.next);
        self.next += 1;

        let groups = self.plan.groups_for(index);
        let lines = groups * self.plan.group_lines;
        let range = LineRange::starting_at(self.cursor, lines);
        if let Some(range) = range {
            self.cursor = range.next_start();
        }

        Some(ChunkAssignment {
            index,
            groups,
            lines,
            range,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.plan.chunks + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_> {}
