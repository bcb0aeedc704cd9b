//! Core domain types for script splitting
//!
//! Chunk indices and body line numbers are both 1-based `usize` values that are
//! easy to mix up with each other and with 0-based offsets into the input.
//! These newtypes keep them apart at compile time.
//!
//! - **ChunkIndex**: position of a fragment in the output sequence (1..=chunks)
//! - **BodyLine**: line number relative to the start of the body (first body line is 1)
//! - **LineRange**: inclusive span of body lines assigned to one fragment

/// 1-based index of an output fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkIndex(usize);

impl ChunkIndex {
    pub fn new(index: usize) -> Self {
        debug_assert!(index >= 1, "chunk indices are 1-based");
        ChunkIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// Zero-padded form used in fragment file names ("01", "02", ..., "100")
    pub fn padded(&self) -> String {
        format!("{:02}", self.0)
    }
}

impl std::fmt::Display for ChunkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based line number within the body (header lines are not counted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyLine(usize);

impl BodyLine {
    /// First line of the body
    pub const FIRST: BodyLine = BodyLine(1);

    pub fn new(line: usize) -> Self {
        debug_assert!(line >= 1, "body lines are 1-based");
        BodyLine(line)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// Convert to a 0-based line offset into the whole input
    pub fn to_input_offset(&self, header_lines: usize) -> usize {
        header_lines + self.0 - 1
    }
}

impl std::ops::Add<usize> for BodyLine {
    type Output = BodyLine;

    fn add(self, rhs: usize) -> BodyLine {
        BodyLine(self.0 + rhs)
    }
}

impl std::fmt::Display for BodyLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of body lines `[start, end]`; never empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    start: BodyLine,
    end: BodyLine,
}

impl LineRange {
    /// Range of `len` lines beginning at `start`. Returns `None` for `len == 0`.
    pub fn starting_at(start: BodyLine, len: usize) -> Option<Self> {
        (len > 0).then(|| LineRange {
            start,
            end: start + (len - 1),
        })
    }

    pub fn start(&self) -> BodyLine {
        self.start
    }

    pub fn end(&self) -> BodyLine {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0 + 1
    }

    /// A `LineRange` always holds at least one line
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First body line after this range
    pub fn next_start(&self) -> BodyLine {
        self.end + 1
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
