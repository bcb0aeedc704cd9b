//! In-memory view of the input script
//!
//! The whole input is loaded once and indexed by line start offsets. The header
//! and every body slice are then plain byte ranges into that buffer, so line
//! terminators (and a final unterminated line) are reproduced byte-for-byte.

use crate::config::LineLayout;
use crate::domain::LineRange;
use crate::error::{Result, SplitError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ScriptLines {
    data: Vec<u8>,
    /// Byte offset where each line begins, plus a final entry at `data.len()`
    bounds: Vec<usize>,
}

impl ScriptLines {
    /// Load a script from disk
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| SplitError::InputRead {
            file: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(data))
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        let mut bounds = Vec::with_capacity(data.len() / 64 + 2);
        bounds.push(0);
        for (pos, &byte) in data.iter().enumerate() {
            if byte == b'\n' {
                bounds.push(pos + 1);
            }
        }
        // Trailing bytes without a newline still form a line
        if bounds.last() != Some(&data.len()) {
            bounds.push(data.len());
        }
        Self { data, bounds }
    }

    pub fn total_lines(&self) -> usize {
        self.bounds.len() - 1
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of input lines `[first, first + count)`, 0-based
    fn span(&self, first: usize, count: usize) -> &[u8] {
        &self.data[self.bounds[first]..self.bounds[first + count]]
    }

    /// The shared header. Caller must have checked `total_lines >= header_lines`.
    pub fn header(&self, layout: &LineLayout) -> &[u8] {
        self.span(0, layout.header_lines())
    }

    /// Everything after the header
    pub fn body(&self, layout: &LineLayout) -> &[u8] {
        &self.data[self.bounds[layout.header_lines()]..]
    }

    /// Body lines covered by `range`
    pub fn body_lines(&self, layout: &LineLayout, range: LineRange) -> &[u8] {
        let first = range.start().to_input_offset(layout.header_lines());
        self.span(first, range.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyLine;

    fn layout(header: usize, group: usize) -> LineLayout {
        LineLayout::new(header, group).unwrap()
    }

    #[test]
    fn test_counts_terminated_lines() {
        let script = ScriptLines::from_bytes(b"a\nb\nc\n".to_vec());
        assert_eq!(script.total_lines(), 3);
    }

    #[test]
    fn test_counts_unterminated_last_line() {
        let script = ScriptLines::from_bytes(b"a\nb\nc".to_vec());
        assert_eq!(script.total_lines(), 3);
        assert_eq!(script.body(&layout(2, 1)), b"c");
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        let script = ScriptLines::from_bytes(Vec::new());
        assert_eq!(script.total_lines(), 0);
    }

    #[test]
    fn test_header_and_body_slices() {
        let script = ScriptLines::from_bytes(b"h1\nh2\nb1\nb2\nb3\nb4\n".to_vec());
        let layout = layout(2, 2);

        assert_eq!(script.header(&layout), b"h1\nh2\n");
        assert_eq!(script.body(&layout), b"b1\nb2\nb3\nb4\n");

        let range = LineRange::starting_at(BodyLine::new(3), 2).unwrap();
        assert_eq!(script.body_lines(&layout, range), b"b3\nb4\n");
    }

    #[test]
    fn test_crlf_preserved() {
        let script = ScriptLines::from_bytes(b"h\r\nb\r\n".to_vec());
        let layout = layout(1, 1);
        assert_eq!(script.header(&layout), b"h\r\n");
        assert_eq!(script.body(&layout), b"b\r\n");
    }
}
