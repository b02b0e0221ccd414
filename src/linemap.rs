//! Mapping between flat codepoint indices and (row, column) pairs
//!
//! All offsets in this crate are *codepoint* indices into the source, never
//! byte offsets. Rows are 1-based, columns 0-based, and a line terminator
//! belongs to the line it ends.
use serde::Serialize;

use crate::error::{Error, Result};

/// A position inside of the source code
#[derive(Debug, Default, Hash, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TextPos {
    /// Codepoint index into the source
    pub index: usize,

    /// 1-based line number
    pub row: usize,

    /// 0-based column (in codepoints)
    pub col: usize,
}

impl std::fmt::Display for TextPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Maps codepoint indices to (row, column) pairs and vice versa
///
/// The internal `line_starts` list is strictly increasing, starts at 0 and
/// carries a past-the-end sentinel equal to the source length, so that
/// positions one past the last character resolve cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMap {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineMap {
    /// Build the line map in a single pass over the source
    ///
    /// Lines are split on `\n` (which covers `\r\n` too, the `\r` staying on
    /// the same line as its `\n`).
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for c in source.chars() {
            len += 1;
            if c == '\n' {
                line_starts.push(len);
            }
        }
        if *line_starts.last().expect("line_starts is never empty") != len {
            line_starts.push(len);
        }
        Self { line_starts, len }
    }

    /// The length of the source in codepoints
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.len
    }

    /// Convert a codepoint index into a (1-based row, 0-based column) pair
    ///
    /// The index can be at most `source_len()`; an index equal to the length
    /// resolves to the first column past the last line.
    pub fn index_to_row_col(&self, index: usize) -> Result<(usize, usize)> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let row = self.line_starts.partition_point(|&start| start <= index);
        Ok((row, index - self.line_starts[row - 1]))
    }

    /// Convert a (1-based row, 0-based column) pair back into a codepoint index
    pub fn row_col_to_index(&self, row: usize, col: usize) -> Result<usize> {
        let start = self
            .line_starts
            .get(row.wrapping_sub(1))
            .ok_or(Error::IndexOutOfBounds {
                index: row,
                len: self.line_starts.len(),
            })?;
        Ok(start + col)
    }

    /// Full position (index, row, col) for a codepoint index
    pub fn pos(&self, index: usize) -> Result<TextPos> {
        let (row, col) = self.index_to_row_col(index)?;
        Ok(TextPos { index, row, col })
    }
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_bijection() {
        let source = "first\nsecond\r\nthird";
        let linemap = LineMap::new(source);
        for index in 0..=source.chars().count() {
            let (row, col) = linemap.index_to_row_col(index).unwrap();
            assert_eq!(linemap.row_col_to_index(row, col).unwrap(), index);
        }
    }

    #[test]
    fn test_rows_and_cols() {
        let linemap = LineMap::new("ab\ncd\n");
        assert_eq!(linemap.index_to_row_col(0).unwrap(), (1, 0));
        assert_eq!(linemap.index_to_row_col(2).unwrap(), (1, 2)); // the `\n` belongs to line 1
        assert_eq!(linemap.index_to_row_col(3).unwrap(), (2, 0));
        assert_eq!(linemap.index_to_row_col(5).unwrap(), (2, 2));
    }

    #[test]
    fn test_past_end() {
        // one past the end lands on a virtual next line
        let linemap = LineMap::new("ab\ncd\n");
        assert_eq!(linemap.index_to_row_col(6).unwrap(), (3, 0));
        let linemap = LineMap::new("ab");
        assert_eq!(linemap.index_to_row_col(2).unwrap(), (2, 0));
        let linemap = LineMap::new("");
        assert_eq!(linemap.index_to_row_col(0).unwrap(), (1, 0));
    }

    #[test]
    fn test_codepoint_indices() {
        // α is two bytes but one codepoint
        let linemap = LineMap::new("α\nβ");
        assert_eq!(linemap.index_to_row_col(1).unwrap(), (1, 1));
        assert_eq!(linemap.index_to_row_col(2).unwrap(), (2, 0));
    }

    #[test]
    fn test_out_of_bounds() {
        let linemap = LineMap::new("ab");
        assert!(linemap.index_to_row_col(3).is_err());
    }
}
