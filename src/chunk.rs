use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous edit of the original document: the lines starting at the
/// 1-based `start_line` of the original document and the lines replacing
/// them. Unchanged regions are chunks whose two sides are identical.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffChunk {
    pub start_line: usize,
    pub original_lines: Vec<String>,
    pub replacement_lines: Vec<String>,
}

impl DiffChunk {
    #[must_use]
    pub fn new<O, R>(start_line: usize, original_lines: O, replacement_lines: R) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        debug_assert!(start_line >= 1, "Line numbers start from 1");

        Self {
            start_line,
            original_lines: original_lines.into_iter().map(Into::into).collect(),
            replacement_lines: replacement_lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The line numbers of the original document this chunk covers. A chunk
    /// that only inserts lines covers the single line it's inserted at.
    #[must_use]
    pub fn original_line_range(&self) -> RangeInclusive<usize> {
        self.start_line..=self.start_line + self.original_lines.len().max(1) - 1
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool { self.original_lines == self.replacement_lines }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_original_line_range() {
        assert_eq!(DiffChunk::new(3, ["a", "b"], ["c"]).original_line_range(), 3..=4);
        assert_eq!(DiffChunk::new(1, ["a"], ["a"]).original_line_range(), 1..=1);
        assert_eq!(
            DiffChunk::new(5, Vec::<String>::new(), ["inserted"]).original_line_range(),
            5..=5
        );
    }

    #[test]
    fn test_is_unchanged() {
        assert!(DiffChunk::new(1, ["a"], ["a"]).is_unchanged());
        assert!(!DiffChunk::new(1, ["a"], ["A"]).is_unchanged());
    }
}
