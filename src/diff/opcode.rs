use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff::line_operation::LineOperation;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// A maximal run of equal or of changed lines between two documents. The
/// ranges are 0-based, half-open line index ranges into the old and the new
/// document. Consecutive opcodes are contiguous on both sides.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpcodeTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl Opcode {
    fn new(equal: bool, old: Range<usize>, new: Range<usize>) -> Self {
        let tag = match (equal, old.is_empty(), new.is_empty()) {
            (true, _, _) => OpcodeTag::Equal,
            (false, false, false) => OpcodeTag::Replace,
            (false, false, true) => OpcodeTag::Delete,
            (false, true, _) => OpcodeTag::Insert,
        };

        Self { tag, old, new }
    }

    #[must_use]
    pub fn is_equal(&self) -> bool { self.tag == OpcodeTag::Equal }
}

/// Group single-line operations into opcodes. Deletions and insertions
/// between two equal runs are collected into one opcode.
pub fn group_operations(operations: &[LineOperation]) -> Vec<Opcode> {
    let mut result = Vec::new();
    let (mut old_start, mut new_start) = (0, 0);
    let (mut old_end, mut new_end) = (0, 0);
    let mut current_is_equal = None;

    for operation in operations {
        if current_is_equal.is_some_and(|is_equal| is_equal != operation.is_equal()) {
            result.push(Opcode::new(
                !operation.is_equal(),
                old_start..old_end,
                new_start..new_end,
            ));
            (old_start, new_start) = (old_end, new_end);
        }

        current_is_equal = Some(operation.is_equal());
        let (old_advance, new_advance) = operation.advance();
        old_end += old_advance;
        new_end += new_advance;
    }

    if let Some(is_equal) = current_is_equal {
        result.push(Opcode::new(is_equal, old_start..old_end, new_start..new_end));
    }

    result
}
