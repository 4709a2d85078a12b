/// A single step of a line diff, referring to lines by their 0-based index in
/// the old and the new document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOperation {
    Equal { old_index: usize, new_index: usize },
    Delete { old_index: usize },
    Insert { new_index: usize },
}

impl LineOperation {
    #[must_use]
    pub fn is_equal(&self) -> bool { matches!(self, LineOperation::Equal { .. }) }

    /// How many lines the operation consumes from the old and the new document.
    #[must_use]
    pub fn advance(&self) -> (usize, usize) {
        match self {
            LineOperation::Equal { .. } => (1, 1),
            LineOperation::Delete { .. } => (1, 0),
            LineOperation::Insert { .. } => (0, 1),
        }
    }
}
