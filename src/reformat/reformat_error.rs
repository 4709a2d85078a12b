use thiserror::Error;

/// Error type for reformatting the edited parts of a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReformatError {
    /// None of the attempted contexts produced a document the verifier
    /// accepted
    #[error(
        "Cannot reformat only the edited lines: the result was rejected with every context \
         size up to {context_lines} lines"
    )]
    NotEquivalent {
        /// The largest context size which was tried
        context_lines: usize,
    },
}
