pub mod reformat_error;
pub mod reformat_options;

use std::collections::BTreeSet;

use log::{Level, debug, log_enabled};
use reformat_error::ReformatError;
use reformat_options::ReformatOptions;

use crate::{
    DiffChunk, TextDocument,
    debug_dump::write_debug_dump,
    diff::{diff_chunks, edited_line_numbers},
    reconcile_chunks,
};

/// Apply the reformatting in `formatted` only to the lines of `edited` which
/// changed since `reference`, leaving every other line untouched.
///
/// The result keeps the encoding, newline style and modification time of
/// `edited`.
///
/// ```
/// use partial_reformat::{TextDocument, reformat_changed_lines};
///
/// let reference = TextDocument::from_str("a=1\npass\nb=2\n");
/// let edited = TextDocument::from_str("a=1\npass\nb=3\n");
/// let formatted = TextDocument::from_str("a = 1\npass\nb = 3\n");
///
/// let result = reformat_changed_lines(&reference, &edited, &formatted);
/// assert_eq!(result.string(), "a=1\npass\nb = 3\n");
/// ```
#[must_use]
pub fn reformat_changed_lines(
    reference: &TextDocument,
    edited: &TextDocument,
    formatted: &TextDocument,
) -> TextDocument {
    let chunks = diff_chunks(edited, formatted);
    let accepted_lines = edited_line_numbers(reference, edited, 0);

    reconcile_chunks(&chunks, &accepted_lines).with_metadata_of(edited)
}

/// Like [`reformat_changed_lines`] but checks each result with `verify`,
/// which receives the edited and the partially reformatted document. When
/// the result is rejected, the lines around the edits are also reformatted,
/// widening the context by one line at a time as set by `options`.
///
/// A formatter may move code across the boundary of an edit, for example by
/// joining an edited line with an unchanged one. Taking only half of such a
/// change breaks the code, which the verifier is expected to detect.
pub fn reformat_edited_lines<F>(
    reference: &TextDocument,
    edited: &TextDocument,
    formatted: &TextDocument,
    options: &ReformatOptions,
    mut verify: F,
) -> Result<TextDocument, ReformatError>
where
    F: FnMut(&TextDocument, &TextDocument) -> bool,
{
    let chunks = diff_chunks(edited, formatted);
    let max_context_lines = options.max_context_lines_for(edited.len());

    for context_lines in options.initial_context_lines..=max_context_lines {
        let accepted_lines = edited_line_numbers(reference, edited, context_lines);
        debug!(
            "Reformatting {} edited lines with {context_lines} lines of context",
            accepted_lines.len()
        );

        let chosen = reconcile_chunks(&chunks, &accepted_lines).with_metadata_of(edited);
        if verify(edited, &chosen) {
            return Ok(chosen);
        }

        log_rejected(&chunks, edited, formatted, &accepted_lines);
        if accepted_lines.len() >= edited.len() {
            // a wider context can't change the result anymore
            return Err(ReformatError::NotEquivalent { context_lines });
        }
    }

    Err(ReformatError::NotEquivalent {
        context_lines: max_context_lines,
    })
}

fn log_rejected(
    chunks: &[DiffChunk],
    edited: &TextDocument,
    formatted: &TextDocument,
    accepted_lines: &BTreeSet<usize>,
) {
    if !log_enabled!(Level::Debug) {
        return;
    }

    let mut report = Vec::new();
    if write_debug_dump(&mut report, chunks, edited, formatted, accepted_lines).is_ok() {
        debug!(
            "Verification rejected the result, chosen chunks:\n{}",
            String::from_utf8_lossy(&report)
        );
    }
}
