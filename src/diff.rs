mod line_operation;
mod myers_diff;
pub mod opcode;

use std::collections::BTreeSet;

use log::debug;
use myers_diff::myers_diff;
use opcode::{Opcode, group_operations};

use crate::{DiffChunk, TextDocument};

/// Compute a line diff between two documents as a list of contiguous opcodes
/// covering both documents.
#[must_use]
pub fn diff_opcodes(old: &TextDocument, new: &TextDocument) -> Vec<Opcode> {
    group_operations(&myers_diff(old.lines(), new.lines()))
}

/// Split the differences between `original` and its reformatted version into
/// chunks for [`crate::choose_lines`]. Every unchanged line becomes a chunk of
/// its own while each changed region becomes a single chunk.
#[must_use]
pub fn diff_chunks(original: &TextDocument, formatted: &TextDocument) -> Vec<DiffChunk> {
    let opcodes = diff_opcodes(original, formatted);
    let original_lines = original.lines();
    let formatted_lines = formatted.lines();

    let mut chunks = Vec::with_capacity(opcodes.len());
    for opcode in &opcodes {
        if opcode.is_equal() {
            chunks.extend(opcode.old.clone().map(|index| {
                let line = &original_lines[index];
                DiffChunk::new(index + 1, [line], [line])
            }));
        } else {
            chunks.push(DiffChunk::new(
                opcode.old.start + 1,
                &original_lines[opcode.old.clone()],
                &formatted_lines[opcode.new.clone()],
            ));
        }
    }

    debug!(
        "Split the diff of {} original and {} reformatted lines into {} chunks",
        original.len(),
        formatted.len(),
        chunks.len()
    );

    chunks
}

/// Find the 1-based line numbers of `current` which differ from `reference`,
/// extended by `context_lines` lines before and after each changed region.
/// Lines deleted from `reference` only mark their neighbours in `current` when
/// context is requested.
#[must_use]
pub fn edited_line_numbers(
    reference: &TextDocument,
    current: &TextDocument,
    context_lines: usize,
) -> BTreeSet<usize> {
    let last_line = current.len();

    diff_opcodes(reference, current)
        .iter()
        .filter(|opcode| !opcode.is_equal())
        .flat_map(|opcode| {
            let first = (opcode.new.start + 1).saturating_sub(context_lines).max(1);
            let last = (opcode.new.end + context_lines).min(last_line);
            first..=last
        })
        .collect()
}
