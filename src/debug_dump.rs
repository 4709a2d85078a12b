use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use log::debug;

use crate::{DiffChunk, TextDocument};

const BORDER_WIDTH: usize = 80;

/// Print the chunks to stdout for troubleshooting an unexpected reconciliation
/// result, see [`write_debug_dump`] for the format.
pub fn debug_dump(
    chunks: &[DiffChunk],
    original: &TextDocument,
    reformatted: &TextDocument,
    accepted_lines: &BTreeSet<usize>,
) -> io::Result<()> {
    write_debug_dump(
        &mut io::stdout().lock(),
        chunks,
        original,
        reformatted,
        accepted_lines,
    )
}

/// Write a bordered report of `chunks` into `out`.
///
/// Each chunk starts with a line of 80 dashes, followed by its original lines
/// and then its replacement lines:
///
/// ```not_rust
/// --------------------------------------------------------------------------------
/// *-   3 original line on an accepted line number
///  -   4 original line
///  +     replacement line
/// --------------------------------------------------------------------------------
/// ```
///
/// Tools parse this output, the layout must stay stable.
pub fn write_debug_dump<W: Write>(
    out: &mut W,
    chunks: &[DiffChunk],
    original: &TextDocument,
    reformatted: &TextDocument,
    accepted_lines: &BTreeSet<usize>,
) -> io::Result<()> {
    debug!(
        "Dumping {} chunks of {} original and {} reformatted lines",
        chunks.len(),
        original.len(),
        reformatted.len()
    );

    let border = "-".repeat(BORDER_WIDTH);
    for chunk in chunks {
        writeln!(out, "{border}")?;
        for (line_number, line) in (chunk.start_line..).zip(&chunk.original_lines) {
            let marker = if accepted_lines.contains(&line_number) {
                '*'
            } else {
                ' '
            };
            writeln!(out, "{marker}-{line_number:4} {line}")?;
        }
        for line in &chunk.replacement_lines {
            writeln!(out, " +     {line}")?;
        }
    }
    writeln!(out, "{border}")
}
