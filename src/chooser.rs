use std::collections::BTreeSet;

use log::debug;

use crate::{DiffChunk, TextDocument};

/// Pick the lines of each chunk: the replacement lines if any line the chunk
/// covers in the original document is in `accepted_lines`, the original lines
/// otherwise. A chunk is never split, one accepted line is enough to replace
/// all of it.
///
/// `chunks` must be ordered by their start line and must not overlap.
pub fn choose_lines<'a>(
    chunks: &'a [DiffChunk],
    accepted_lines: &'a BTreeSet<usize>,
) -> impl Iterator<Item = &'a str> + 'a {
    debug_assert!(
        chunks
            .windows(2)
            .all(|pair| pair[0].start_line + pair[0].original_lines.len() <= pair[1].start_line),
        "Chunks must be ordered and must not overlap"
    );

    chunks
        .iter()
        .flat_map(move |chunk| {
            if accepted_lines
                .range(chunk.original_line_range())
                .next()
                .is_some()
            {
                &chunk.replacement_lines
            } else {
                &chunk.original_lines
            }
        })
        .map(String::as_str)
}

/// Reassemble a document from `chunks`, keeping the original content of every
/// chunk without accepted lines, see [`choose_lines`]. The result carries no
/// metadata from either side, use [`TextDocument::with_metadata_of`] to
/// restore it before writing.
#[must_use]
pub fn reconcile_chunks(chunks: &[DiffChunk], accepted_lines: &BTreeSet<usize>) -> TextDocument {
    let chosen = TextDocument::from_lines(choose_lines(chunks, accepted_lines));

    debug!(
        "Chose {} lines from {} chunks with {} accepted lines",
        chosen.len(),
        chunks.len(),
        accepted_lines.len()
    );

    chosen
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn chunks() -> Vec<DiffChunk> {
        vec![
            DiffChunk::new(1, ["a"], ["a"]),
            DiffChunk::new(2, ["b"], ["B"]),
            DiffChunk::new(3, ["c"], ["c"]),
        ]
    }

    #[test_case(&[2], &["a", "B", "c"]; "changed line accepted")]
    #[test_case(&[], &["a", "b", "c"]; "nothing accepted")]
    #[test_case(&[1, 3], &["a", "b", "c"]; "only unchanged lines accepted")]
    #[test_case(&[1, 2, 3], &["a", "B", "c"]; "everything accepted")]
    #[test_case(&[7], &["a", "b", "c"]; "line outside of the document")]
    fn test_reconcile_chunks(accepted_lines: &[usize], expected: &[&str]) {
        let accepted_lines = accepted_lines.iter().copied().collect();

        let result = reconcile_chunks(&chunks(), &accepted_lines);

        assert_eq!(result.lines(), expected);
    }

    #[test]
    fn test_no_chunks() {
        let result = reconcile_chunks(&[], &BTreeSet::from([1, 2]));

        assert_eq!(result, TextDocument::from_str(""));
        assert!(result.is_empty());
    }

    #[test]
    fn test_whole_chunk_is_replaced() {
        let chunks = vec![
            DiffChunk::new(1, ["def f(a,", "      b):"], ["def f(a, b):"]),
            DiffChunk::new(3, ["  return a"], ["  return a"]),
        ];

        assert_eq!(
            choose_lines(&chunks, &BTreeSet::from([2])).collect::<Vec<_>>(),
            vec!["def f(a, b):", "  return a"]
        );
        assert_eq!(
            choose_lines(&chunks, &BTreeSet::from([3])).collect::<Vec<_>>(),
            vec!["def f(a,", "      b):", "  return a"]
        );
    }

    #[test]
    fn test_inserted_lines() {
        let chunks = vec![
            DiffChunk::new(1, ["import os"], ["import os"]),
            DiffChunk::new(2, Vec::<String>::new(), [""]),
            DiffChunk::new(2, ["def f(): pass"], ["def f(): pass"]),
        ];

        assert_eq!(
            choose_lines(&chunks, &BTreeSet::from([2])).collect::<Vec<_>>(),
            vec!["import os", "", "def f(): pass"]
        );
        assert_eq!(
            choose_lines(&chunks, &BTreeSet::from([1])).collect::<Vec<_>>(),
            vec!["import os", "def f(): pass"]
        );
    }

    #[test]
    fn test_result_has_no_metadata() {
        let chunks = vec![DiffChunk::new(1, ["a"], ["b"])];

        let result = reconcile_chunks(&chunks, &BTreeSet::from([1]));

        assert_eq!(result.mtime(), "");
        assert_eq!(result.lines(), ["b"]);
    }
}
