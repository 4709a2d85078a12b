use similar::{Algorithm, TextDiff};

use crate::TextDocument;

/// Render the changes between two documents in the unified diff format with
/// `context_lines` unchanged lines around each change. Returns an empty string
/// if the documents are equal.
///
/// ```
/// use partial_reformat::{TextDocument, unified_diff};
///
/// let old = TextDocument::from_str("a\nb\nc\n");
/// let new = TextDocument::from_str("a\nB\nc\n");
///
/// assert_eq!(
///     unified_diff(&old, &new, "file.py", "file.py", 3),
///     "--- file.py\n+++ file.py\n@@ -1,3 +1,3 @@\n a\n-b\n+B\n c\n"
/// );
/// ```
#[must_use]
pub fn unified_diff(
    old: &TextDocument,
    new: &TextDocument,
    from_name: &str,
    to_name: &str,
    context_lines: usize,
) -> String {
    let old_lines: Vec<&str> = old.lines().iter().map(String::as_str).collect();
    let new_lines: Vec<&str> = new.lines().iter().map(String::as_str).collect();

    TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&old_lines, &new_lines)
        .unified_diff()
        .context_radius(context_lines)
        // lines are stored without their terminators
        .missing_newline_hint(false)
        .header(from_name, to_name)
        .to_string()
}
