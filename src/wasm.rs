//! Expose the `partial-reformat` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::TextDocument;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::reformat_changed_lines` for strings.
#[wasm_bindgen(js_name = reformatChangedLines)]
#[must_use]
pub fn reformat_changed_lines(reference: &str, edited: &str, formatted: &str) -> String {
    set_panic_hook();

    let edited = TextDocument::from_str(edited);
    let result = crate::reformat_changed_lines(
        &TextDocument::from_str(reference),
        &edited,
        &TextDocument::from_str(formatted),
    );

    String::from_utf8(result.to_bytes().unwrap_or_default())
        .unwrap_or_else(|_| result.string().to_owned())
}

/// Reformat the changed lines of file contents. Relies on
/// `crate::reformat_changed_lines` for texts and returns `edited` as-is if any
/// of the documents is binary.
///
/// # Arguments
///
/// - `reference`: The earlier version the edits are compared against.
/// - `edited`: The current version of the file.
/// - `formatted`: The current version after running a formatter on it.
///
/// # Returns
///
/// The edited file with only its changed regions reformatted.
#[wasm_bindgen(js_name = genericReformatChangedLines)]
#[must_use]
pub fn generic_reformat_changed_lines(
    reference: &[u8],
    edited: &[u8],
    formatted: &[u8],
) -> Vec<u8> {
    set_panic_hook();

    let (Some(reference), Some(edited_document), Some(formatted)) = (
        text_or_nothing(reference),
        text_or_nothing(edited),
        text_or_nothing(formatted),
    ) else {
        return edited.to_vec();
    };

    crate::reformat_changed_lines(&reference, &edited_document, &formatted)
        .to_bytes()
        .unwrap_or_else(|_| edited.to_vec())
}

/// Decode file content, or `None` if it looks like a binary file which
/// mustn't be touched.
fn text_or_nothing(data: &[u8]) -> Option<TextDocument> {
    // NUL is valid UTF-8 but never appears in source code
    if data.contains(&0) {
        return None;
    }

    TextDocument::from_bytes(data).ok()
}

/// WASM wrapper around `crate::unified_diff`.
#[wasm_bindgen(js_name = unifiedDiff)]
#[must_use]
pub fn unified_diff(old: &str, new: &str, from_name: &str, to_name: &str) -> String {
    set_panic_hook();

    crate::unified_diff(
        &TextDocument::from_str(old),
        &TextDocument::from_str(new),
        from_name,
        to_name,
        3,
    )
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
