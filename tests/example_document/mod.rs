use partial_reformat::{ReformatOptions, TextDocument, reformat_edited_lines};
use pretty_assertions::assert_eq;
use serde::Deserialize;

/// A reformatting scenario read from `tests/resources`.
#[derive(Debug, Deserialize)]
pub struct ExampleDocument {
    name: String,
    #[serde(default)]
    context_lines: usize,
    reference: String,
    edited: String,
    formatted: String,
    expected: String,
}

impl ExampleDocument {
    pub fn name(&self) -> &str { &self.name }

    pub fn reference(&self) -> TextDocument { TextDocument::from_str(&self.reference) }

    pub fn edited(&self) -> TextDocument { TextDocument::from_str(&self.edited) }

    pub fn formatted(&self) -> TextDocument { TextDocument::from_str(&self.formatted) }

    pub fn expected(&self) -> TextDocument { TextDocument::from_str(&self.expected) }

    pub fn reformat(&self) -> TextDocument {
        reformat_edited_lines(
            &self.reference(),
            &self.edited(),
            &self.formatted(),
            &ReformatOptions::with_context_lines(self.context_lines),
            |_, _| true,
        )
        .unwrap_or_else(|error| panic!("'{}' failed: {error}", self.name))
    }

    pub fn assert_eq(&self, result: &TextDocument) {
        assert_eq!(
            result.string(),
            self.expected().string(),
            "'{}' produced an unexpected result",
            self.name
        );
    }
}
