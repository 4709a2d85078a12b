use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_INITIAL_CONTEXT_LINES: usize = 0;

/// Settings for [`crate::reformat_edited_lines`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatOptions {
    /// The number of unchanged lines around each edit which are also allowed
    /// to be reformatted in the first attempt.
    #[cfg_attr(feature = "serde", serde(default = "default_initial_context_lines"))]
    pub initial_context_lines: usize,

    /// The largest context to try before giving up. Defaults to the length
    /// of the edited document, at which point every line is reformatted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_context_lines: Option<usize>,
}

fn default_initial_context_lines() -> usize {
    debug!("Using default initial context lines: {DEFAULT_INITIAL_CONTEXT_LINES}");
    DEFAULT_INITIAL_CONTEXT_LINES
}

impl ReformatOptions {
    #[must_use]
    pub fn with_context_lines(context_lines: usize) -> Self {
        Self {
            initial_context_lines: context_lines,
            max_context_lines: Some(context_lines),
        }
    }

    /// The last context size to try for a document of `line_count` lines.
    #[must_use]
    pub fn max_context_lines_for(&self, line_count: usize) -> usize {
        self.max_context_lines
            .unwrap_or(line_count)
            .max(self.initial_context_lines)
    }
}

impl Default for ReformatOptions {
    fn default() -> Self {
        Self {
            initial_context_lines: default_initial_context_lines(),
            max_context_lines: None,
        }
    }
}
