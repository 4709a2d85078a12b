use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The line terminator a document was loaded with. It's used to write the
/// document back in the same style it was read.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl Newline {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
            Newline::Cr => "\r",
        }
    }

    /// Returns the first line terminator found in `text`, or `Lf` if the text
    /// has none.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let bytes = text.as_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => return Newline::Lf,
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => return Newline::CrLf,
                b'\r' => return Newline::Cr,
                _ => {}
            }
        }

        Newline::default()
    }
}

impl Display for Newline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Newline::Lf => write!(f, "\\n"),
            Newline::CrLf => write!(f, "\\r\\n"),
            Newline::Cr => write!(f, "\\r"),
        }
    }
}
