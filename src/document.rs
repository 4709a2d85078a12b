pub mod document_error;
pub mod encoding;
pub mod mtime;
pub mod newline;
mod split_lines;

use std::{
    any::Any,
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
};

use document_error::DocumentError;
use encoding::Encoding;
use log::{debug, info};
use mtime::format_mtime;
use newline::Newline;
use split_lines::split_lines;

use crate::utils::join_lines::join_lines;

/// An immutable multi-line text document, available both as a single string
/// and as a list of lines without line endings.
///
/// Besides the content, a document remembers how it was loaded: its encoding,
/// its line terminator, whether its last line was terminated and optionally
/// the modification time of the file it came from. None of these take part
/// in equality, two documents are equal when their lines are.
#[derive(Clone, Default)]
pub struct TextDocument {
    lines: Vec<String>,
    string: String,
    encoding: Encoding,
    newline: Newline,
    final_newline: bool,
    mtime: String,
}

impl TextDocument {
    /// Create a document by splitting `content` into lines. A line ending at
    /// the very end of `content` is optional: `"a\nb\n"` and `"a\nb"` both
    /// result in two lines. The newline style is detected from `content`,
    /// and [`TextDocument::to_bytes`] only terminates the last line if
    /// `content` did.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(content: &str) -> Self {
        Self::from_lines(split_lines(content))
            .with_newline(Newline::detect(content))
            .with_final_newline(content.is_empty() || content.ends_with(['\n', '\r']))
    }

    /// Create a document from lines which must not contain line endings.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let string = join_lines(&lines);

        Self {
            lines,
            string,
            final_newline: true,
            ..Self::default()
        }
    }

    /// Decode raw file content. The encoding is detected from the byte order
    /// mark, falling back to UTF-8.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DocumentError> {
        let encoding = Encoding::detect(data);
        Self::decode(data, encoding).map_err(|source| DocumentError::Decode {
            path: None,
            encoding,
            source,
        })
    }

    /// Read a text file, detecting its encoding and newline style and storing
    /// its last modification time.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let data = read_file(path)?;
        Self::load(path, &data, Encoding::detect(&data))
    }

    /// Read a text file using the given `encoding` instead of detecting it.
    pub fn from_file_with_encoding(
        path: impl AsRef<Path>,
        encoding: Encoding,
    ) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let data = read_file(path)?;
        Self::load(path, &data, encoding)
    }

    fn load(path: &Path, data: &[u8], encoding: Encoding) -> Result<Self, DocumentError> {
        let modified = fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| DocumentError::Io {
                path: path.to_owned(),
                source,
            })?;

        let document = Self::decode(data, encoding)
            .map_err(|source| DocumentError::Decode {
                path: Some(path.to_owned()),
                encoding,
                source,
            })?
            .with_mtime(format_mtime(modified));

        debug!(
            "Read {} lines from {} ({}, newline {})",
            document.lines.len(),
            path.display(),
            document.encoding,
            document.newline
        );

        Ok(document)
    }

    fn decode(data: &[u8], encoding: Encoding) -> Result<Self, std::str::Utf8Error> {
        let content = encoding.decode(data)?;
        Ok(Self::from_str(&content).with_encoding(encoding))
    }

    #[must_use]
    pub fn with_encoding(self, encoding: Encoding) -> Self { Self { encoding, ..self } }

    #[must_use]
    pub fn with_newline(self, newline: Newline) -> Self { Self { newline, ..self } }

    #[must_use]
    pub fn with_final_newline(self, final_newline: bool) -> Self {
        Self {
            final_newline,
            ..self
        }
    }

    #[must_use]
    pub fn with_mtime(self, mtime: impl Into<String>) -> Self {
        Self {
            mtime: mtime.into(),
            ..self
        }
    }

    /// Take over the encoding, newline style, final newline and modification
    /// time of `other`, keeping the content of `self`.
    #[must_use]
    pub fn with_metadata_of(self, other: &TextDocument) -> Self {
        Self {
            encoding: other.encoding,
            newline: other.newline,
            final_newline: other.final_newline,
            mtime: other.mtime.clone(),
            ..self
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    /// The content with a `\n` after each line.
    #[must_use]
    pub fn string(&self) -> &str { &self.string }

    #[must_use]
    pub fn encoding(&self) -> Encoding { self.encoding }

    #[must_use]
    pub fn newline(&self) -> Newline { self.newline }

    /// Whether the last line is followed by a line ending when written.
    #[must_use]
    pub fn final_newline(&self) -> bool { self.final_newline }

    /// The modification time of the file the document was read from, or an
    /// empty string.
    #[must_use]
    pub fn mtime(&self) -> &str { &self.mtime }

    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Compare with a value of any type. Returns `None` when `other` isn't a
    /// `TextDocument` and the two can't be compared.
    #[must_use]
    pub fn try_eq(&self, other: &dyn Any) -> Option<bool> {
        other
            .downcast_ref::<TextDocument>()
            .map(|other| self == other)
    }

    /// Encode the document using its own encoding and newline style. The
    /// last line is only terminated if the document had a final newline.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let newline = self.newline.as_str();
        let mut text = self.lines.join(newline);
        if self.final_newline && !self.lines.is_empty() {
            text.push_str(newline);
        }

        self.encoding
            .encode(&text)
            .map(std::borrow::Cow::into_owned)
            .map_err(|character| DocumentError::Encode {
                encoding: self.encoding,
                character,
            })
    }

    /// Write the document to `path` using its own encoding and newline style.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let data = self.to_bytes()?;

        info!("Writing {} bytes into {}", data.len(), path.display());
        fs::write(path, data).map_err(|source| DocumentError::Io {
            path: path.to_owned(),
            source,
        })
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, DocumentError> {
    fs::read(path).map_err(|source| DocumentError::Io {
        path: PathBuf::from(path),
        source,
    })
}

impl PartialEq for TextDocument {
    fn eq(&self, other: &Self) -> bool { self.lines == other.lines }
}

impl Eq for TextDocument {}

impl Debug for TextDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TextDocument([{} lines])", self.lines.len())
    }
}

impl<'a> From<&'a str> for TextDocument {
    fn from(text: &'a str) -> Self { Self::from_str(text) }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self { Self::from_str(&text) }
}
