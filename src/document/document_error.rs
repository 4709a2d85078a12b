use std::path::{Path, PathBuf};

use thiserror::Error;

use super::encoding::Encoding;

/// Error type for loading and storing `TextDocument`-s
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file couldn't be read or written
    #[error("Cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content isn't valid under the detected or declared encoding
    #[error("Cannot decode {} as {encoding}: {source}", describe(path.as_deref()))]
    Decode {
        /// Missing when decoding in-memory content
        path: Option<PathBuf>,
        encoding: Encoding,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The document contains a character the target encoding can't represent
    #[error("Cannot encode {character:?} as {encoding}")]
    Encode { encoding: Encoding, character: char },
}

fn describe(path: Option<&Path>) -> String {
    path.map_or_else(|| "content".to_owned(), |path| format!("'{}'", path.display()))
}
