use std::{borrow::Cow, fmt::Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Text encodings a document can be read from and written back to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    /// UTF-8 prefixed with a byte order mark.
    Utf8Sig,
    Latin1,
}

impl Encoding {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Sig => "utf-8-sig",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Guess the encoding of raw file content. Only the byte order mark is
    /// considered, everything else is assumed to be UTF-8.
    #[must_use]
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(UTF8_BOM) {
            Encoding::Utf8Sig
        } else {
            Encoding::Utf8
        }
    }

    /// Decode `data`. A leading byte order mark is stripped for `Utf8Sig`.
    pub fn decode(self, data: &[u8]) -> Result<String, std::str::Utf8Error> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(data).map(str::to_owned),
            Encoding::Utf8Sig => {
                std::str::from_utf8(data.strip_prefix(UTF8_BOM).unwrap_or(data))
                    .map(str::to_owned)
            }
            Encoding::Latin1 => Ok(data.iter().copied().map(char::from).collect()),
        }
    }

    /// Encode `text`, returning the first character which can't be
    /// represented as the error.
    pub fn encode(self, text: &str) -> Result<Cow<'_, [u8]>, char> {
        match self {
            Encoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            Encoding::Utf8Sig => {
                let mut result = Vec::with_capacity(UTF8_BOM.len() + text.len());
                result.extend_from_slice(UTF8_BOM);
                result.extend_from_slice(text.as_bytes());
                Ok(Cow::Owned(result))
            }
            Encoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| c))
                .collect::<Result<Vec<u8>, char>>()
                .map(Cow::Owned),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Encoding::detect(b"\xEF\xBB\xBFhello"), Encoding::Utf8Sig);
        assert_eq!(Encoding::detect(b"hello"), Encoding::Utf8);
        assert_eq!(Encoding::detect(b""), Encoding::Utf8);
    }

    #[test]
    fn test_decode() {
        assert_eq!(Encoding::Utf8Sig.decode(b"\xEF\xBB\xBFhi").unwrap(), "hi");
        assert_eq!(Encoding::Utf8.decode("héllo".as_bytes()).unwrap(), "héllo");
        assert_eq!(Encoding::Latin1.decode(b"h\xE9llo").unwrap(), "héllo");
        assert!(Encoding::Utf8.decode(&[0x66, 0xFF, 0x6F]).is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(Encoding::Utf8Sig.encode("hi").unwrap().as_ref(), b"\xEF\xBB\xBFhi");
        assert_eq!(Encoding::Latin1.encode("héllo").unwrap().as_ref(), b"h\xE9llo");
        assert_eq!(Encoding::Latin1.encode("日本"), Err('日'));
    }

    #[test]
    fn test_names() {
        assert_eq!(Encoding::default().to_string(), "utf-8");
        assert_eq!(Encoding::Utf8Sig.name(), "utf-8-sig");
    }
}
