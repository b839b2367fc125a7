//! Result of reading a candidate file as text.
use std::io;

/// The three ways reading a candidate can end.
///
/// Modelled as a value rather than nested error handling so the skip path
/// is visible to callers and tests.
#[derive(Debug)]
pub enum DecodedText {
    /// The bytes were valid UTF-8.
    Utf8(String),
    /// The bytes were not UTF-8 and were decoded with the single-byte fallback.
    Fallback(String),
    /// The file could not be read at all.
    Unreadable(io::Error),
}

impl DecodedText {
    /// The decoded text, or `None` for [`DecodedText::Unreadable`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Utf8(text) | Self::Fallback(text) => Some(text),
            Self::Unreadable(_) => None,
        }
    }

    /// Consume `self`, returning the owned text if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Utf8(text) | Self::Fallback(text) => Some(text),
            Self::Unreadable(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
