//! Reading a candidate as text: strict UTF-8, then a single-byte fallback.
use crate::model::DecodedText;
use std::fs;
use std::path::Path;

/// Read the whole file at `path` and decode it.
///
/// UTF-8 is tried first (a BOM, if any, is kept as U+FEFF so it is written
/// back unchanged). Anything else is decoded as Windows-1252, which accepts
/// every byte. Only an I/O failure yields [`DecodedText::Unreadable`].
pub fn read_text(path: &Path) -> DecodedText {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) => return DecodedText::Unreadable(err),
    };

    match String::from_utf8(bytes) {
        Ok(text) => DecodedText::Utf8(text),
        Err(err) => {
            let bytes = err.into_bytes();
            let (text, _had_errors) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(&bytes);
            DecodedText::Fallback(text.into_owned())
        }
    }
}
