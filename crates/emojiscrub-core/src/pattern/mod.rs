//! The emoji character class.
//!
//! A single regex over a fixed union of inclusive Unicode ranges. Matching
//! is per scalar value: joiners (U+200D) and variation selectors (U+FE0F)
//! sit outside the ranges and survive [`EmojiPattern::strip`], so a ZWJ
//! sequence leaves its joiners behind. That behaviour is kept on purpose.
use crate::error::ScrubError;
use regex::Regex;
use std::borrow::Cow;

/// Inclusive scalar ranges treated as emoji.
pub const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F300}', '\u{1F5FF}'), // misc symbols & pictographs
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F680}', '\u{1F6FF}'), // transport & map
    ('\u{1F700}', '\u{1F77F}'), // alchemical
    ('\u{1F780}', '\u{1F7FF}'), // geometric shapes extended
    ('\u{1F800}', '\u{1F8FF}'), // supplemental arrows-C
    ('\u{1F900}', '\u{1F9FF}'), // supplemental symbols & pictographs
    ('\u{1FA00}', '\u{1FA6F}'), // chess symbols
    ('\u{2600}', '\u{26FF}'),   // misc symbols
    ('\u{2700}', '\u{27BF}'),   // dingbats
];

/// `true` if `c` falls in one of [`EMOJI_RANGES`].
pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Compiled matcher for [`EMOJI_RANGES`].
///
/// Build once and share by reference; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct EmojiPattern {
    regex: Regex,
}

impl EmojiPattern {
    pub fn new() -> Result<Self, ScrubError> {
        let regex = Regex::new(&character_class(EMOJI_RANGES))?;
        Ok(Self { regex })
    }

    /// `true` iff at least one scalar in `text` is in the emoji ranges.
    pub fn contains_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of scalars [`strip`](Self::strip) would delete.
    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Delete every matching scalar. No replacement, no whitespace cleanup.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, "")
    }
}

/// Render ranges as a regex class, e.g. `[\x{2600}-\x{26FF}]`.
fn character_class(ranges: &[(char, char)]) -> String {
    let body: String = ranges
        .iter()
        .map(|&(lo, hi)| format!(r"\x{{{:X}}}-\x{{{:X}}}", lo as u32, hi as u32))
        .collect();
    format!("[{body}]")
}
