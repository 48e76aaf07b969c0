//! Length units.
//!
//! "2000 characters" means different things to different transports:
//!
//! ```text
//! Text:       "e\u{301}日"   (e + combining acute, then a CJK ideograph)
//!
//! Chars:      3   <- Unicode scalar values (Discord, Python's len())
//! Graphemes:  2   <- what a reader sees: "é" and "日"
//! Bytes:      6   <- UTF-8 on the wire
//! ```
//!
//! The unit also decides where an over-long line may be cut. Whatever the
//! unit, a cut never lands inside a UTF-8 sequence, and with [`LengthUnit::Graphemes`]
//! it never separates a base character from its combining marks.

use unicode_segmentation::UnicodeSegmentation;

/// How chunk lengths are measured against the [`crate::Limit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LengthUnit {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters (UAX #29).
    Graphemes,
    /// UTF-8 bytes.
    Bytes,
}

impl LengthUnit {
    /// Length of `text` in this unit.
    ///
    /// ```rust
    /// use missive::LengthUnit;
    ///
    /// assert_eq!(LengthUnit::Chars.measure("e\u{301}日"), 3);
    /// assert_eq!(LengthUnit::Graphemes.measure("e\u{301}日"), 2);
    /// assert_eq!(LengthUnit::Bytes.measure("e\u{301}日"), 6);
    /// ```
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Graphemes => text.graphemes(true).count(),
            Self::Bytes => text.len(),
        }
    }

    /// Byte offset ending the longest prefix of `text` that is at most `max`
    /// units long.
    ///
    /// Non-empty text always yields a non-empty prefix: a single char wider
    /// than a byte limit is returned whole rather than stalling.
    pub(crate) fn prefix_end(self, text: &str, max: usize) -> usize {
        let end = match self {
            Self::Chars => text.char_indices().nth(max).map_or(text.len(), |(i, _)| i),
            Self::Graphemes => text
                .grapheme_indices(true)
                .nth(max)
                .map_or(text.len(), |(i, _)| i),
            Self::Bytes => {
                // Replaces text.floor_char_boundary(max) for MSRV compatibility
                let mut end = max.min(text.len());
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                end
            }
        };

        if end == 0 {
            text.chars().next().map_or(0, char::len_utf8)
        } else {
            end
        }
    }
}
