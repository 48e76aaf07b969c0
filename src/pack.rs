//! Greedy repacking of tokens into chunks.
//!
//! Tokens are taken in order and appended to the current chunk until the next
//! one would push it past the limit; then the chunk is sealed and a new one
//! starts with that token. Each boundary is placed as late as possible, which
//! gives the fewest chunks any order-preserving split can achieve.
//!
//! ## Counting the Separators
//!
//! A sealed chunk is its tokens joined by `'\n'`, so its real length is
//! `sum(token lengths) + (tokens - 1)`:
//!
//! ```text
//! limit = 10, tokens = ["aaaaa", "bbbbb"]
//!
//! TokensOnly: 5 + 5      = 10  -> "aaaaa\nbbbbb"  (11 chars!)
//! Strict:     5 + 1 + 5  = 11  -> "aaaaa", "bbbbb"
//! ```
//!
//! [`SeparatorAccounting::Strict`] is the default. `TokensOnly` exists for
//! callers that must reproduce output from systems that only bound the
//! token lengths.

use crate::token::{Token, LINE_BREAK};
use crate::{Chunk, LengthUnit, Limit};

/// Whether the line breaks inserted between tokens count toward the limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SeparatorAccounting {
    /// Every joined line break counts, so no chunk exceeds the limit.
    #[default]
    Strict,
    /// Only token lengths count; a chunk of `n` lines may exceed the limit by
    /// `n - 1`.
    TokensOnly,
}

impl SeparatorAccounting {
    fn separator_len(self, unit: LengthUnit) -> usize {
        match self {
            Self::Strict => {
                let mut buf = [0u8; 4];
                unit.measure(LINE_BREAK.encode_utf8(&mut buf))
            }
            Self::TokensOnly => 0,
        }
    }
}

/// Pack `tokens` (all borrowed from `text`) into chunks.
///
/// Consecutive tokens inside one chunk are always separated by exactly one
/// line break in the source (two fragments of the same line never fit
/// together), so each chunk is copied straight out of `text`.
pub(crate) fn pack(
    text: &str,
    tokens: &[Token<'_>],
    limit: Limit,
    unit: LengthUnit,
    accounting: SeparatorAccounting,
) -> Vec<Chunk> {
    let Some((first, rest)) = tokens.split_first() else {
        return vec![Chunk::new("", 0, 0, 0)];
    };

    let separator = accounting.separator_len(unit);
    let mut chunks = Vec::new();
    let mut start = first.start;
    let mut end = first.end();
    let mut running = first.len;

    for token in rest {
        let grown = running + separator;
        if limit.would_overflow(grown, token.len) {
            chunks.push(Chunk::new(&text[start..end], start, end, chunks.len()));
            start = token.start;
            running = token.len;
        } else {
            running = grown + token.len;
        }
        end = token.end();
    }

    chunks.push(Chunk::new(&text[start..end], start, end, chunks.len()));
    chunks
}
