//! Line splitting and over-long line fragmentation.
//!
//! ```text
//! limit = 4
//!
//! Text:   "ab\n\nabcdefghij\nxyz"
//! Lines:  ["ab", "", "abcdefghij", "xyz"]
//! Tokens: ["ab", "", "abcd", "efgh", "ij", "xyz"]
//! ```
//!
//! Empty lines survive as empty tokens: they still hold a position and come
//! back as blank lines when tokens are joined.

use tracing::{trace, warn};

use crate::{LengthUnit, Limit};

/// The delimiter between lines, dropped on split and restored on join.
pub(crate) const LINE_BREAK: char = '\n';

/// A whole line or a slice of an over-long one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) text: &'a str,
    /// Byte offset in the source text.
    pub(crate) start: usize,
    /// Length in the chunker's unit.
    pub(crate) len: usize,
}

impl Token<'_> {
    pub(crate) fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Split `text` into tokens no longer than `limit`, in source order.
///
/// Never returns an empty vector: the empty text is one empty line.
pub(crate) fn tokenize(text: &str, limit: Limit, unit: LengthUnit) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for line in text.split(LINE_BREAK) {
        fragment(line, start, limit, unit, &mut tokens);
        start += line.len() + LINE_BREAK.len_utf8();
    }

    tokens
}

fn fragment<'a>(
    line: &'a str,
    start: usize,
    limit: Limit,
    unit: LengthUnit,
    out: &mut Vec<Token<'a>>,
) {
    let len = unit.measure(line);

    // A line exactly at the limit already fits and is kept whole.
    if len <= limit.get() {
        out.push(Token {
            text: line,
            start,
            len,
        });
        return;
    }

    trace!(start, len, limit = limit.get(), "fragmenting over-long line");

    let mut rest = line;
    let mut offset = start;
    while !rest.is_empty() {
        let end = unit.prefix_end(rest, limit.get());
        let piece = &rest[..end];
        let len = unit.measure(piece);
        if len > limit.get() {
            warn!(
                offset,
                len,
                limit = limit.get(),
                "single character exceeds limit, emitting it alone"
            );
        }
        out.push(Token {
            text: piece,
            start: offset,
            len,
        });
        offset += end;
        rest = &rest[end..];
    }
}
