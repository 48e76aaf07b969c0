//! Line-preserving message splitting.
//!
//! Splits text into chunks no longer than a limit, cutting between lines
//! whenever possible.
//!
//! ## The Algorithm
//!
//! ```text
//! 1. Split on '\n' (empty lines kept)
//! 2. Cut every line longer than the limit into limit-sized fragments
//! 3. Greedily pack lines and fragments back together, in order,
//!    until the next one would overflow
//! ```
//!
//! ## Example
//!
//! ```text
//! limit = 10
//!
//! Text:   "hi\nthere\n0123456789abc\nok"
//! Tokens: ["hi", "there", "0123456789", "abc", "ok"]
//! Chunks: ["hi\nthere", "0123456789", "abc\nok"]
//! ```
//!
//! Unlike a fixed-size splitter, a short line is never cut in half just
//! because it straddles a size boundary.

use tracing::debug;

use crate::pack::{pack, SeparatorAccounting};
use crate::token::tokenize;
use crate::{Chunk, Chunker, LengthUnit, Limit, Result};

/// Splits text on line boundaries into size-bounded chunks.
///
/// ## Example
///
/// ```rust
/// use missive::LineChunker;
///
/// let chunker = LineChunker::new(10).unwrap();
/// let chunks = chunker.split("hi\nthere\n0123456789abc\nok");
///
/// assert_eq!(chunks, ["hi\nthere", "0123456789", "abc\nok"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineChunker {
    limit: Limit,
    unit: LengthUnit,
    accounting: SeparatorAccounting,
}

impl LineChunker {
    /// Create a chunker for chunks of at most `limit` characters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidLimit`] if `limit == 0`.
    pub fn new(limit: usize) -> Result<Self> {
        Ok(Self::with_limit(Limit::new(limit)?))
    }

    /// Create a chunker from an already validated limit.
    #[must_use]
    pub const fn with_limit(limit: Limit) -> Self {
        Self {
            limit,
            unit: LengthUnit::Chars,
            accounting: SeparatorAccounting::Strict,
        }
    }

    /// Create a chunker for Discord messages (2000 characters).
    #[must_use]
    pub const fn discord() -> Self {
        Self::with_limit(Limit::DISCORD)
    }

    /// Measure lengths in `unit` instead of chars.
    #[must_use]
    pub const fn unit(self, unit: LengthUnit) -> Self {
        Self { unit, ..self }
    }

    /// Choose whether joined line breaks count toward the limit.
    #[must_use]
    pub const fn accounting(self, accounting: SeparatorAccounting) -> Self {
        Self { accounting, ..self }
    }

    /// The chunk size limit.
    #[must_use]
    pub const fn limit(&self) -> Limit {
        self.limit
    }

    /// The unit lengths are measured in.
    #[must_use]
    pub const fn length_unit(&self) -> LengthUnit {
        self.unit
    }

    /// The separator accounting policy.
    #[must_use]
    pub const fn separator_accounting(&self) -> SeparatorAccounting {
        self.accounting
    }

    /// Split text into plain strings, one per outbound message.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        self.chunk(text).into_iter().map(String::from).collect()
    }
}

impl Chunker for LineChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        let tokens = tokenize(text, self.limit, self.unit);
        let chunks = pack(text, &tokens, self.limit, self.unit, self.accounting);

        debug!(
            bytes = text.len(),
            tokens = tokens.len(),
            chunks = chunks.len(),
            limit = self.limit.get(),
            "split text"
        );

        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.limit.get()).max(1)
    }
}
