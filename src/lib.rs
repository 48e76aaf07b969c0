//! # missive
//!
//! Split outbound text into messages a chat transport will accept.
//!
//! ## The Problem
//!
//! Chat platforms reject messages over a fixed size (Discord: 2000
//! characters). A bot that relays logs, search results, or model output
//! will eventually produce something longer, and the send fails.
//!
//! Cutting every 2000 characters works, but lands in the middle of lines:
//!
//! ```text
//! limit = 12
//!
//! Text:   "ok: build\nok: tests\nfail: lint"
//!
//! Fixed:  ["ok: build\nok", ": tests\nfail", ": lint"]      <- every line broken
//! Lines:  ["ok: build", "ok: tests", "fail: lint"]          <- every line intact
//! ```
//!
//! ## The Approach
//!
//! Split on line breaks, cut only the lines that could never fit on their
//! own, then pack lines back together greedily. Boundaries go as late as
//! possible, so the fewest messages are sent.
//!
//! ## Guarantees
//!
//! - Never empty: empty text gives one empty chunk.
//! - Bounded: with the default [`SeparatorAccounting::Strict`], no chunk is
//!   longer than the limit. (The one exception: a single char wider than a
//!   [`LengthUnit::Bytes`] limit.)
//! - Lossless: every chunk is a slice of the input, and joining the chunks
//!   with `'\n'` gives back the input's lines.
//! - Pure: no I/O, no shared state. Safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! let chunks = missive::chunk("This is some text", 2000).unwrap();
//! assert_eq!(chunks, ["This is some text"]);
//!
//! let long = "a".repeat(2500);
//! let chunks = missive::chunk(&long, 2000).unwrap();
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[1].len(), 500);
//! ```
//!
//! ## Sending
//!
//! ```rust
//! use missive::{plan, Destination, LineChunker};
//!
//! let chunker = LineChunker::discord();
//! let reply = Destination::Reply { channel_id: 1, message_id: 2 };
//!
//! for message in plan(&chunker, reply, "pong") {
//!     // transport.send(message.destination, &message.text)
//!     assert_eq!(message.text, "pong");
//! }
//! ```
//!
//! ## Diagnostics
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events (`debug` per
//! call, `trace` per fragmented line, `warn` for oversized chars). Install a
//! subscriber to see them; nothing is printed otherwise.

mod chunk;
mod config;
mod error;
mod limit;
mod line;
mod measure;
mod outbound;
mod pack;
mod token;

pub use chunk::Chunk;
pub use config::ChunkerConfig;
pub use error::{Error, Result};
pub use limit::Limit;
pub use line::LineChunker;
pub use measure::LengthUnit;
pub use outbound::{plan, Destination, Outbound};
pub use pack::SeparatorAccounting;

/// A text chunking strategy.
///
/// Implementations must be deterministic and keep chunks in source order.
///
/// ```rust
/// use missive::{Chunk, Chunker, LineChunker};
///
/// fn chunk_reply(chunker: &dyn Chunker, text: &str) -> Vec<Chunk> {
///     chunker.chunk(text)
/// }
///
/// let chunks = chunk_reply(&LineChunker::discord(), "Hello\nworld");
/// assert_eq!(chunks.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Chunk`] containing the text and its byte offsets
    /// in the original text. The result is never empty.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 2000).max(1)
    }
}

/// Split `text` into chunks of at most `limit` characters.
///
/// Shorthand for [`LineChunker::new`] followed by [`LineChunker::split`].
///
/// # Errors
///
/// Returns [`Error::InvalidLimit`] if `limit == 0`, before any work is done.
///
/// ```rust
/// let chunks = missive::chunk("line1\nline2", 2000).unwrap();
/// assert_eq!(chunks, ["line1\nline2"]);
///
/// assert!(missive::chunk("text", 0).is_err());
/// ```
pub fn chunk(text: &str, limit: usize) -> Result<Vec<String>> {
    Ok(LineChunker::new(limit)?.split(text))
}
