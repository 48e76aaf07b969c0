//! The Chunk type: one outbound message with position metadata.

/// One size-bounded piece of the original text, sent as a single message.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text. Chunks never
/// glue two fragments of the same over-long line together, so every chunk is
/// an exact slice of its source:
///
/// ```rust
/// use missive::{Chunker, LineChunker};
///
/// let text = "first line\nsecond line";
/// let chunker = LineChunker::new(12).unwrap();
/// let chunks = chunker.chunk(text);
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(&text[chunks[1].span()], "second line");
/// ```
///
/// ## Gaps
///
/// Between two consecutive chunks the source holds either a single `'\n'`
/// (the chunk boundary fell between lines) or nothing (an over-long line was
/// cut in the middle):
///
/// ```text
/// Source:  "aaaaaaa\nbb"   limit = 4
/// Chunk 0: "aaaa"   [0..4]
/// Chunk 1: "aaa"    [4..7]   <- no gap, same line
/// Chunk 2: "bb"     [8..10]  <- one '\n' dropped at [7..8]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Byte offset where this chunk starts in the original text.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original text.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the original text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<Chunk> for String {
    fn from(chunk: Chunk) -> Self {
        chunk.text
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_and_len() {
        let chunk = Chunk::new("héllo", 3, 9, 1);
        assert_eq!(chunk.len(), 6);
        assert_eq!(chunk.span(), 3..9);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new("abc", 0, 3, 0);
        assert_eq!(chunk.to_string(), "Chunk { index: 0, span: 0..3, len: 3 }");
    }

    #[test]
    fn test_into_string() {
        let text: String = Chunk::new("", 0, 0, 0).into();
        assert!(text.is_empty());
    }
}
