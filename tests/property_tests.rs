//! Property-based tests for message splitting.
//!
//! These tests verify that chunking maintains key invariants:
//! - Non-empty: at least one chunk, even for empty input
//! - Bounded: no chunk exceeds the limit (strict accounting)
//! - Lossless: chunks are source slices, gaps are a single '\n' or nothing
//! - Ordered: chunks are in source order with sequential indices
//! - Stable: re-chunking the joined output never needs more chunks

use missive::{Chunk, Chunker, LengthUnit, LineChunker, SeparatorAccounting};
use proptest::prelude::*;

// =============================================================================
// Test Generators
// =============================================================================

/// Short lines, blank lines, and the occasional very long line
fn line_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::string::string_regex("[a-z ]{0,12}").unwrap(),
            1 => prop::string::string_regex("[a-z]{30,90}").unwrap(),
        ],
        0..20,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Mixed-width text: ASCII, accented, CJK, combining marks, emoji
fn unicode_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé日本\u{301}🦀 \n]{0,200}").unwrap()
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Check that chunk text matches the source and gaps hold at most one '\n'
fn chunks_are_source_slices(chunks: &[Chunk], text: &str) -> bool {
    if chunks.first().map(|c| c.start) != Some(0) {
        return false;
    }
    if chunks.last().map(|c| c.end) != Some(text.len()) {
        return false;
    }
    for chunk in chunks {
        if text[chunk.span()] != chunk.text {
            return false;
        }
    }
    for window in chunks.windows(2) {
        let gap = &text[window[0].end..window[1].start];
        if !(gap.is_empty() || gap == "\n") {
            return false;
        }
    }
    true
}

/// Lines of the joined output, with fragment boundaries read as line breaks
fn fragment_aware_lines(chunks: &[Chunk]) -> Vec<String> {
    let joined: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    joined.join("\n").split('\n').map(String::from).collect()
}

// =============================================================================
// Size Bound
// =============================================================================

proptest! {
    #[test]
    fn strict_chunks_respect_limit(text in line_text(), limit in 1usize..60) {
        let chunker = LineChunker::new(limit).unwrap();
        for chunk in chunker.chunk(&text) {
            let len = chunk.text.chars().count();
            prop_assert!(len <= limit, "chunk of {} chars exceeds {}", len, limit);
        }
    }

    #[test]
    fn grapheme_chunks_respect_limit(text in unicode_text(), limit in 1usize..20) {
        let chunker = LineChunker::new(limit).unwrap().unit(LengthUnit::Graphemes);
        for chunk in chunker.chunk(&text) {
            prop_assert!(LengthUnit::Graphemes.measure(&chunk.text) <= limit);
        }
    }

    #[test]
    fn byte_chunks_respect_limit(text in unicode_text(), limit in 4usize..40) {
        // Every char in the generator is at most 4 bytes
        let chunker = LineChunker::new(limit).unwrap().unit(LengthUnit::Bytes);
        for chunk in chunker.chunk(&text) {
            prop_assert!(chunk.len() <= limit);
        }
    }

    #[test]
    fn tokens_only_overshoot_is_bounded(text in line_text(), limit in 1usize..60) {
        let chunker = LineChunker::new(limit)
            .unwrap()
            .accounting(SeparatorAccounting::TokensOnly);
        for chunk in chunker.chunk(&text) {
            let lines = chunk.text.split('\n').count();
            prop_assert!(chunk.text.chars().count() <= limit + lines - 1);
        }
    }
}

// =============================================================================
// Structure
// =============================================================================

proptest! {
    #[test]
    fn never_empty(text in line_text(), limit in 1usize..60) {
        let chunker = LineChunker::new(limit).unwrap();
        prop_assert!(!chunker.chunk(&text).is_empty());
    }

    #[test]
    fn chunks_are_lossless(text in unicode_text(), limit in 1usize..30) {
        for unit in [LengthUnit::Chars, LengthUnit::Graphemes, LengthUnit::Bytes] {
            let chunker = LineChunker::new(limit).unwrap().unit(unit);
            let chunks = chunker.chunk(&text);
            prop_assert!(chunks_are_source_slices(&chunks, &text));
        }
    }

    #[test]
    fn indices_are_sequential(text in line_text(), limit in 1usize..60) {
        let chunks = LineChunker::new(limit).unwrap().chunk(&text);
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn short_lines_join_back_exactly(
        lines in prop::collection::vec("[a-z]{0,10}", 1..30),
        limit in 10usize..50,
    ) {
        // No line needs cutting, so the join is the input itself
        let text = lines.join("\n");
        let chunks = missive::chunk(&text, limit).unwrap();
        prop_assert_eq!(chunks.join("\n"), text);
    }

    #[test]
    fn line_sequence_preserved(text in line_text(), limit in 1usize..60) {
        // Each output line is a whole input line or a run of its fragments
        let chunks = LineChunker::new(limit).unwrap().chunk(&text);
        let mut output = fragment_aware_lines(&chunks).into_iter();
        for line in text.split('\n') {
            let mut rebuilt = output.next().unwrap_or_default();
            while rebuilt.len() < line.len() {
                match output.next() {
                    Some(piece) => rebuilt.push_str(&piece),
                    None => break,
                }
            }
            prop_assert_eq!(rebuilt, line);
        }
        prop_assert!(output.next().is_none());
    }
}

// =============================================================================
// Stability
// =============================================================================

proptest! {
    #[test]
    fn rechunking_never_grows(text in line_text(), limit in 1usize..60) {
        let chunker = LineChunker::new(limit).unwrap();
        let first = chunker.split(&text);
        let second = chunker.split(&first.join("\n"));
        prop_assert!(second.len() <= first.len());
    }

    #[test]
    fn chunking_is_deterministic(text in unicode_text(), limit in 1usize..30) {
        let chunker = LineChunker::new(limit).unwrap();
        prop_assert_eq!(chunker.chunk(&text), chunker.chunk(&text));
    }
}
