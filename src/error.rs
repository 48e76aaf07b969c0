//! Error types for missive.

/// Errors that can occur while configuring a chunker.
///
/// Chunking itself cannot fail: once a [`crate::Limit`] exists, every input
/// text has a valid split.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid limit (must be > 0).
    #[error("invalid limit: {0} (must be > 0)")]
    InvalidLimit(usize),
}

/// Result type for missive operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidLimit(0).to_string(),
            "invalid limit: 0 (must be > 0)"
        );
    }
}
