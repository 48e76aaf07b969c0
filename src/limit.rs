//! Message size limits.
//!
//! Chat transports reject payloads over a fixed size. Discord refuses message
//! content longer than 2000 characters, so that is the default here.
//!
//! A limit of zero has no valid split (no non-empty text fits in it), so it is
//! rejected when the [`Limit`] is built rather than when text is chunked.

use std::num::NonZeroUsize;

use crate::{Error, Result};

/// Maximum length of a single chunk, measured in a [`crate::LengthUnit`].
///
/// # Examples
///
/// ```rust
/// use missive::Limit;
///
/// let limit = Limit::new(500).unwrap();
/// assert_eq!(limit.get(), 500);
///
/// assert_eq!(Limit::default(), Limit::DISCORD);
/// assert!(Limit::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(NonZeroUsize);

impl Limit {
    /// Discord's message content ceiling.
    pub const DISCORD: Self = match NonZeroUsize::new(2000) {
        Some(n) => Self(n),
        None => unreachable!(),
    };

    /// Create a limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLimit`] if `max == 0`.
    pub fn new(max: usize) -> Result<Self> {
        NonZeroUsize::new(max)
            .map(Self)
            .ok_or(Error::InvalidLimit(max))
    }

    /// The maximum chunk length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Check if growing a chunk of length `current` by `additional` would
    /// exceed the limit.
    #[must_use]
    pub const fn would_overflow(self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.get()
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DISCORD
    }
}

impl From<NonZeroUsize> for Limit {
    fn from(max: NonZeroUsize) -> Self {
        Self(max)
    }
}

impl TryFrom<usize> for Limit {
    type Error = Error;

    fn try_from(max: usize) -> Result<Self> {
        Self::new(max)
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
