//! Declarative chunker configuration.
//!
//! Bots usually read their settings from a file. [`ChunkerConfig`] holds the
//! raw values and is validated into a [`LineChunker`] with [`ChunkerConfig::build`].
//! With the `serde` feature enabled it deserializes from any serde format,
//! every field optional:
//!
//! ```rust,ignore
//! // { "limit": 4096, "unit": "graphemes" }
//! let config: ChunkerConfig = serde_json::from_str(raw)?;
//! let chunker = config.build()?;
//! ```

use crate::{LengthUnit, Limit, LineChunker, Result, SeparatorAccounting};

/// Unvalidated settings for a [`LineChunker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ChunkerConfig {
    /// Maximum chunk length. Must be > 0.
    pub limit: usize,
    /// Unit `limit` is measured in.
    pub unit: LengthUnit,
    /// Whether joined line breaks count toward `limit`.
    pub accounting: SeparatorAccounting,
}

impl ChunkerConfig {
    /// Validate into a chunker.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidLimit`] if `limit == 0`.
    pub fn build(&self) -> Result<LineChunker> {
        Ok(LineChunker::with_limit(Limit::new(self.limit)?)
            .unit(self.unit)
            .accounting(self.accounting))
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            limit: Limit::DISCORD.get(),
            unit: LengthUnit::default(),
            accounting: SeparatorAccounting::default(),
        }
    }
}

impl TryFrom<ChunkerConfig> for LineChunker {
    type Error = crate::Error;

    fn try_from(config: ChunkerConfig) -> Result<Self> {
        config.build()
    }
}

impl From<LineChunker> for ChunkerConfig {
    fn from(chunker: LineChunker) -> Self {
        Self {
            limit: chunker.limit().get(),
            unit: chunker.length_unit(),
            accounting: chunker.separator_accounting(),
        }
    }
}
