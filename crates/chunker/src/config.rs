use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for chunk building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Target chunk size in words (soft limit; cohesion rules may push a
    /// chunk past it).
    pub target_size: usize,

    /// Words carried from the end of one chunk into the start of the next.
    pub overlap: usize,

    /// First chunk position (1-based by default).
    pub start_id: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            target_size: 60,
            overlap: 15,
            start_id: 1,
        }
    }
}

impl ChunkerConfig {
    /// Validate internal consistency. Range policy (target in [20, 200],
    /// overlap in [0, 50]) belongs to the caller; this only rejects
    /// configurations the builder cannot make progress with.
    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(ChunkerError::invalid_config("target_size must be > 0"));
        }

        if self.overlap >= self.target_size {
            return Err(ChunkerError::invalid_config(format!(
                "overlap ({}) must be smaller than target_size ({})",
                self.overlap, self.target_size
            )));
        }

        if self.start_id == 0 {
            return Err(ChunkerError::invalid_config("start_id must be >= 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ChunkerConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_overlap_at_or_above_target() {
        let config = ChunkerConfig {
            target_size: 20,
            overlap: 20,
            start_id: 1,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_target_and_zero_start() {
        let config = ChunkerConfig {
            target_size: 0,
            overlap: 0,
            start_id: 1,
        };
        assert!(config.validate().is_err());

        let config = ChunkerConfig {
            target_size: 60,
            overlap: 0,
            start_id: 0,
        };
        assert!(config.validate().is_err());
    }
}
