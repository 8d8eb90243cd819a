//! # Configuration Module
//!
//! The similarity engine has exactly one tunable: the threshold a genre pair's
//! similarity must strictly exceed to become an edge. Charts have used
//! several values for it, so it travels as configuration rather than a
//! hardcoded constant.
//!
//! ## Sources
//!
//! - [`SimilarityConfig::default`]: the edge-bundling default (0.75)
//! - `--threshold` on the command line
//! - `GENRELINK_THRESHOLD` in the environment (read by clap)

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Threshold used by the edge-bundling chart.
pub const DEFAULT_THRESHOLD: f64 = 0.75;

/// Looser threshold producing a denser graph.
pub const LOOSE_THRESHOLD: f64 = 0.7;

/// Stricter threshold keeping only near-identical genres.
pub const STRICT_THRESHOLD: f64 = 0.85;

/// Configuration for a single edge-selection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Pairs must score strictly above this to become edges.
    pub threshold: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SimilarityConfig {
    /// Create a configuration with an explicit threshold.
    ///
    /// Any finite value is accepted. Values at or above 1.0 select nothing
    /// and values below 0.0 select every pair of well-formed profiles, which
    /// is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] for NaN or infinite input.
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    #[must_use]
    pub fn loose() -> Self {
        Self {
            threshold: LOOSE_THRESHOLD,
        }
    }

    #[must_use]
    pub fn strict() -> Self {
        Self {
            threshold: STRICT_THRESHOLD,
        }
    }
}
