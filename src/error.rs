//! Error types for track validation and engine configuration.

use thiserror::Error;

use crate::feature::Feature;

/// A track record that cannot contribute to a genre profile.
///
/// `index` is the record's position in the slice handed to
/// [`crate::profile::build_profiles`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Genre label is empty or whitespace only
    #[error("track #{index}: genre must not be empty")]
    EmptyGenre { index: usize },

    /// NaN or infinite feature value
    #[error("track #{index} ({genre}): {feature} is not a finite number")]
    NonFinite {
        index: usize,
        genre: String,
        feature: Feature,
    },

    /// Feature value outside its documented bounds
    #[error("track #{index} ({genre}): {feature} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        genre: String,
        feature: Feature,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    /// Position of the offending record in the input.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::EmptyGenre { index }
            | Self::NonFinite { index, .. }
            | Self::OutOfRange { index, .. } => *index,
        }
    }

    /// Offending field, or `None` when the genre label itself was rejected.
    #[must_use]
    pub const fn feature(&self) -> Option<Feature> {
        match self {
            Self::EmptyGenre { .. } => None,
            Self::NonFinite { feature, .. } | Self::OutOfRange { feature, .. } => Some(*feature),
        }
    }
}

/// Invalid engine configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold must be a finite number
    #[error("similarity threshold must be finite, got {0}")]
    InvalidThreshold(f64),
}
