//! The five audio features every genre profile is built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One axis of the genre feature space.
///
/// Variant order is the order features are compared in and the order they
/// appear in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Danceability,
    Energy,
    Acousticness,
    Valence,
    Popularity,
}

impl Feature {
    /// Every feature, in comparison order.
    pub const ALL: [Feature; 5] = [
        Feature::Danceability,
        Feature::Energy,
        Feature::Acousticness,
        Feature::Valence,
        Feature::Popularity,
    ];

    /// Number of features in a profile.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this feature inside a profile vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Acousticness => "acousticness",
            Feature::Valence => "valence",
            Feature::Popularity => "popularity",
        }
    }

    /// Inclusive bounds a raw track value must fall within.
    ///
    /// Popularity is a 0-100 chart score; everything else is a unit ratio.
    #[must_use]
    pub const fn raw_bounds(self) -> (f64, f64) {
        match self {
            Feature::Popularity => (0.0, 100.0),
            _ => (0.0, 1.0),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
