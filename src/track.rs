//! Per-track input records.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::feature::Feature;

/// How a single track's audio features arrive from the caller.
///
/// Values are taken as-is; [`TrackRecord::validate`] decides whether a record
/// may contribute to a genre profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub genre: String,
    /// How suitable the track is for dancing, 0.0 to 1.0.
    pub danceability: f64,
    pub energy: f64,
    pub acousticness: f64,
    /// Musical positiveness, 0.0 to 1.0.
    pub valence: f64,
    /// Chart popularity, 0 to 100. Rescaled only after averaging.
    pub popularity: f64,
}

impl TrackRecord {
    #[must_use]
    pub fn new(
        genre: impl Into<String>,
        danceability: f64,
        energy: f64,
        acousticness: f64,
        valence: f64,
        popularity: f64,
    ) -> Self {
        Self {
            genre: genre.into(),
            danceability,
            energy,
            acousticness,
            valence,
            popularity,
        }
    }

    /// Raw value of `feature`, popularity still on its 0-100 scale.
    #[must_use]
    pub const fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Danceability => self.danceability,
            Feature::Energy => self.energy,
            Feature::Acousticness => self.acousticness,
            Feature::Valence => self.valence,
            Feature::Popularity => self.popularity,
        }
    }

    /// Checks the genre label and every feature against its bounds.
    ///
    /// `index` is only used to identify the record in the returned error.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.genre.trim().is_empty() {
            return Err(ValidationError::EmptyGenre { index });
        }

        for feature in Feature::ALL {
            let value = self.value(feature);
            if !value.is_finite() {
                return Err(ValidationError::NonFinite {
                    index,
                    genre: self.genre.clone(),
                    feature,
                });
            }

            let (min, max) = feature.raw_bounds();
            if !(min..=max).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    index,
                    genre: self.genre.clone(),
                    feature,
                    value,
                    min,
                    max,
                });
            }
        }

        log::trace!("Validated track #{index} (`{}').", self.genre);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_track() -> TrackRecord {
        TrackRecord::new("Pop", 0.72, 0.82, 0.12, 0.82, 89.0)
    }

    #[test]
    fn test_valid_track_passes() {
        assert!(pop_track().validate(0).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let low = TrackRecord::new("Edge", 0.0, 0.0, 0.0, 0.0, 0.0);
        let high = TrackRecord::new("Edge", 1.0, 1.0, 1.0, 1.0, 100.0);
        assert!(low.validate(0).is_ok());
        assert!(high.validate(1).is_ok());
    }

    #[test]
    fn test_empty_genre_rejected() {
        let track = TrackRecord { genre: "   ".to_string(), ..pop_track() };
        assert_eq!(track.validate(3), Err(ValidationError::EmptyGenre { index: 3 }));
    }

    #[test]
    fn test_nan_feature_identifies_field() {
        let track = TrackRecord { valence: f64::NAN, ..pop_track() };
        let err = track.validate(7).unwrap_err();
        assert_eq!(err.index(), 7);
        assert_eq!(err.feature(), Some(Feature::Valence));
        assert!(matches!(err, ValidationError::NonFinite { .. }));
    }

    #[test]
    fn test_out_of_range_popularity() {
        let track = TrackRecord { popularity: 140.0, ..pop_track() };
        let err = track.validate(0).unwrap_err();
        assert_eq!(err.feature(), Some(Feature::Popularity));
        assert!(err.to_string().contains("popularity = 140"));
    }

    #[test]
    fn test_unit_feature_rejects_percent_scale() {
        let track = TrackRecord { energy: 82.0, ..pop_track() };
        assert!(matches!(
            track.validate(0),
            Err(ValidationError::OutOfRange { feature: Feature::Energy, .. })
        ));
    }

    #[test]
    fn test_deserializes_from_json() {
        let json = r#"{"danceability":0.65,"energy":0.93,"acousticness":0.08,"valence":0.65,"popularity":76,"genre":"Rock"}"#;
        let track: TrackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(track.genre, "Rock");
        assert_eq!(track.popularity, 76.0);
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let json = r#"{"danceability":0.65,"energy":0.93,"valence":0.65,"popularity":76,"genre":"Rock"}"#;
        assert!(serde_json::from_str::<TrackRecord>(json).is_err());
    }
}
