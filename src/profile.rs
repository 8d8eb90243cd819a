//! Genre profile aggregation.
//!
//! Collapses per-track records into one mean feature vector per genre. The
//! genre order of the result is the order genres first appear in the input,
//! which is what makes edge selection reproducible.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::Index;

use crate::error::ValidationError;
use crate::feature::Feature;
use crate::track::TrackRecord;

/// Mean feature vector of every track sharing a genre label.
///
/// Popularity is stored on the same unit scale as the other features.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenreProfile {
    values: [f64; Feature::COUNT],
}

impl GenreProfile {
    /// Builds a profile from values already in `Feature::ALL` order.
    ///
    /// No bounds are enforced here.
    #[must_use]
    pub const fn from_values(values: [f64; Feature::COUNT]) -> Self {
        Self { values }
    }

    #[must_use]
    pub const fn values(&self) -> &[f64; Feature::COUNT] {
        &self.values
    }

    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }
}

impl Index<Feature> for GenreProfile {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.values[feature.index()]
    }
}

impl Serialize for GenreProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Feature::COUNT))?;
        for feature in Feature::ALL {
            map.serialize_entry(feature.as_str(), &self.get(feature))?;
        }
        map.end()
    }
}

/// Genre name to profile mapping, kept in first-appearance order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenreProfiles {
    entries: Vec<(String, GenreProfile)>,
}

impl GenreProfiles {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Profile for `genre`, if any track carried that label.
    #[must_use]
    pub fn get(&self, genre: &str) -> Option<&GenreProfile> {
        self.entries
            .iter()
            .find(|(name, _)| name == genre)
            .map(|(_, profile)| profile)
    }

    #[must_use]
    pub fn contains(&self, genre: &str) -> bool {
        self.get(genre).is_some()
    }

    /// Genre names in first-appearance order.
    pub fn genre_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GenreProfile)> + '_ {
        self.entries.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    pub(crate) fn entries(&self) -> &[(String, GenreProfile)] {
        &self.entries
    }
}

impl Serialize for GenreProfiles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, profile) in &self.entries {
            map.serialize_entry(name, profile)?;
        }
        map.end()
    }
}

/// Running per-genre sums while the input is scanned.
#[derive(Default)]
struct Accumulator {
    sums: [f64; Feature::COUNT],
    count: usize,
}

impl Accumulator {
    fn add(&mut self, track: &TrackRecord) {
        for feature in Feature::ALL {
            self.sums[feature.index()] += track.value(feature);
        }
        self.count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(&self) -> GenreProfile {
        let count = self.count as f64;
        let mut values = self.sums.map(|sum| sum / count);
        // Averaged on the 0-100 scale first, then brought onto the unit scale.
        values[Feature::Popularity.index()] /= 100.0;
        GenreProfile::from_values(values)
    }
}

/// Builds one profile per distinct genre in `tracks`.
///
/// Every record is validated before any averaging happens; the first invalid
/// record is returned as the error. An empty slice yields empty profiles.
///
/// # Examples
///
/// ```
/// use genrelink::profile::build_profiles;
/// use genrelink::track::TrackRecord;
/// use genrelink::feature::Feature;
///
/// let tracks = vec![
///     TrackRecord::new("A", 0.4, 0.5, 0.5, 0.5, 50.0),
///     TrackRecord::new("A", 0.6, 0.5, 0.5, 0.5, 50.0),
/// ];
/// let profiles = build_profiles(&tracks)?;
/// assert_eq!(profiles.get("A").unwrap()[Feature::Danceability], 0.5);
/// # Ok::<(), genrelink::error::ValidationError>(())
/// ```
pub fn build_profiles(tracks: &[TrackRecord]) -> Result<GenreProfiles, ValidationError> {
    for (index, track) in tracks.iter().enumerate() {
        track.validate(index)?;
    }

    let mut order: Vec<&str> = Vec::new();
    let mut accumulators: HashMap<&str, Accumulator> = HashMap::new();

    for track in tracks {
        let genre = track.genre.as_str();
        accumulators
            .entry(genre)
            .or_insert_with(|| {
                order.push(genre);
                Accumulator::default()
            })
            .add(track);
    }

    let entries = order
        .into_iter()
        .map(|genre| (genre.to_string(), accumulators[genre].mean()))
        .collect::<Vec<_>>();

    log::debug!(
        "Built {} genre profiles from {} tracks.",
        entries.len(),
        tracks.len()
    );

    Ok(GenreProfiles { entries })
}
