//! Genre similarity scoring and edge selection.
//!
//! Scores genre pairs by normalized Euclidean distance in the five-feature
//! unit cube and keeps the pairs that clear a threshold.

use serde::{Deserialize, Serialize};

use crate::config::SimilarityConfig;
use crate::error::ValidationError;
use crate::feature::Feature;
use crate::profile::{build_profiles, GenreProfile, GenreProfiles};
use crate::track::TrackRecord;

/// A genre pair retained because its similarity cleared the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEdge {
    pub source: String,
    pub target: String,
    /// Similarity score, 1.0 for identical profiles
    pub value: f64,
}

/// Root-mean-square feature difference between two profiles.
///
/// For profiles inside the unit cube this lies in [0, 1]:
///
/// ```text
/// distance(a, b) = sqrt( sum_f (a_f - b_f)^2 / F )
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn normalized_distance(a: &GenreProfile, b: &GenreProfile) -> f64 {
    let sum_squared_diff: f64 = Feature::ALL
        .iter()
        .map(|&feature| squared_diff(a[feature], b[feature]))
        .sum();

    (sum_squared_diff / Feature::COUNT as f64).sqrt()
}

#[inline]
fn squared_diff(a: f64, b: f64) -> f64 {
    let diff = a - b;
    diff * diff
}

/// Similarity between two genre profiles, `1 - normalized_distance`.
///
/// Symmetric, and exactly 1.0 for identical profiles. Not clamped: profiles
/// constructed outside the unit cube can score below zero.
///
/// # Examples
///
/// ```
/// use genrelink::algorithm::similarity;
/// use genrelink::profile::GenreProfile;
///
/// let quiet = GenreProfile::from_values([0.0; 5]);
/// let loud = GenreProfile::from_values([1.0; 5]);
/// assert_eq!(similarity(&quiet, &quiet), 1.0);
/// assert_eq!(similarity(&quiet, &loud), 0.0);
/// ```
#[must_use]
pub fn similarity(a: &GenreProfile, b: &GenreProfile) -> f64 {
    1.0 - normalized_distance(a, b)
}

/// Selects every genre pair whose similarity is strictly above `threshold`.
///
/// Pairs are enumerated over the profiles' genre order with `i < j`, so no
/// pair appears twice and no genre is paired with itself. Edges come back in
/// that enumeration order.
///
/// # Examples
///
/// ```
/// use genrelink::algorithm::select_edges;
/// use genrelink::profile::build_profiles;
/// use genrelink::track::TrackRecord;
///
/// let tracks = vec![
///     TrackRecord::new("A", 0.5, 0.5, 0.5, 0.5, 50.0),
///     TrackRecord::new("B", 0.5, 0.5, 0.5, 0.5, 50.0),
/// ];
/// let edges = select_edges(&build_profiles(&tracks)?, 0.7);
/// assert_eq!(edges.len(), 1);
/// assert_eq!(edges[0].value, 1.0);
/// # Ok::<(), genrelink::error::ValidationError>(())
/// ```
#[must_use]
pub fn select_edges(profiles: &GenreProfiles, threshold: f64) -> Vec<SimilarityEdge> {
    let entries = profiles.entries();
    let mut edges = Vec::new();

    for (i, (source, source_profile)) in entries.iter().enumerate() {
        for (target, target_profile) in &entries[i + 1..] {
            let value = similarity(source_profile, target_profile);
            log::trace!("Similarity `{source}' <-> `{target}' = {value:.4}");

            if value > threshold {
                edges.push(SimilarityEdge {
                    source: source.clone(),
                    target: target.clone(),
                    value,
                });
            }
        }
    }

    log::debug!(
        "Selected {} of {} genre pairs above threshold {threshold}.",
        edges.len(),
        pair_count(entries.len())
    );

    edges
}

/// Number of unordered pairs among `genres` distinct genres.
#[must_use]
pub const fn pair_count(genres: usize) -> usize {
    genres * genres.saturating_sub(1) / 2
}

/// Builds profiles from `tracks` and selects edges in one call.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found in `tracks`.
pub fn similarity_edges(
    tracks: &[TrackRecord],
    config: &SimilarityConfig,
) -> Result<Vec<SimilarityEdge>, ValidationError> {
    let profiles = build_profiles(tracks)?;
    Ok(select_edges(&profiles, config.threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EPSILON: f64 = 1e-9;

    fn track(genre: &str, d: f64, e: f64, a: f64, v: f64, p: f64) -> TrackRecord {
        TrackRecord::new(genre, d, e, a, v, p)
    }

    #[test]
    fn test_identical_profiles_form_full_edge() {
        let tracks = vec![
            track("A", 0.5, 0.5, 0.5, 0.5, 50.0),
            track("B", 0.5, 0.5, 0.5, 0.5, 50.0),
        ];
        let profiles = build_profiles(&tracks).unwrap();
        let a = profiles.get("A").unwrap();
        let b = profiles.get("B").unwrap();
        assert_eq!(similarity(a, b), 1.0);

        let edges = select_edges(&profiles, 0.7);
        assert_eq!(
            edges,
            vec![SimilarityEdge {
                source: "A".to_string(),
                target: "B".to_string(),
                value: 1.0,
            }]
        );
    }

    #[test]
    fn test_maximally_divergent_genres() {
        let tracks = vec![
            track("A", 0.0, 0.0, 0.0, 0.0, 0.0),
            track("B", 1.0, 1.0, 1.0, 1.0, 100.0),
        ];
        let profiles = build_profiles(&tracks).unwrap();
        let score = similarity(profiles.get("A").unwrap(), profiles.get("B").unwrap());
        assert_eq!(score, 0.0);
        assert!(select_edges(&profiles, 0.7).is_empty());
    }

    #[test]
    fn test_similarity_symmetric_and_reflexive() {
        let a = GenreProfile::from_values([0.72, 0.82, 0.12, 0.82, 0.89]);
        let b = GenreProfile::from_values([0.45, 0.31, 0.86, 0.68, 0.58]);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
        assert!((similarity(&a, &a) - 1.0).abs() < EPSILON);
        assert!((similarity(&b, &b) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_similarity_not_clamped() {
        let a = GenreProfile::from_values([0.0; 5]);
        let b = GenreProfile::from_values([0.0, 0.0, 0.0, 0.0, 50.0]);
        assert!(similarity(&a, &b) < 0.0);
    }

    #[test]
    fn test_single_feature_difference() {
        let a = GenreProfile::from_values([0.0; 5]);
        let b = GenreProfile::from_values([1.0, 0.0, 0.0, 0.0, 0.0]);
        let expected = 1.0 - (1.0_f64 / 5.0).sqrt();
        assert!((similarity(&a, &b) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        let tracks = vec![
            track("A", 0.2, 0.4, 0.6, 0.8, 30.0),
            track("B", 0.3, 0.4, 0.5, 0.7, 40.0),
        ];
        let profiles = build_profiles(&tracks).unwrap();
        let score = similarity(profiles.get("A").unwrap(), profiles.get("B").unwrap());

        assert!(select_edges(&profiles, score).is_empty());
        assert_eq!(select_edges(&profiles, score - EPSILON).len(), 1);
    }

    #[test]
    fn test_single_genre_has_no_edges() {
        let tracks = vec![
            track("Solo", 0.1, 0.2, 0.3, 0.4, 50.0),
            track("Solo", 0.3, 0.2, 0.1, 0.4, 70.0),
        ];
        let profiles = build_profiles(&tracks).unwrap();
        assert_eq!(profiles.len(), 1);
        assert!(select_edges(&profiles, -1.0).is_empty());
    }

    #[test]
    fn test_empty_input_law() {
        let edges = similarity_edges(&[], &SimilarityConfig::default()).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_no_self_or_duplicate_pairs() {
        let tracks: Vec<TrackRecord> = ["A", "B", "C", "D", "E"]
            .iter()
            .enumerate()
            .map(|(i, genre)| {
                let v = 0.4 + 0.02 * i as f64;
                track(genre, v, v, v, v, v * 100.0)
            })
            .collect();
        let profiles = build_profiles(&tracks).unwrap();
        let edges = select_edges(&profiles, -1.0);

        assert_eq!(edges.len(), pair_count(5));
        let mut seen = HashSet::new();
        for edge in &edges {
            assert_ne!(edge.source, edge.target);
            let key = if edge.source < edge.target {
                (edge.source.clone(), edge.target.clone())
            } else {
                (edge.target.clone(), edge.source.clone())
            };
            assert!(seen.insert(key), "duplicate pair {edge:?}");
        }
    }

    #[test]
    fn test_edges_follow_enumeration_order() {
        let tracks = vec![
            track("C", 0.5, 0.5, 0.5, 0.5, 50.0),
            track("A", 0.5, 0.5, 0.5, 0.5, 50.0),
            track("B", 0.5, 0.5, 0.5, 0.5, 50.0),
        ];
        let edges = similarity_edges(&tracks, &SimilarityConfig::default()).unwrap();
        let pairs: Vec<(&str, &str)> = edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("C", "A"), ("C", "B"), ("A", "B")]);
    }

    #[test]
    fn test_similarity_edges_propagates_validation() {
        let tracks = vec![track("", 0.5, 0.5, 0.5, 0.5, 50.0)];
        let err = similarity_edges(&tracks, &SimilarityConfig::default()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyGenre { index: 0 });
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(15), 105);
    }
}
