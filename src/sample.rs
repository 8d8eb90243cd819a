//! Built-in sample of genre audio features.
//!
//! One representative track per genre. Returned as an owned `Vec` so callers
//! pass it into the engine like any other dataset.

use crate::track::TrackRecord;

/// Fifteen tracks, one per genre.
#[must_use]
pub fn music_data() -> Vec<TrackRecord> {
    [
        ("Pop", 0.72, 0.82, 0.12, 0.82, 89.0),
        ("Rock", 0.65, 0.93, 0.08, 0.65, 76.0),
        ("Dance", 0.87, 0.73, 0.05, 0.90, 92.0),
        ("Folk", 0.55, 0.40, 0.78, 0.72, 65.0),
        ("Metal", 0.60, 0.95, 0.04, 0.30, 72.0),
        ("R&B", 0.82, 0.78, 0.23, 0.75, 85.0),
        ("Hip-Hop", 0.88, 0.62, 0.07, 0.60, 79.0),
        ("Classical", 0.45, 0.31, 0.86, 0.68, 58.0),
        ("Indie", 0.73, 0.65, 0.45, 0.55, 81.0),
        ("Electronic", 0.78, 0.75, 0.06, 0.72, 88.0),
        ("Jazz", 0.59, 0.57, 0.67, 0.45, 63.0),
        ("Alternative", 0.68, 0.80, 0.21, 0.38, 70.0),
        ("Latin", 0.81, 0.71, 0.18, 0.85, 84.0),
        ("EDM", 0.77, 0.88, 0.03, 0.70, 76.0),
        ("Blues", 0.51, 0.48, 0.72, 0.32, 61.0),
    ]
    .into_iter()
    .map(|(genre, danceability, energy, acousticness, valence, popularity)| {
        TrackRecord::new(genre, danceability, energy, acousticness, valence, popularity)
    })
    .collect()
}
