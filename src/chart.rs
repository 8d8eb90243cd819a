//! Hand-off structures for chart renderers.
//!
//! Nothing here draws anything. These are the shapes a radial edge-bundling
//! chart and a genre/feature heatmap consume.

use serde::Serialize;

use crate::algorithm::{select_edges, SimilarityEdge};
use crate::feature::Feature;
use crate::profile::GenreProfiles;

/// Nodes and edges of a radial edge-bundling chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleGraph {
    /// Genre names sorted ascending, one leaf per genre
    pub nodes: Vec<String>,
    pub edges: Vec<SimilarityEdge>,
}

/// One cell of the genre/feature heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub genre: String,
    pub feature: Feature,
    pub value: f64,
}

/// Packages profiles and their edges for an edge-bundling renderer.
///
/// Nodes are sorted by name since the radial layout places leaves in that
/// order; edges keep their enumeration order.
#[must_use]
pub fn bundle_graph(profiles: &GenreProfiles, threshold: f64) -> BundleGraph {
    let mut nodes: Vec<String> = profiles.genre_names().map(str::to_string).collect();
    nodes.sort();

    BundleGraph {
        nodes,
        edges: select_edges(profiles, threshold),
    }
}

/// Flattens profiles into heatmap cells, genre-major and feature-minor.
#[must_use]
pub fn heatmap_cells(profiles: &GenreProfiles) -> Vec<HeatmapCell> {
    profiles
        .iter()
        .flat_map(|(genre, profile)| {
            Feature::ALL.into_iter().map(move |feature| HeatmapCell {
                genre: genre.to_string(),
                feature,
                value: profile[feature],
            })
        })
        .collect()
}

/// Smallest and largest edge value, for scaling stroke weight and colour.
#[must_use]
pub fn edge_value_range(edges: &[SimilarityEdge]) -> Option<(f64, f64)> {
    edges.iter().map(|edge| edge.value).fold(None, |range, value| match range {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
