//! Text and JSON rendering of engine output for the command line.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::algorithm::SimilarityEdge;
use crate::chart::HeatmapCell;
use crate::feature::Feature;
use crate::profile::GenreProfiles;

/// Pretty-printed JSON for any serializable engine output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

fn genre_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).max().unwrap_or(0).max("genre".len())
}

/// One row per genre, one column per feature.
#[must_use]
pub fn profiles_table(profiles: &GenreProfiles) -> String {
    let width = genre_width(profiles.genre_names());
    let mut out = String::new();

    let _ = write!(out, "{:<width$}", "genre");
    for feature in Feature::ALL {
        let _ = write!(out, "  {:>12}", feature.as_str());
    }
    out.push('\n');

    for (genre, profile) in profiles.iter() {
        let _ = write!(out, "{genre:<width$}");
        for value in profile.values() {
            let _ = write!(out, "  {value:>12.3}");
        }
        out.push('\n');
    }

    out
}

/// `source <-> target  value` lines, in edge order.
#[must_use]
pub fn edges_table(edges: &[SimilarityEdge]) -> String {
    if edges.is_empty() {
        return "No genre pairs above threshold\n".to_string();
    }

    let width = genre_width(edges.iter().map(|edge| edge.source.as_str()));
    let target_width = genre_width(edges.iter().map(|edge| edge.target.as_str()));
    let mut out = String::new();

    for edge in edges {
        let _ = writeln!(
            out,
            "{:<width$} <-> {:<target_width$}  {:.4}",
            edge.source, edge.target, edge.value
        );
    }

    let _ = writeln!(out, "{} edges", edges.len());
    out
}

/// `genre  feature  value` lines, in cell order.
#[must_use]
pub fn heatmap_table(cells: &[HeatmapCell]) -> String {
    let width = genre_width(cells.iter().map(|cell| cell.genre.as_str()));
    let mut out = String::new();

    for cell in cells {
        let _ = writeln!(
            out,
            "{:<width$}  {:<12}  {:.3}",
            cell.genre,
            cell.feature.as_str(),
            cell.value
        );
    }

    out
}
