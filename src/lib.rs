//! Genre similarity engine for edge-bundling charts.
//!
//! Core modules:
//! - [`track`] - Per-track input records and their validation
//! - [`profile`] - Per-genre mean feature vectors
//! - [`algorithm`] - Pairwise similarity and edge selection
//! - [`chart`] - Hand-off shapes for chart renderers
//!
//! ### Supporting Modules
//!
//! - [`feature`] - The five audio features and their bounds
//! - [`config`] - Similarity threshold configuration
//! - [`error`] - Validation and configuration errors
//! - [`sample`] - Built-in fifteen-genre sample dataset
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`report`] - Table and JSON output for the command line
//!
//! ## Quick Start Example
//!
//! ```
//! use genrelink::{algorithm, chart, config::SimilarityConfig, profile, sample};
//!
//! let tracks = sample::music_data();
//! let profiles = profile::build_profiles(&tracks)?;
//!
//! let config = SimilarityConfig::default();
//! let edges = algorithm::select_edges(&profiles, config.threshold);
//! for edge in &edges {
//!     println!("{} <-> {}: {:.3}", edge.source, edge.target, edge.value);
//! }
//!
//! let graph = chart::bundle_graph(&profiles, config.threshold);
//! assert_eq!(graph.nodes.len(), profiles.len());
//! # Ok::<(), genrelink::error::ValidationError>(())
//! ```
//!
//! ## Algorithm Details
//!
//! - Each genre profile is the arithmetic mean of its tracks' danceability,
//!   energy, acousticness, valence and popularity, popularity divided by 100
//! - Similarity is `1 - sqrt(sum of squared differences / 5)`
//! - A pair becomes an edge only when its similarity is strictly above the
//!   threshold (0.75 unless configured)
//! - Pairs are enumerated once each in genre first-appearance order, so the
//!   edge list is reproducible for a given input order
//!
//! ## Error Handling
//!
//! Library functions return typed errors from [`error`]. A record with an
//! empty genre, a NaN or infinite value, or a value outside its bounds is
//! rejected with its index and field. Empty input is not an error.

pub mod algorithm;
pub mod chart;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod feature;
pub mod profile;
pub mod report;
pub mod sample;
pub mod track;
