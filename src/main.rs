//! # Genrelink
//!
//! Command-line front end for the genre similarity engine. Every command runs
//! over the built-in sample dataset.
//!
//! ## Usage
//!
//! ```bash
//! # Per-genre feature means
//! genrelink profiles
//!
//! # Similar genre pairs, stricter threshold, as JSON
//! genrelink edges --threshold 0.85 --format json
//!
//! # Nodes and edges for an edge-bundling chart
//! genrelink graph
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};

use genrelink::cli::{self, OutputFormat};
use genrelink::config::SimilarityConfig;
use genrelink::{algorithm, chart, completion, profile, report, sample};

/// Main entry point for the Genrelink application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the library.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug genrelink edges` - Profile and edge counts
/// - `RUST_LOG=genrelink::algorithm=trace genrelink edges` - Every pair score
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    debug!("Parsed arguments: {args:?}");

    match args.command {
        cli::Command::Profiles { format } => {
            let profiles = load_profiles()?;
            let output = match format {
                OutputFormat::Table => report::profiles_table(&profiles),
                OutputFormat::Json => report::to_json(&profiles)?,
            };
            print!("{output}");
            println_if_json(format);
        }
        cli::Command::Edges { threshold, format } => {
            let config = SimilarityConfig::new(threshold).context("Invalid --threshold")?;
            info!("Selecting genre edges above {}", config.threshold);

            let edges = algorithm::similarity_edges(&sample::music_data(), &config)
                .context("Sample dataset failed validation")?;
            let output = match format {
                OutputFormat::Table => report::edges_table(&edges),
                OutputFormat::Json => report::to_json(&edges)?,
            };
            print!("{output}");
            println_if_json(format);
        }
        cli::Command::Heatmap { format } => {
            let cells = chart::heatmap_cells(&load_profiles()?);
            let output = match format {
                OutputFormat::Table => report::heatmap_table(&cells),
                OutputFormat::Json => report::to_json(&cells)?,
            };
            print!("{output}");
            println_if_json(format);
        }
        cli::Command::Graph { threshold } => {
            let config = SimilarityConfig::new(threshold).context("Invalid --threshold")?;
            let graph = chart::bundle_graph(&load_profiles()?, config.threshold);

            if let Some((min, max)) = chart::edge_value_range(&graph.edges) {
                info!("Edge values range from {min:.4} to {max:.4}");
            }
            println!("{}", report::to_json(&graph)?);
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
    }

    Ok(())
}

fn load_profiles() -> Result<profile::GenreProfiles> {
    profile::build_profiles(&sample::music_data()).context("Sample dataset failed validation")
}

/// Pretty JSON has no trailing newline; tables already end with one.
fn println_if_json(format: OutputFormat) {
    if format == OutputFormat::Json {
        println!();
    }
}
