//! # Command-Line Interface Module
//!
//! Defines the `genrelink` command line with Clap derive macros. Every command
//! works on the built-in sample dataset and prints either a plain table or
//! JSON for a chart renderer.
//!
//! ## Commands
//!
//! - `profiles`: Per-genre mean feature vectors
//! - `edges`: Genre pairs above the similarity threshold
//! - `heatmap`: Flat genre/feature cells
//! - `graph`: Nodes and edges for an edge-bundling chart (JSON)
//! - `completion`: Shell completion scripts
//!
//! ## Examples
//!
//! ```bash
//! genrelink edges --threshold 0.85
//! GENRELINK_THRESHOLD=0.7 genrelink graph
//! genrelink heatmap --format json
//! ```

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_THRESHOLD;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// How results are printed.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "genrelink")]
#[command(about = "Genrelink: genre profiles and similarity edges for edge-bundling charts")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the mean feature profile of every genre
    ///
    /// Popularity is shown on the same 0-1 scale as the other features.
    Profiles {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List genre pairs whose similarity exceeds the threshold
    ///
    /// Similarity is one minus the normalized Euclidean distance between
    /// two genre profiles. A pair exactly at the threshold is left out.
    Edges {
        /// Similarity a pair must strictly exceed
        #[arg(short, long, env = "GENRELINK_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the genre/feature heatmap cells
    Heatmap {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the edge-bundling graph (sorted nodes plus edges) as JSON
    Graph {
        /// Similarity a pair must strictly exceed
        #[arg(short, long, env = "GENRELINK_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },

    /// Generate shell completions
    ///
    /// Usage: genrelink completion bash > ~/.local/share/bash-completion/completions/genrelink
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
