//! Command-line interface for Eisenstein.
//!
//! The CLI is built with clap and covers the full pipeline:
//!
//! - Outline generation from a free-text video idea
//! - Registry rebuilds from the saved manifest
//! - Single-section regeneration and revision
//! - Inspecting the current registry state

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Eisenstein CLI - LLM-driven section registry builder.
#[derive(Parser)]
#[command(name = "eisenstein")]
#[command(about = "CLI for building Remotion section registries with an LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding section artifacts (overrides configuration)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an outline for a video idea and rebuild the registry
    Outline {
        /// Free-text description of the video
        idea: String,

        /// Model to use (overrides configuration)
        #[arg(short, long)]
        model: Option<String>,

        /// Print the parsed outline without touching any files
        #[arg(long)]
        dry_run: bool,
    },

    /// Rebuild all artifacts from the saved manifest, discarding edits
    Rebuild,

    /// Regenerate one section's artifact through the LLM
    Edit {
        /// Section identifier, e.g. Intro
        section: String,

        /// What to change or depict
        instruction: String,

        /// Generate from the section description instead of revising
        /// the current artifact
        #[arg(long)]
        fresh: bool,

        /// Model to use (overrides configuration)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Print the sections recorded in the registry manifest
    Show,
}

impl Cli {
    /// Parse CLI arguments from the process environment.
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}
