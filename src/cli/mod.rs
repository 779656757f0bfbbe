//! CLI interface for Tactile

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect control panels and replay scripted interactions
#[derive(Parser)]
#[command(name = "tactile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log engine transitions
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a panel file
    Check {
        /// Panel file path
        #[arg(short, long, default_value = "tactile.yaml")]
        config: PathBuf,
    },

    /// Print a control's tick marks
    Ticks {
        /// Panel file path
        #[arg(short, long, default_value = "tactile.yaml")]
        config: PathBuf,

        /// Control name
        #[arg(long)]
        control: String,
    },

    /// Run a scripted interaction against a control
    Replay {
        /// Panel file path
        #[arg(short, long, default_value = "tactile.yaml")]
        config: PathBuf,

        /// Script file path (YAML or JSON)
        #[arg(short, long)]
        script: PathBuf,

        /// Print emissions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an example panel file
    Init,
}
