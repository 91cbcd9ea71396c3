//! CLI argument definitions for rewind.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rewind")]
#[command(about = "Replay judgement reconstruction and aim correction", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "rewind.toml", env = "REWIND_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Inputs shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct Inputs {
    /// Replay file (JSON)
    #[arg(short, long)]
    pub replay: PathBuf,
    /// Chart catalog file (JSON array of charts)
    #[arg(long, default_value = "charts.json")]
    pub charts: PathBuf,
    /// Extra mods to apply before judging (e.g. "HD,DT")
    #[arg(long, value_name = "MODS")]
    pub add_mods: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print hit windows and the judgement of every object
    Judge {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Judge and recompute score/combo without editing frames
    Score {
        #[command(flatten)]
        inputs: Inputs,
    },
    /// Correct aim misses and write the corrected replay
    Fix {
        #[command(flatten)]
        inputs: Inputs,
        /// Output file path (default: <replay>_corrected.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// RNG seed for reproducible corrections
        #[arg(long)]
        seed: Option<u64>,
        /// Set max combo to the chart's max combo afterwards
        #[arg(long)]
        full_combo: bool,
    },
}
