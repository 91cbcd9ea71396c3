mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rewind=info,rewind_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config)?;

    match args.command {
        Command::Judge { inputs } => commands::judge::run(config, &inputs),
        Command::Score { inputs } => commands::score::run(config, &inputs),
        Command::Fix {
            inputs,
            output,
            seed,
            full_combo,
        } => commands::fix::run(config, &inputs, output.as_deref(), seed, full_combo),
    }
}
