//! Fix command: correct aim misses and save the edited replay.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rewind_core::export::{format_report_console, format_report_json};
use rewind_core::replay::corrected_path;
use rewind_core::{Config, ReplayFixer};

use crate::cli::Inputs;
use crate::cli_utils;

pub fn run(
    mut config: Config,
    inputs: &Inputs,
    output: Option<&Path>,
    seed: Option<u64>,
    full_combo: bool,
) -> Result<()> {
    if seed.is_some() {
        config.correction.seed = seed;
    }
    config.score.force_full_combo |= full_combo;

    let (mut replay, chart) = cli_utils::load_inputs(inputs)?;

    let fixer = ReplayFixer::new(config);
    let mut rng = fixer.rng();
    let report = fixer.fix(&mut replay, &chart, &mut rng)?;

    let output: PathBuf = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| corrected_path(&inputs.replay));
    replay
        .save(&output)
        .with_context(|| format!("Failed to write {:?}", output))?;

    if inputs.json {
        println!("{}", format_report_json(&report)?);
    } else {
        println!("{}", format_report_console(&report));
    }
    eprintln!("Saved corrected replay to: {}", output.display());
    Ok(())
}
