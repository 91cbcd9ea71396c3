//! Score command: recompute score and combo from the recorded frames.

use anyhow::Result;
use rewind_core::export::{format_report_console, format_report_json};
use rewind_core::{Config, ReplayFixer};

use crate::cli::Inputs;
use crate::cli_utils;

pub fn run(config: Config, inputs: &Inputs) -> Result<()> {
    let (mut replay, chart) = cli_utils::load_inputs(inputs)?;
    let recorded = (replay.summary.score, replay.summary.max_combo);

    let report = ReplayFixer::new(config).score(&mut replay, &chart)?;

    if inputs.json {
        println!("{}", format_report_json(&report)?);
    } else {
        println!("{}", format_report_console(&report));
        eprintln!("Recorded: score {} / combo {}x", recorded.0, recorded.1);
    }
    Ok(())
}
