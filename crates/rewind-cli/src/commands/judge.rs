//! Judge command: windows and per-object judgements.

use anyhow::Result;
use rewind_core::export::format_graded_line;
use rewind_core::pipeline::GradeCounts;
use rewind_core::{Config, ReplayFixer};

use crate::cli::Inputs;
use crate::cli_utils;

pub fn run(config: Config, inputs: &Inputs) -> Result<()> {
    let (replay, chart) = cli_utils::load_inputs(inputs)?;
    let analysis = ReplayFixer::new(config).analyze(&replay, &chart)?;

    if inputs.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let w = &analysis.windows;
    println!(
        "300: {}ms  100: {}ms  50: {}ms  radius: {:.2}",
        w.window_300, w.window_100, w.window_50, w.hit_radius
    );
    for event in &analysis.graded {
        println!("{}", format_graded_line(event));
    }

    let counts = GradeCounts::tally(&analysis.graded);
    eprintln!(
        "{} judged: {} x300, {} x100, {} x50, {} aim miss, {} timing miss",
        analysis.graded.len(),
        counts.hit_300,
        counts.hit_100,
        counts.hit_50,
        counts.aim_miss,
        counts.timing_miss
    );
    Ok(())
}
