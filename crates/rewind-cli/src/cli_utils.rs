//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use rewind_core::{Chart, ChartCatalog, ChartIndex, Config, Mods, Replay};
use tracing::{info, warn};

use crate::cli::Inputs;

/// Load config from file, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        warn!("Config file {:?} not found, using defaults", path);
        return Ok(Config::default());
    }
    let config =
        Config::load(path).with_context(|| format!("Failed to load config {:?}", path))?;
    info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Load the replay (with any extra mods applied) and its chart.
pub fn load_inputs(inputs: &Inputs) -> Result<(Replay, Chart)> {
    let mut replay = Replay::load(&inputs.replay)
        .with_context(|| format!("Failed to load replay {:?}", inputs.replay))?;

    if let Some(extra) = &inputs.add_mods {
        let extra: Mods = extra.parse()?;
        replay.summary.mods = replay.summary.mods.union(extra);
        info!("Mods after injection: {}", replay.summary.mods);
    }

    let catalog = ChartCatalog::load(&inputs.charts)
        .with_context(|| format!("Failed to load charts {:?}", inputs.charts))?;
    let chart = catalog.require(&replay.summary.beatmap_hash)?.clone();
    info!("Loaded chart {} ({} objects)", chart.title, chart.objects.len());

    Ok((replay, chart))
}
