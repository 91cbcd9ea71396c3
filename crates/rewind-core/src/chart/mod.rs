//! Chart collaborator: target objects and difficulty parameters keyed by
//! the chart's content hash.
//!
//! - `TargetObject`, `ObjectKind`, `Position` - timed targets
//! - `Chart` - base difficulty, objects and max combo
//! - `ChartIndex` - lookup by hash; `ChartCatalog` is the JSON-backed index

mod object;

pub use object::*;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::mods::Mods;

const HARD_ROCK_FACTOR: f64 = 1.4;
const HARD_ROCK_CS_FACTOR: f64 = 1.3;
const EASY_FACTOR: f64 = 0.5;
const MAX_DIFFICULTY: f64 = 10.0;

/// Difficulty parameters after mod adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    pub od: f64,
    pub cs: f64,
    pub hp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub hash: String,
    #[serde(default)]
    pub title: Arc<str>,
    pub od: f64,
    pub cs: f64,
    pub hp: f64,
    pub max_combo: u32,
    pub objects: Vec<TargetObject>,
}

impl Chart {
    /// Difficulty with HardRock / Easy applied.
    ///
    /// HardRock scales OD and HP by 1.4 and CS by 1.3, capped at 10.
    /// Easy halves all three. Other mods leave the values unchanged.
    pub fn difficulty(&self, mods: Mods) -> DifficultyParams {
        let adjust = |value: f64, hard_rock_factor: f64| {
            if mods.hard_rock() {
                (value * hard_rock_factor).min(MAX_DIFFICULTY)
            } else if mods.easy() {
                value * EASY_FACTOR
            } else {
                value
            }
        };
        DifficultyParams {
            od: adjust(self.od, HARD_ROCK_FACTOR),
            cs: adjust(self.cs, HARD_ROCK_CS_FACTOR),
            hp: adjust(self.hp, HARD_ROCK_FACTOR),
        }
    }

    /// Seconds between the first and last object
    pub fn drain_seconds(&self) -> f64 {
        match (self.objects.first(), self.objects.last()) {
            (Some(first), Some(last)) => (last.time - first.time) as f64 / 1000.0,
            _ => 0.0,
        }
    }
}

/// Lookup of charts by content hash
pub trait ChartIndex {
    fn chart(&self, hash: &str) -> Option<&Chart>;

    fn require(&self, hash: &str) -> Result<&Chart> {
        self.chart(hash)
            .ok_or_else(|| Error::ChartNotFound(hash.to_string()))
    }
}

/// In-memory chart index, loadable from a JSON array of charts
#[derive(Debug, Clone, Default)]
pub struct ChartCatalog {
    charts: HashMap<String, Chart>,
}

impl ChartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let charts: Vec<Chart> = serde_json::from_str(content)?;
        let mut catalog = Self::new();
        for chart in charts {
            catalog.insert(chart);
        }
        debug!("Loaded {} charts", catalog.len());
        Ok(catalog)
    }

    pub fn insert(&mut self, chart: Chart) {
        self.charts.insert(chart.hash.to_ascii_lowercase(), chart);
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl ChartIndex for ChartCatalog {
    fn chart(&self, hash: &str) -> Option<&Chart> {
        self.charts.get(&hash.to_ascii_lowercase())
    }
}
