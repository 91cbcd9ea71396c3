use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mods::Mods;

/// Summary record stored alongside a replay's frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub beatmap_hash: String,
    #[serde(default)]
    pub player_name: String,
    pub mods: Mods,
    pub count_300: u32,
    pub count_100: u32,
    pub count_50: u32,
    #[serde(default)]
    pub count_geki: u32,
    #[serde(default)]
    pub count_katu: u32,
    pub count_miss: u32,
    pub score: u64,
    pub max_combo: u32,
    #[serde(default)]
    pub perfect: bool,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ReplaySummary {
    /// Total judged objects (300 + 100 + 50 + miss)
    pub fn total_hits(&self) -> u32 {
        self.count_300 + self.count_100 + self.count_50 + self.count_miss
    }

    /// Convert one miss into a 300, as done after an aim correction.
    pub fn promote_miss(&mut self) {
        self.count_miss = self.count_miss.saturating_sub(1);
        self.count_300 += 1;
    }
}
