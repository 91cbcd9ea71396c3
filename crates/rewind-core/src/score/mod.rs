//! Score and combo reconstruction from graded events.
//!
//! Two formulas are available, selected by the ScoreV2 mod:
//! - `legacy` - combo-weighted accumulation with difficulty and mod multipliers
//! - `v2` - accuracy/combo blend out of 1,000,000

pub mod combo;
pub mod legacy;
pub mod v2;

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::chart::Chart;
use crate::error::Result;
use crate::judge::GradedEvent;
use crate::replay::ReplaySummary;

use legacy::LegacyParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFormula {
    Legacy,
    #[strum(serialize = "ScoreV2")]
    V2,
}

impl ScoreFormula {
    pub fn for_summary(summary: &ReplaySummary) -> Self {
        if summary.mods.score_v2() {
            Self::V2
        } else {
            Self::Legacy
        }
    }
}

/// Result of a score reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reconstruction {
    pub formula: ScoreFormula,
    pub max_combo: u32,
    pub score: u64,
}

impl Reconstruction {
    /// Write the new score onto the summary. The legacy formula also
    /// records its max combo; score-v2 leaves the recorded combo alone.
    pub fn apply(&self, summary: &mut ReplaySummary) {
        summary.score = self.score;
        if self.formula == ScoreFormula::Legacy {
            summary.max_combo = self.max_combo;
        }
    }
}

/// Recompute score and max combo with the formula the replay's mods select.
pub fn reconstruct(
    graded: &[GradedEvent],
    chart: &Chart,
    summary: &ReplaySummary,
) -> Result<Reconstruction> {
    match ScoreFormula::for_summary(summary) {
        ScoreFormula::Legacy => {
            let params = LegacyParams {
                difficulty: chart.difficulty(summary.mods),
                object_count: chart.objects.len(),
                drain_seconds: chart.drain_seconds(),
                mods: summary.mods,
            };
            let result = legacy::reconstruct(graded, &params)?;
            Ok(Reconstruction {
                formula: ScoreFormula::Legacy,
                max_combo: result.max_combo,
                score: result.score,
            })
        }
        ScoreFormula::V2 => {
            let result = v2::reconstruct(graded, summary, chart.max_combo)?;
            Ok(Reconstruction {
                formula: ScoreFormula::V2,
                max_combo: result.max_combo,
                score: result.total as u64,
            })
        }
    }
}
