use crate::error::{Error, Result};
use crate::judge::GradedEvent;
use crate::replay::ReplaySummary;

use super::combo::max_combo;

const MAX_SCORE: f64 = 1_000_000.0;
const ACCURACY_PORTION: f64 = 0.3;
const COMBO_PORTION: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreV2 {
    pub max_combo: u32,
    pub accuracy: f64,
    pub total: f64,
}

/// Accuracy from the replay's recorded hit counters.
pub fn accuracy(summary: &ReplaySummary) -> Result<f64> {
    let total = summary.total_hits();
    if total == 0 {
        return Err(Error::DivisionByZero("replay has no recorded hits"));
    }
    let weighted = f64::from(summary.count_300)
        + f64::from(summary.count_100) * 100.0 / 300.0
        + f64::from(summary.count_50) * 50.0 / 300.0;
    Ok(weighted / f64::from(total))
}

/// `1_000_000 * (accuracy * 0.3 + max_combo / chart_max_combo * 0.7)`
pub fn reconstruct(
    graded: &[GradedEvent],
    summary: &ReplaySummary,
    chart_max_combo: u32,
) -> Result<ScoreV2> {
    let accuracy = accuracy(summary)?;
    if chart_max_combo == 0 {
        return Err(Error::DivisionByZero("chart max combo is zero"));
    }
    let max_combo = max_combo(graded);
    let combo_ratio = f64::from(max_combo) / f64::from(chart_max_combo);

    Ok(ScoreV2 {
        max_combo,
        accuracy,
        total: MAX_SCORE * (accuracy * ACCURACY_PORTION + combo_ratio * COMBO_PORTION),
    })
}
