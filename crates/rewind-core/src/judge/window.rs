use serde::{Deserialize, Serialize};

use crate::chart::DifficultyParams;

/// Hit circle radius is scaled by this to match the game's rounding.
pub const RADIUS_FUDGE: f64 = 1.00041;

const WINDOW_50: (f64, f64, f64) = (200.0, 150.0, 100.0);
const WINDOW_100: (f64, f64, f64) = (140.0, 100.0, 60.0);
const WINDOW_300: (f64, f64, f64) = (80.0, 50.0, 20.0);
const RADIUS: (f64, f64, f64) = (54.4, 32.0, 9.6);

/// Piecewise-linear difficulty rate: `min` at 0, `mid` at 5, `max` at 10.
///
/// Values outside 0..=10 extrapolate along the nearer segment.
pub fn diff_rate(value: f64, (min, mid, max): (f64, f64, f64)) -> f64 {
    if value > 5.0 {
        mid + (max - mid) * (value - 5.0) / 5.0
    } else if value < 5.0 {
        mid - (mid - min) * (5.0 - value) / 5.0
    } else {
        mid
    }
}

/// Timing windows (ms) and hit radius for one chart/mod combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyWindows {
    pub window_300: i64,
    pub window_100: i64,
    pub window_50: i64,
    pub hit_radius: f64,
}

impl DifficultyWindows {
    pub fn new(od: f64, cs: f64) -> Self {
        Self {
            window_300: diff_rate(od, WINDOW_300).floor() as i64,
            window_100: diff_rate(od, WINDOW_100).floor() as i64,
            window_50: diff_rate(od, WINDOW_50).floor() as i64,
            hit_radius: diff_rate(cs, RADIUS) * RADIUS_FUDGE,
        }
    }

    /// Windows from already mod-adjusted difficulty
    pub fn from_params(params: &DifficultyParams) -> Self {
        Self::new(params.od, params.cs)
    }
}
