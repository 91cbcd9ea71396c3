use crate::chart::DifficultyParams;
use crate::error::{Error, Result};
use crate::judge::GradedEvent;
use crate::mods::Mods;

/// Object density contribution is clamped to this before scaling.
const MAX_DENSITY: f64 = 16.0;

/// Inputs of the legacy difficulty multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyParams {
    pub difficulty: DifficultyParams,
    pub object_count: usize,
    pub drain_seconds: f64,
    pub mods: Mods,
}

impl LegacyParams {
    /// `round(hp + cs + od + clamp(objects / drain * 8, 0, 16) / 38 * 5)`,
    /// rounding half to even.
    pub fn difficulty_multiplier(&self) -> Result<f64> {
        if self.drain_seconds <= 0.0 {
            return Err(Error::DivisionByZero("chart drain time"));
        }
        let density = (self.object_count as f64 / self.drain_seconds * 8.0).clamp(0.0, MAX_DENSITY);
        let DifficultyParams { od, cs, hp } = self.difficulty;
        Ok((hp + cs + od + density / 38.0 * 5.0).round_ties_even())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyScore {
    pub max_combo: u32,
    pub score: u64,
}

/// Walk the graded events accumulating
/// `floor(grade * (1 + combo * difficulty * mods / 25))`, where `combo` is the
/// run length before the current event.
pub fn reconstruct(graded: &[GradedEvent], params: &LegacyParams) -> Result<LegacyScore> {
    let difficulty = params.difficulty_multiplier()?;
    let mod_multiplier = params.mods.score_multiplier();

    let mut score = 0u64;
    let mut combo = 0u32;
    let mut max_combo = 0u32;

    for event in graded {
        let bonus = 1.0 + f64::from(combo) * difficulty * mod_multiplier / 25.0;
        score += (f64::from(event.grade_value()) * bonus).floor() as u64;

        if event.is_miss() {
            max_combo = max_combo.max(combo);
            combo = 0;
        } else {
            combo += 1;
        }
    }

    Ok(LegacyScore {
        max_combo: max_combo.max(combo),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mods::ModFlag;
    use crate::score::test_support::{hit, miss};

    fn params(mods: Mods) -> LegacyParams {
        LegacyParams {
            difficulty: DifficultyParams {
                od: 5.0,
                cs: 4.0,
                hp: 5.0,
            },
            object_count: 100,
            drain_seconds: 100.0,
            mods,
        }
    }

    #[test]
    fn test_difficulty_multiplier() {
        // 5 + 4 + 5 + (8 / 38 * 5 = 1.05...) = 15.05 -> 15
        assert_eq!(params(Mods::NONE).difficulty_multiplier().unwrap(), 15.0);

        let dense = LegacyParams {
            object_count: 10_000,
            ..params(Mods::NONE)
        };
        // density clamps to 16: 14 + 16 / 38 * 5 = 16.105 -> 16
        assert_eq!(dense.difficulty_multiplier().unwrap(), 16.0);
    }

    #[test]
    fn test_difficulty_multiplier_rounds_half_to_even() {
        let p = LegacyParams {
            difficulty: DifficultyParams {
                od: 4.5,
                cs: 4.0,
                hp: 4.0,
            },
            object_count: 0,
            drain_seconds: 10.0,
            mods: Mods::NONE,
        };
        assert_eq!(p.difficulty_multiplier().unwrap(), 12.0);
    }

    #[test]
    fn test_zero_drain_time() {
        let p = LegacyParams {
            drain_seconds: 0.0,
            ..params(Mods::NONE)
        };
        assert!(matches!(
            reconstruct(&[hit(300)], &p),
            Err(Error::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_score_accumulation() {
        // difficulty 15, no mods: bonus = 1 + combo * 15 / 25 = 1 + 0.6 * combo
        let graded = vec![hit(300), hit(100), miss(), hit(50)];
        let result = reconstruct(&graded, &params(Mods::NONE)).unwrap();
        // 300 * 1 + floor(100 * 1.6) + 0 + 50 * 1
        assert_eq!(result.score, 300 + 160 + 50);
        assert_eq!(result.max_combo, 2);
    }

    #[test]
    fn test_mod_multiplier_applies() {
        let graded = vec![hit(300), hit(300)];
        let hd = reconstruct(&graded, &params(Mods::NONE.with(ModFlag::Hidden))).unwrap();
        // second hit: floor(300 * (1 + 15 * 1.06 / 25)) = floor(490.8)
        assert_eq!(hd.score, 300 + 490);
        let nm = reconstruct(&graded, &params(Mods::NONE)).unwrap();
        assert!(hd.score > nm.score);
    }

    #[test]
    fn test_score_monotonic_when_appending() {
        let pattern = [hit(300), hit(100), miss(), hit(50), hit(300), miss(), miss(), hit(300)];
        let p = params(Mods::NONE.with(ModFlag::HardRock));
        let mut previous = 0;
        for len in 0..=pattern.len() {
            let score = reconstruct(&pattern[..len], &p).unwrap().score;
            assert!(score >= previous);
            previous = score;
        }
    }
}
