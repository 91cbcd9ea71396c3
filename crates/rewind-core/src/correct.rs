//! Aim correction of missed presses.
//!
//! A `Miss(Aim)` is turned into a hit by pulling the cursor toward the object
//! at the press frame, and by a decaying fraction of the same pull on the
//! surrounding frames so the cursor path stays smooth. Random draws come from
//! the caller's generator, so a seeded generator reproduces the same edit.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::chart::Position;
use crate::config::CorrectionConfig;
use crate::error::{Error, Result};
use crate::judge::GradedEvent;
use crate::replay::{FrameStream, RawFrame, ReplaySummary};

/// Exponent scale applied to the neighbour offset in the decay factor.
const DECAY_EXPONENT: f64 = 1.2;

/// What one correction did to the frame stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub frame_index: usize,
    pub object_time: i64,
    pub delta: Position,
    pub correction_ratio: f64,
    pub neighborhood_radius: usize,
    pub pull_power: f64,
    pub original_distance: f64,
    /// Distance from the corrected press frame to the object
    pub corrected_distance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct AimCorrector {
    config: CorrectionConfig,
    pinned: HashSet<usize>,
}

impl AimCorrector {
    pub fn new(config: CorrectionConfig) -> Self {
        Self {
            config,
            pinned: HashSet::new(),
        }
    }

    /// Frames the neighbourhood pull must leave alone, usually the source
    /// frames of other judged presses.
    pub fn with_pinned_frames(mut self, frames: impl IntoIterator<Item = usize>) -> Self {
        self.pinned = frames.into_iter().collect();
        self
    }

    /// Rewrite the frames around `miss` so the press lands inside `hit_radius`,
    /// then move one miss to the 300 counter of `summary`.
    ///
    /// The cursor is read from `frames` at the press's source index, so a
    /// press frame moved by an earlier correction is measured where it is now.
    /// Positions held by earlier `PressEvent`s/`GradedEvent`s are not updated.
    pub fn correct<R: Rng>(
        &self,
        miss: &GradedEvent,
        frames: &mut FrameStream,
        summary: &mut ReplaySummary,
        hit_radius: f64,
        rng: &mut R,
    ) -> Result<Correction> {
        if !miss.is_aim_miss() {
            return Err(Error::NotAnAimMiss);
        }
        self.config.validate()?;

        let center = miss.event.frame_index;
        let cursor = frames
            .get(center)
            .map(frame_position)
            .ok_or(Error::FrameOutOfRange {
                index: center,
                len: frames.len(),
            })?;
        let target = miss.object.position;
        let original_distance = cursor.distance(&target);
        if original_distance <= hit_radius {
            return Err(Error::NotAnAimMiss);
        }

        let valid_ratio = hit_radius / original_distance;
        let correction_ratio = rng.random_range(self.config.ratio_floor..1.0) * valid_ratio;
        let neighborhood_radius =
            rng.random_range(self.config.neighborhood_min..self.config.neighborhood_max);
        let pull_power = rng.random_range(self.config.pull_min..self.config.pull_max);

        let towards = target - cursor;
        let delta = Position::new(
            towards.x * (1.0 - correction_ratio),
            towards.y * (1.0 - correction_ratio),
        );

        nudge(frames, Some(center), delta, 1.0);
        for offset in 1..neighborhood_radius {
            let weight = pull_power.powf(offset as f64 * DECAY_EXPONENT);
            for index in [center.checked_sub(offset), center.checked_add(offset)] {
                if index.is_some_and(|i| self.pinned.contains(&i)) {
                    trace!("Leaving pinned frame {:?} in place", index);
                    continue;
                }
                nudge(frames, index, delta, weight);
            }
        }

        summary.promote_miss();

        let corrected_distance = frames
            .get(center)
            .map(|f| frame_position(f).distance(&target))
            .unwrap_or(original_distance);

        info!(
            "Corrected aim miss at {}ms (frame {}): {:.2} -> {:.2} (radius {:.2}, brush {})",
            miss.event.time,
            center,
            original_distance,
            corrected_distance,
            hit_radius,
            neighborhood_radius
        );

        Ok(Correction {
            frame_index: center,
            object_time: miss.object.time,
            delta,
            correction_ratio,
            neighborhood_radius,
            pull_power,
            original_distance,
            corrected_distance,
        })
    }
}

fn frame_position(frame: &RawFrame) -> Position {
    Position::new(f64::from(frame.x), f64::from(frame.y))
}

fn nudge(frames: &mut FrameStream, index: Option<usize>, delta: Position, weight: f64) {
    let Some(frame) = index.and_then(|i| frames.get_mut(i)) else {
        trace!("Skipping out-of-range neighbour {:?}", index);
        return;
    };
    frame.x += (delta.x * weight) as f32;
    frame.y += (delta.y * weight) as f32;
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::chart::TargetObject;
    use crate::judge::{MissReason, PressEvent, Verdict};

    const RADIUS: f64 = 30.0;

    fn straight_stream(len: usize) -> FrameStream {
        FrameStream::new(
            (0..len)
                .map(|i| RawFrame::new(16, 100.0, 100.0 + i as f32, 0))
                .collect(),
        )
    }

    fn aim_miss(frame_index: usize, frames: &FrameStream) -> GradedEvent {
        let frame = frames.frames[frame_index];
        let event = PressEvent {
            time: 1000,
            keys: 1,
            position: Position::new(f64::from(frame.x), f64::from(frame.y)),
            frame_index,
        };
        let object = TargetObject::circle(1000, frame.x as f64 + 60.0, frame.y as f64 + 20.0);
        GradedEvent::new(
            Verdict::Miss {
                reason: MissReason::Aim,
            },
            event,
            object,
        )
    }

    #[test]
    fn test_rejects_non_aim_miss() {
        let mut frames = straight_stream(10);
        let mut graded = aim_miss(5, &frames);
        graded.verdict = Verdict::Miss {
            reason: MissReason::Timing,
        };
        let mut summary = ReplaySummary::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result =
            AimCorrector::default().correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng);
        assert!(matches!(result, Err(Error::NotAnAimMiss)));
        assert_eq!(frames, straight_stream(10));
    }

    #[test]
    fn test_rejects_miss_inside_radius() {
        let mut frames = straight_stream(10);
        let graded = aim_miss(5, &frames);
        let mut summary = ReplaySummary::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result =
            AimCorrector::default().correct(&graded, &mut frames, &mut summary, 500.0, &mut rng);
        assert!(matches!(result, Err(Error::NotAnAimMiss)));
    }

    #[test]
    fn test_correction_moves_press_inside_radius() {
        let mut successes = 0;
        for seed in 0..64 {
            let mut frames = straight_stream(60);
            let graded = aim_miss(30, &frames);
            let mut summary = ReplaySummary::default();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let correction = AimCorrector::default()
                .correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng)
                .unwrap();

            assert!(correction.corrected_distance < correction.original_distance);
            if correction.corrected_distance < RADIUS {
                successes += 1;
            }
        }
        assert!(successes >= 32);
    }

    #[test]
    fn test_draws_stay_in_range() {
        for seed in 0..32 {
            let mut frames = straight_stream(60);
            let graded = aim_miss(30, &frames);
            let mut summary = ReplaySummary::default();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let c = AimCorrector::default()
                .correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng)
                .unwrap();

            let valid_ratio = RADIUS / c.original_distance;
            assert!(c.correction_ratio >= 0.5 * valid_ratio);
            assert!(c.correction_ratio < valid_ratio);
            assert!((12..18).contains(&c.neighborhood_radius));
            assert!((0.8..0.9).contains(&c.pull_power));
        }
    }

    #[test]
    fn test_neighbourhood_decays_and_stops() {
        let original = straight_stream(60);
        let mut frames = original.clone();
        let graded = aim_miss(30, &frames);
        let mut summary = ReplaySummary::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let c = AimCorrector::default()
            .correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng)
            .unwrap();

        let shift = |i: usize| (frames.frames[i].x - original.frames[i].x).abs();
        assert!(shift(30) > shift(29));
        assert!(shift(29) > shift(28));
        assert!((shift(29) - shift(31)).abs() < 1e-4);

        let reach = c.neighborhood_radius - 1;
        assert!(shift(30 - reach) > 0.0);
        assert_eq!(frames.frames[30 - reach - 1], original.frames[30 - reach - 1]);
        assert_eq!(frames.frames[30 + reach + 1], original.frames[30 + reach + 1]);
    }

    #[test]
    fn test_edges_are_skipped() {
        let mut frames = straight_stream(3);
        let graded = aim_miss(0, &frames);
        let mut summary = ReplaySummary {
            count_300: 1,
            count_miss: 1,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let c = AimCorrector::default()
            .correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng)
            .unwrap();

        assert_eq!(frames.len(), 3);
        assert!(c.corrected_distance < RADIUS);
        assert_eq!(summary.count_miss, 0);
        assert_eq!(summary.count_300, 2);
    }

    #[test]
    fn test_same_seed_same_edit() {
        let run = |seed| {
            let mut frames = straight_stream(40);
            let graded = aim_miss(20, &frames);
            let mut summary = ReplaySummary::default();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            AimCorrector::default()
                .correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng)
                .unwrap();
            frames
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }

    #[test]
    fn test_missing_center_frame_is_an_error() {
        let mut frames = straight_stream(10);
        let mut graded = aim_miss(5, &frames);
        graded.event.frame_index = 10;
        let mut summary = ReplaySummary {
            count_miss: 1,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result =
            AimCorrector::default().correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng);

        assert!(matches!(
            result,
            Err(Error::FrameOutOfRange { index: 10, len: 10 })
        ));
        assert_eq!(frames, straight_stream(10));
        assert_eq!(summary.count_miss, 1);
        assert_eq!(summary.count_300, 0);
    }

    #[test]
    fn test_cursor_is_read_from_frames() {
        let mut frames = straight_stream(60);
        let graded = aim_miss(30, &frames);
        // an earlier edit already moved the press frame halfway in
        frames.frames[30].x += 30.0;
        frames.frames[30].y += 10.0;
        let moved = frame_position(&frames.frames[30]);

        let mut summary = ReplaySummary::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let c = AimCorrector::default()
            .correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng)
            .unwrap();

        assert!((c.original_distance - moved.distance(&graded.object.position)).abs() < 1e-9);
        assert!(c.corrected_distance < RADIUS);
    }

    #[test]
    fn test_pinned_frames_are_not_pulled() {
        let original = straight_stream(60);
        let mut frames = original.clone();
        let graded = aim_miss(30, &frames);
        let mut summary = ReplaySummary::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        AimCorrector::default()
            .with_pinned_frames([28, 33])
            .correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng)
            .unwrap();

        assert_eq!(frames.frames[28], original.frames[28]);
        assert_eq!(frames.frames[33], original.frames[33]);
        assert_ne!(frames.frames[29], original.frames[29]);
        assert_ne!(frames.frames[32], original.frames[32]);
    }

    #[test]
    fn test_invalid_ranges_are_rejected_before_drawing() {
        let mut frames = straight_stream(10);
        let graded = aim_miss(5, &frames);
        let mut summary = ReplaySummary::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let corrector = AimCorrector::new(CorrectionConfig {
            neighborhood_min: 18,
            neighborhood_max: 12,
            ..Default::default()
        });
        let result = corrector.correct(&graded, &mut frames, &mut summary, RADIUS, &mut rng);
        assert!(matches!(result, Err(Error::ConfigParseError(_))));
        assert_eq!(frames, straight_stream(10));
    }
}
