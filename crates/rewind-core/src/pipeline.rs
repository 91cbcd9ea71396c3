//! End-to-end replay fixing: extract presses, judge, correct aim misses and
//! rebuild the score on the replay's summary record.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chart::Chart;
use crate::config::Config;
use crate::correct::{AimCorrector, Correction};
use crate::error::Result;
use crate::judge::{
    DifficultyWindows, GradedEvent, HitGrade, JudgementEngine, MissReason, Verdict,
    ensure_time_ordered, extract_press_events,
};
use crate::replay::Replay;
use crate::score::{self, Reconstruction};

/// Tally of a graded sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GradeCounts {
    pub hit_300: u32,
    pub hit_100: u32,
    pub hit_50: u32,
    pub aim_miss: u32,
    pub timing_miss: u32,
}

impl GradeCounts {
    pub fn tally(graded: &[GradedEvent]) -> Self {
        let mut counts = Self::default();
        for event in graded {
            match event.verdict {
                Verdict::Hit { grade: HitGrade::Hit300 } => counts.hit_300 += 1,
                Verdict::Hit { grade: HitGrade::Hit100 } => counts.hit_100 += 1,
                Verdict::Hit { grade: HitGrade::Hit50 } => counts.hit_50 += 1,
                Verdict::Miss { reason: MissReason::Aim } => counts.aim_miss += 1,
                Verdict::Miss { reason: MissReason::Timing } => counts.timing_miss += 1,
            }
        }
        counts
    }

    pub fn misses(&self) -> u32 {
        self.aim_miss + self.timing_miss
    }
}

/// Windows and graded events for one replay
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub windows: DifficultyWindows,
    pub graded: Vec<GradedEvent>,
}

/// Outcome of a scoring or fixing run
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub chart_hash: String,
    pub title: String,
    pub mods: String,
    pub windows: DifficultyWindows,
    pub before: GradeCounts,
    pub after: GradeCounts,
    pub corrections: Vec<Correction>,
    pub reconstruction: Reconstruction,
    pub score: u64,
    pub max_combo: u32,
}

pub struct ReplayFixer {
    config: Config,
}

impl ReplayFixer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generator for corrections: seeded when the config fixes a seed.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.correction.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Derive windows from the chart and the replay's mods and grade every object.
    pub fn analyze(&self, replay: &Replay, chart: &Chart) -> Result<Analysis> {
        let mods = replay.summary.mods;
        for (a, b) in mods.conflicts() {
            warn!(
                "Replay has both {} and {}; applying both multipliers",
                a.acronym(),
                b.acronym()
            );
        }

        let windows = DifficultyWindows::from_params(&chart.difficulty(mods));
        info!(
            "Hit windows: 300={}ms 100={}ms 50={}ms, circle radius {:.2}",
            windows.window_300, windows.window_100, windows.window_50, windows.hit_radius
        );

        let events = extract_press_events(&replay.frames);
        ensure_time_ordered(&chart.objects, &events)?;
        debug!(
            "Extracted {} press events from {} frames",
            events.len(),
            replay.frames.len()
        );

        let graded = JudgementEngine::new(windows)
            .with_slider_aim_check(mods.score_v2())
            .with_policy(self.config.judge.timing_miss_policy)
            .judge(&chart.objects, &events)?;

        Ok(Analysis { windows, graded })
    }

    /// Recompute score and combo without touching the frames.
    pub fn score(&self, replay: &mut Replay, chart: &Chart) -> Result<FixReport> {
        let analysis = self.analyze(replay, chart)?;
        let counts = GradeCounts::tally(&analysis.graded);
        self.finish(replay, chart, &analysis, counts, counts, Vec::new())
    }

    /// Correct every aim miss, re-judge the edited frames and rebuild the score.
    pub fn fix<R: Rng>(&self, replay: &mut Replay, chart: &Chart, rng: &mut R) -> Result<FixReport> {
        let analysis = self.analyze(replay, chart)?;
        let before = GradeCounts::tally(&analysis.graded);

        // Judged presses keep their recorded position unless they are the miss being corrected.
        let corrector = AimCorrector::new(self.config.correction.clone())
            .with_pinned_frames(analysis.graded.iter().map(|g| g.event.frame_index));
        let mut corrections = Vec::new();
        for miss in analysis.graded.iter().filter(|g| g.is_aim_miss()) {
            let correction = corrector.correct(
                miss,
                &mut replay.frames,
                &mut replay.summary,
                analysis.windows.hit_radius,
                rng,
            )?;
            corrections.push(correction);
        }
        info!("Applied {} aim corrections", corrections.len());

        let analysis = if corrections.is_empty() {
            analysis
        } else {
            self.analyze(replay, chart)?
        };
        let after = GradeCounts::tally(&analysis.graded);

        self.finish(replay, chart, &analysis, before, after, corrections)
    }

    fn finish(
        &self,
        replay: &mut Replay,
        chart: &Chart,
        analysis: &Analysis,
        before: GradeCounts,
        after: GradeCounts,
        corrections: Vec<Correction>,
    ) -> Result<FixReport> {
        let reconstruction = score::reconstruct(&analysis.graded, chart, &replay.summary)?;
        reconstruction.apply(&mut replay.summary);
        if self.config.score.force_full_combo {
            replay.summary.max_combo = chart.max_combo;
        }
        info!(
            "{} score {} (max combo {})",
            reconstruction.formula, replay.summary.score, replay.summary.max_combo
        );

        Ok(FixReport {
            chart_hash: chart.hash.clone(),
            title: chart.title.to_string(),
            mods: replay.summary.mods.to_string(),
            windows: analysis.windows,
            before,
            after,
            corrections,
            reconstruction,
            score: replay.summary.score,
            max_combo: replay.summary.max_combo,
        })
    }
}
