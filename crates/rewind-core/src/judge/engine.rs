use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{ObjectKind, TargetObject};
use crate::error::{Error, Result};

use super::events::PressEvent;
use super::graded::{GradedEvent, HitGrade, MissReason, Verdict};
use super::window::DifficultyWindows;

/// How the object cursor moves after a timing miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingMissPolicy {
    /// Only circles are consumed by a timing miss. A late slider or spinner
    /// stays current and is missed again against the next event.
    #[default]
    StallNonCircle,
    /// Every timing miss consumes its object.
    AlwaysAdvance,
}

/// Two-cursor judgement over time-ordered objects and press events
#[derive(Debug, Clone)]
pub struct JudgementEngine {
    windows: DifficultyWindows,
    slider_aim_check: bool,
    policy: TimingMissPolicy,
}

impl JudgementEngine {
    pub fn new(windows: DifficultyWindows) -> Self {
        Self {
            windows,
            slider_aim_check: false,
            policy: TimingMissPolicy::default(),
        }
    }

    /// Grade slider heads like circles (score-v2 behaviour)
    pub fn with_slider_aim_check(mut self, enabled: bool) -> Self {
        self.slider_aim_check = enabled;
        self
    }

    pub fn with_policy(mut self, policy: TimingMissPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn windows(&self) -> &DifficultyWindows {
        &self.windows
    }

    /// Judge `objects` against `events`.
    ///
    /// Both sequences must already be sorted by time (see [`ensure_time_ordered`]).
    /// Judgement stops as soon as either sequence is exhausted, so trailing
    /// objects with no remaining events produce no entry.
    pub fn judge(&self, objects: &[TargetObject], events: &[PressEvent]) -> Result<Vec<GradedEvent>> {
        debug_assert!(ensure_time_ordered(objects, events).is_ok());

        let w50 = self.windows.window_50;
        let mut graded = Vec::with_capacity(objects.len());
        let mut obj_idx = 0;
        let mut evt_idx = 0;

        while obj_idx < objects.len() && evt_idx < events.len() {
            let object = &objects[obj_idx];
            let event = &events[evt_idx];

            if event.time < object.time - w50 {
                // too early for this object (key bounce, stray tap)
                evt_idx += 1;
                continue;
            }

            let verdict = if event.time > object.time + w50 {
                if object.kind == ObjectKind::Circle || self.policy == TimingMissPolicy::AlwaysAdvance {
                    obj_idx += 1;
                }
                evt_idx += 1;
                Verdict::Miss {
                    reason: MissReason::Timing,
                }
            } else {
                obj_idx += 1;
                evt_idx += 1;
                self.judge_in_window(object, event)?
            };

            let entry = GradedEvent::new(verdict, *event, *object);
            debug!("{}", entry);
            graded.push(entry);
        }

        Ok(graded)
    }

    fn judge_in_window(&self, object: &TargetObject, event: &PressEvent) -> Result<Verdict> {
        let aim_miss = event.position.distance(&object.position) > self.windows.hit_radius;
        let miss = Verdict::Miss {
            reason: MissReason::Aim,
        };

        match object.kind {
            ObjectKind::Circle => self.grade_timing(object, event, aim_miss),
            ObjectKind::Slider if self.slider_aim_check => self.grade_timing(object, event, aim_miss),
            ObjectKind::Slider if aim_miss => Ok(miss),
            ObjectKind::Slider | ObjectKind::Spinner => Ok(Verdict::Hit {
                grade: HitGrade::Hit300,
            }),
        }
    }

    fn grade_timing(&self, object: &TargetObject, event: &PressEvent, aim_miss: bool) -> Result<Verdict> {
        if aim_miss {
            return Ok(Verdict::Miss {
                reason: MissReason::Aim,
            });
        }
        let offset = (object.time - event.time).abs();
        HitGrade::from_offset(offset, &self.windows)
            .map(|grade| Verdict::Hit { grade })
            .ok_or(Error::UngradedHit {
                object_time: object.time,
                offset,
            })
    }
}

/// Check that objects and events are non-decreasing in time.
pub fn ensure_time_ordered(objects: &[TargetObject], events: &[PressEvent]) -> Result<()> {
    if let Some(index) = objects.windows(2).position(|w| w[1].time < w[0].time) {
        return Err(Error::UnsortedInput {
            sequence: "target object",
            index: index + 1,
        });
    }
    if let Some(index) = events.windows(2).position(|w| w[1].time < w[0].time) {
        return Err(Error::UnsortedInput {
            sequence: "press event",
            index: index + 1,
        });
    }
    Ok(())
}
