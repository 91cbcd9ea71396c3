use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::chart::TargetObject;

use super::events::PressEvent;
use super::window::DifficultyWindows;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
pub enum HitGrade {
    #[strum(serialize = "50")]
    Hit50,
    #[strum(serialize = "100")]
    Hit100,
    #[strum(serialize = "300")]
    Hit300,
}

impl HitGrade {
    pub fn value(self) -> u32 {
        match self {
            Self::Hit300 => 300,
            Self::Hit100 => 100,
            Self::Hit50 => 50,
        }
    }

    /// First window the absolute offset falls strictly inside.
    pub fn from_offset(offset: i64, windows: &DifficultyWindows) -> Option<Self> {
        if offset < windows.window_300 {
            Some(Self::Hit300)
        } else if offset < windows.window_100 {
            Some(Self::Hit100)
        } else if offset < windows.window_50 {
            Some(Self::Hit50)
        } else {
            None
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
pub enum MissReason {
    Timing,
    Aim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Verdict {
    Hit { grade: HitGrade },
    Miss { reason: MissReason },
}

/// Judgement of one target object against one press event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradedEvent {
    pub verdict: Verdict,
    pub event: PressEvent,
    pub object: TargetObject,
    /// Absolute time difference in milliseconds
    pub time_offset: i64,
    pub aim_offset: f64,
}

impl GradedEvent {
    pub fn new(verdict: Verdict, event: PressEvent, object: TargetObject) -> Self {
        Self {
            verdict,
            time_offset: (object.time - event.time).abs(),
            aim_offset: event.position.distance(&object.position),
            event,
            object,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self.verdict, Verdict::Hit { .. })
    }

    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    pub fn is_aim_miss(&self) -> bool {
        self.verdict
            == Verdict::Miss {
                reason: MissReason::Aim,
            }
    }

    /// 300/100/50 for hits, 0 for misses
    pub fn grade_value(&self) -> u32 {
        match self.verdict {
            Verdict::Hit { grade } => grade.value(),
            Verdict::Miss { .. } => 0,
        }
    }
}

impl std::fmt::Display for GradedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.verdict {
            Verdict::Hit { grade } => write!(f, "{}", grade)?,
            Verdict::Miss { reason } => write!(f, "Miss({})", reason)?,
        }
        write!(
            f,
            " at {}ms: {} @ {}ms - TimeDiff: {}ms - AimDiff: {:.2}",
            self.event.time, self.object.kind, self.object.time, self.time_offset, self.aim_offset
        )
    }
}
