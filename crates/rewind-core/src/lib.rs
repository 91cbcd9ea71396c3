pub mod chart;
pub mod config;
pub mod correct;
pub mod error;
pub mod export;
pub mod judge;
pub mod mods;
pub mod pipeline;
pub mod replay;
pub mod score;

pub use chart::{Chart, ChartCatalog, ChartIndex, DifficultyParams, ObjectKind, Position, TargetObject};
pub use config::Config;
pub use correct::{AimCorrector, Correction};
pub use error::{Error, Result};
pub use judge::{
    DifficultyWindows, GradedEvent, HitGrade, JudgementEngine, MissReason, PressEvent,
    TimingMissPolicy, Verdict, extract_press_events,
};
pub use mods::{ModFlag, Mods};
pub use pipeline::{FixReport, GradeCounts, ReplayFixer};
pub use replay::{FrameStream, RawFrame, Replay, ReplaySummary};
pub use score::{Reconstruction, ScoreFormula};
