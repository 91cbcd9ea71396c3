//! Judgement reconstruction.
//!
//! - `extract_press_events` - rising-edge press events from raw frames
//! - `DifficultyWindows` - timing windows and hit radius from OD/CS
//! - `JudgementEngine` - grades each target object against the press events
//! - `GradedEvent` - hit with grade, or miss with reason

mod engine;
mod events;
mod graded;
mod window;

pub use engine::*;
pub use events::*;
pub use graded::*;
pub use window::*;
