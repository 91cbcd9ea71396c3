use serde::{Deserialize, Serialize};

use crate::chart::Position;
use crate::replay::{FrameStream, RawFrame, keys};

/// A discrete button press extracted from the frame stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressEvent {
    /// Absolute time in milliseconds
    pub time: i64,
    pub keys: u8,
    pub position: Position,
    /// Index of the frame this press was read from
    pub frame_index: usize,
}

impl PressEvent {
    fn from_frame(frame: &RawFrame, time: i64, frame_index: usize) -> Self {
        Self {
            time,
            keys: frame.keys,
            position: Position::new(f64::from(frame.x), f64::from(frame.y)),
            frame_index,
        }
    }
}

/// Walk the stream once and emit an event on every rising edge of M1 or M2.
///
/// Held buttons produce nothing; a frame whose tracked bits were both already
/// down in the previous frame never yields an event.
pub fn extract_press_events(stream: &FrameStream) -> Vec<PressEvent> {
    let mut events = Vec::new();
    let mut time = 0i64;
    let mut prev_m1 = 0u8;
    let mut prev_m2 = 0u8;

    for (index, frame) in stream.frames.iter().enumerate() {
        time += i64::from(frame.time_delta);

        let m1 = frame.keys & keys::M1;
        let m2 = frame.keys & keys::M2;
        if m1 > prev_m1 || m2 > prev_m2 {
            events.push(PressEvent::from_frame(frame, time, index));
        }

        prev_m1 = m1;
        prev_m2 = m2;
    }

    events
}
