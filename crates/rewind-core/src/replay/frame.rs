use serde::{Deserialize, Serialize};

/// Button bits carried in a frame's key mask.
pub mod keys {
    pub const M1: u8 = 0x01;
    pub const M2: u8 = 0x02;
    /// Keyboard K1 also sets `M1`.
    pub const K1: u8 = 0x04;
    /// Keyboard K2 also sets `M2`.
    pub const K2: u8 = 0x08;
    pub const SMOKE: u8 = 0x10;
}

/// One sampled input record.
///
/// `time_delta` is relative to the previous frame and may be zero or negative
/// for the sync frames at the start of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawFrame {
    pub time_delta: i32,
    pub x: f32,
    pub y: f32,
    pub keys: u8,
}

impl RawFrame {
    pub fn new(time_delta: i32, x: f32, y: f32, keys: u8) -> Self {
        Self {
            time_delta,
            x,
            y,
            keys,
        }
    }

    pub fn primary(&self) -> bool {
        self.keys & keys::M1 != 0
    }

    pub fn secondary(&self) -> bool {
        self.keys & keys::M2 != 0
    }
}

/// Flat frame buffer addressed by stable indices.
///
/// The trailing RNG seed record is kept apart from the frames so that indices
/// into `frames` always refer to real input samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameStream {
    pub frames: Vec<RawFrame>,
    pub seed: Option<i64>,
}

impl FrameStream {
    pub fn new(frames: Vec<RawFrame>) -> Self {
        Self { frames, seed: None }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RawFrame> {
        self.frames.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RawFrame> {
        self.frames.get_mut(index)
    }

    /// Absolute time of every frame (prefix sum of the deltas).
    pub fn absolute_times(&self) -> Vec<i64> {
        self.frames
            .iter()
            .scan(0i64, |acc, frame| {
                *acc += i64::from(frame.time_delta);
                Some(*acc)
            })
            .collect()
    }

    /// Elapsed time at the last frame.
    pub fn duration(&self) -> i64 {
        self.frames.iter().map(|f| i64::from(f.time_delta)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_times_prefix_sum() {
        let stream = FrameStream::new(vec![
            RawFrame::new(0, 256.0, -500.0, 0),
            RawFrame::new(-1, 256.0, -500.0, 0),
            RawFrame::new(17, 100.0, 100.0, 0),
            RawFrame::new(16, 101.0, 100.0, keys::M1 | keys::K1),
        ]);
        assert_eq!(stream.absolute_times(), vec![0, -1, 16, 32]);
        assert_eq!(stream.duration(), 32);
    }

    #[test]
    fn test_key_bits() {
        let frame = RawFrame::new(16, 0.0, 0.0, keys::K2 | keys::M2);
        assert!(!frame.primary());
        assert!(frame.secondary());
    }
}
