//! Replay data: summary record plus the raw frame stream.
//!
//! - `RawFrame`, `FrameStream` - input samples addressed by index
//! - `codec` - lossless text encoding of the frame stream
//! - `ReplaySummary` - hit counters, score and combo as recorded

pub mod codec;
mod frame;
mod summary;

pub use frame::*;
pub use summary::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    #[serde(flatten)]
    pub summary: ReplaySummary,
    #[serde(with = "codec::text")]
    pub frames: FrameStream,
}

impl Replay {
    pub fn new(summary: ReplaySummary, frames: FrameStream) -> Self {
        Self { summary, frames }
    }

    /// Load a replay from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the replay as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// `replays/foo.json` -> `replays/foo_corrected.json`
pub fn corrected_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}_corrected.{}", stem, ext.to_string_lossy()),
        None => format!("{}_corrected", stem),
    };
    path.with_file_name(file_name)
}
