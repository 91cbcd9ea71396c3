use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("Unsorted {sequence} sequence at index {index}")]
    UnsortedInput { sequence: &'static str, index: usize },

    #[error("Hit at object time {object_time}ms (offset {offset}ms) matched no timing window")]
    UngradedHit { object_time: i64, offset: i64 },

    #[error("Event is not an aim miss")]
    NotAnAimMiss,

    #[error("Frame index {index} out of range (stream has {len} frames)")]
    FrameOutOfRange { index: usize, len: usize },

    #[error("Chart not found: {0}")]
    ChartNotFound(String),

    #[error("Failed to parse frame {index}: {message}")]
    FrameParse { index: usize, message: String },

    #[error("Invalid mod: {0}")]
    InvalidMod(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
