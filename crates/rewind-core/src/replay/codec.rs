//! Text codec for the frame stream.
//!
//! A stream is a sequence of `w|x|y|z` records separated by commas, where `w` is
//! the time delta in milliseconds, `x`/`y` the cursor position and `z` the key
//! mask. A final record with `w == -12345` carries the RNG seed instead of an
//! input sample. Floats are written in their shortest round-trip form, so
//! `decode(encode(s)) == s` for every stream.

use std::fmt::Write as _;

use crate::error::{Error, Result};

use super::frame::{FrameStream, RawFrame};

/// Time delta that marks the seed record.
pub const SEED_MARKER: i32 = -12345;

pub fn encode(stream: &FrameStream) -> String {
    let mut out = String::with_capacity(stream.len() * 16);
    for frame in &stream.frames {
        let _ = write!(
            out,
            "{}|{}|{}|{},",
            frame.time_delta, frame.x, frame.y, frame.keys
        );
    }
    if let Some(seed) = stream.seed {
        let _ = write!(out, "{}|0|0|{},", SEED_MARKER, seed);
    }
    out
}

pub fn decode(text: &str) -> Result<FrameStream> {
    let mut stream = FrameStream::default();

    for (index, record) in text.split(',').enumerate() {
        let record = record.trim();
        if record.is_empty() {
            continue;
        }
        if stream.seed.is_some() {
            return Err(Error::FrameParse {
                index,
                message: "record after seed trailer".to_string(),
            });
        }

        let fields: Vec<&str> = record.split('|').collect();
        let [w, x, y, z] = fields.as_slice() else {
            return Err(Error::FrameParse {
                index,
                message: format!("expected 4 fields, got {}", fields.len()),
            });
        };

        let time_delta: i32 = parse_field(index, "time delta", w)?;
        if time_delta == SEED_MARKER {
            stream.seed = Some(parse_field(index, "seed", z)?);
            continue;
        }

        stream.frames.push(RawFrame {
            time_delta,
            x: parse_coordinate(index, "x", x)?,
            y: parse_coordinate(index, "y", y)?,
            keys: parse_field(index, "keys", z)?,
        });
    }

    Ok(stream)
}

fn parse_field<T: std::str::FromStr>(index: usize, name: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| Error::FrameParse {
        index,
        message: format!("invalid {} {:?}: {}", name, raw, e),
    })
}

fn parse_coordinate(index: usize, name: &str, raw: &str) -> Result<f32> {
    let value: f32 = parse_field(index, name, raw)?;
    if !value.is_finite() {
        return Err(Error::FrameParse {
            index,
            message: format!("non-finite {} {:?}", name, raw),
        });
    }
    Ok(value)
}

/// Serde adapter storing a [`FrameStream`] as its encoded text.
pub mod text {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::FrameStream;

    pub fn serialize<S: Serializer>(stream: &FrameStream, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(stream))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FrameStream, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::decode(&raw).map_err(serde::de::Error::custom)
    }
}
