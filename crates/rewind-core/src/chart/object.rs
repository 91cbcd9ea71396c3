use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Playfield coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Circle,
    Slider,
    Spinner,
}

/// A timed target on the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetObject {
    /// Absolute time in milliseconds
    pub time: i64,
    pub position: Position,
    pub kind: ObjectKind,
}

impl TargetObject {
    pub fn new(time: i64, x: f64, y: f64, kind: ObjectKind) -> Self {
        Self {
            time,
            position: Position::new(x, y),
            kind,
        }
    }

    pub fn circle(time: i64, x: f64, y: f64) -> Self {
        Self::new(time, x, y, ObjectKind::Circle)
    }
}
