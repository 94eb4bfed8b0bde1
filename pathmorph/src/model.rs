use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// One drawing command of a path.
///
/// `to` is always the terminal point of the segment. `Move` and `Close` only
/// delimit subpaths and never survive inside a [`crate::Subpath`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Move {
        to: Point,
    },
    Line {
        to: Point,
    },
    #[serde(rename = "quad")]
    QuadCurve {
        to: Point,
        control: Point,
    },
    #[serde(rename = "cubic")]
    CubicCurve {
        to: Point,
        control1: Point,
        control2: Point,
    },
    Close,
}

/// Discriminant of a [`Segment`], used to compare segment structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Move,
    Line,
    Quad,
    Cubic,
    Close,
}

/// Emphasis applied from `start_percentage` of a subpath's chord length onward.
///
/// Weights are supplied in ascending `start_percentage` order; before the
/// first entry every segment weighs `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub start_percentage: f64,
    pub value: f64,
}

impl Weight {
    pub const DEFAULT_VALUE: f64 = 1.0;

    pub const fn new(start_percentage: f64, value: f64) -> Self {
        Self {
            start_percentage,
            value,
        }
    }
}
