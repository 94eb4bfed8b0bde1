//! Per-segment geometry: splitting, translation and promotion to cubic form.

use crate::geometry::bezier::Bezier;
use crate::model::{Point, Segment, SegmentKind, Vector};

impl Segment {
    pub fn move_to(to: Point) -> Self {
        Segment::Move { to }
    }

    pub fn line_to(to: Point) -> Self {
        Segment::Line { to }
    }

    pub fn quad_to(to: Point, control: Point) -> Self {
        Segment::QuadCurve { to, control }
    }

    pub fn curve_to(to: Point, control1: Point, control2: Point) -> Self {
        Segment::CubicCurve {
            to,
            control1,
            control2,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Move { .. } => SegmentKind::Move,
            Segment::Line { .. } => SegmentKind::Line,
            Segment::QuadCurve { .. } => SegmentKind::Quad,
            Segment::CubicCurve { .. } => SegmentKind::Cubic,
            Segment::Close => SegmentKind::Close,
        }
    }

    /// Terminal point. `None` for `Close`.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::Move { to }
            | Segment::Line { to }
            | Segment::QuadCurve { to, .. }
            | Segment::CubicCurve { to, .. } => Some(to),
            Segment::Close => None,
        }
    }

    /// Control points in drawing order, without the terminal point.
    pub fn control_points(&self) -> Vec<Point> {
        match *self {
            Segment::QuadCurve { control, .. } => vec![control],
            Segment::CubicCurve {
                control1, control2, ..
            } => vec![control1, control2],
            _ => Vec::new(),
        }
    }

    /// Lines and curves can be split; moves and closes are structural.
    pub fn is_splittable(&self) -> bool {
        matches!(
            self,
            Segment::Line { .. } | Segment::QuadCurve { .. } | Segment::CubicCurve { .. }
        )
    }

    /// Control polygon `[current] + controls + [terminal]` of a splittable segment.
    pub fn bezier(&self, current: Point) -> Option<Bezier> {
        if !self.is_splittable() {
            return None;
        }
        let to = self.end_point()?;
        let mut points = Vec::with_capacity(4);
        points.push(current);
        points.extend(self.control_points());
        points.push(to);
        Some(Bezier::new(points))
    }

    pub fn translated(&self, by: Vector) -> Segment {
        self.map_points(|p| p + by)
    }

    /// Split the segment drawn from `current` at `factors`.
    ///
    /// Every piece keeps the segment's variant: a line splits into lines, a
    /// quadratic into quadratics. Moves and closes come back unchanged.
    pub fn split_at_factors(&self, current: Point, factors: &[f64]) -> Vec<Segment> {
        let Some(curve) = self.bezier(current) else {
            return vec![*self];
        };
        curve
            .split_at_factors(factors)
            .iter()
            .filter_map(|piece| self.with_polygon(&piece.points))
            .collect()
    }

    /// Re-express a line or quadratic drawn from `current` as a cubic.
    pub fn to_cubic(&self, current: Point) -> Segment {
        match *self {
            Segment::Line { to } => Segment::curve_to(
                to,
                current.lerp(to, 1.0 / 3.0),
                current.lerp(to, 2.0 / 3.0),
            ),
            Segment::QuadCurve { to, control } => {
                Segment::curve_to(to, current.lerp(control, 0.5), control.lerp(to, 0.5))
            }
            other => other,
        }
    }

    /// Per-point linear interpolation toward a segment of the same kind.
    pub fn lerp(&self, other: &Segment, t: f64) -> Option<Segment> {
        use Segment::*;
        let mixed = match (*self, *other) {
            (Move { to: a }, Move { to: b }) => Move { to: a.lerp(b, t) },
            (Line { to: a }, Line { to: b }) => Line { to: a.lerp(b, t) },
            (
                QuadCurve { to: a, control: ca },
                QuadCurve { to: b, control: cb },
            ) => QuadCurve {
                to: a.lerp(b, t),
                control: ca.lerp(cb, t),
            },
            (
                CubicCurve {
                    to: a,
                    control1: a1,
                    control2: a2,
                },
                CubicCurve {
                    to: b,
                    control1: b1,
                    control2: b2,
                },
            ) => CubicCurve {
                to: a.lerp(b, t),
                control1: a1.lerp(b1, t),
                control2: a2.lerp(b2, t),
            },
            (Close, Close) => Close,
            _ => return None,
        };
        Some(mixed)
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Segment {
        match *self {
            Segment::Move { to } => Segment::Move { to: f(to) },
            Segment::Line { to } => Segment::Line { to: f(to) },
            Segment::QuadCurve { to, control } => Segment::QuadCurve {
                to: f(to),
                control: f(control),
            },
            Segment::CubicCurve {
                to,
                control1,
                control2,
            } => Segment::CubicCurve {
                to: f(to),
                control1: f(control1),
                control2: f(control2),
            },
            Segment::Close => Segment::Close,
        }
    }

    // Rebuild this variant from a control polygon whose first point is the
    // piece's start (dropped) and last point its terminal.
    fn with_polygon(&self, polygon: &[Point]) -> Option<Segment> {
        let (&to, rest) = polygon.split_last()?;
        let controls = rest.get(1..)?;
        match (self, controls) {
            (Segment::Line { .. }, []) => Some(Segment::line_to(to)),
            (Segment::QuadCurve { .. }, [c]) => Some(Segment::quad_to(to, *c)),
            (Segment::CubicCurve { .. }, [c1, c2]) => Some(Segment::curve_to(to, *c1, *c2)),
            _ => None,
        }
    }
}
