//! Arc-length measurement and point sampling along subpaths.
//!
//! Lengths are approximated per segment by adaptive subdivision of the
//! control polygon; positions come from inverting that length on the segment
//! that holds the requested distance.

use crate::geometry::bezier::Bezier;
use crate::geometry::tolerance::{clamp01, safe_div, EPS_LEN};
use crate::model::{Point, Vector};
use crate::path::Path;
use crate::subpath::Subpath;

/// A sampled point with the tangent direction of the curve there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub point: Point,
    /// Tangent angle in radians
    pub angle: f64,
}

impl Subpath {
    /// Arc length of each segment, in order.
    pub fn segment_lengths(&self, tolerance: f64) -> Vec<f64> {
        self.segments_with_start()
            .filter_map(|(from, seg)| seg.bezier(from))
            .map(|curve| curve.arc_length(tolerance))
            .collect()
    }

    /// Total arc length.
    pub fn length(&self, tolerance: f64) -> f64 {
        self.segment_lengths(tolerance).iter().sum()
    }

    /// Point at fraction `f` of the total arc length (clamped to [0, 1]).
    /// `None` for a subpath without segments.
    pub fn point_at_fraction(&self, f: f64, tolerance: f64) -> Option<PathPoint> {
        let curves: Vec<Bezier> = self
            .segments_with_start()
            .filter_map(|(from, seg)| seg.bezier(from))
            .collect();
        if curves.is_empty() {
            return None;
        }
        let lengths: Vec<f64> = curves.iter().map(|c| c.arc_length(tolerance)).collect();
        let total: f64 = lengths.iter().sum();
        let mut remaining = clamp01(f) * total;

        for (curve, &len) in curves.iter().zip(&lengths) {
            if remaining <= len {
                let k = if len > EPS_LEN {
                    curve
                        .parameter_at_arc_length(remaining, tolerance)
                        .unwrap_or(1.0)
                } else {
                    0.0
                };
                return point_on_curve(curve, k);
            }
            remaining -= len;
        }

        // Past the end by rounding: last point of the last curve
        curves.last().and_then(|c| point_on_curve(c, 1.0))
    }

    /// `n` points evenly spaced by arc length.
    ///
    /// Open subpaths are sampled from start to end inclusive. Closed subpaths
    /// skip the final fraction since it lands back on the start.
    pub fn sample(&self, n: usize, tolerance: f64) -> Vec<PathPoint> {
        if n == 0 {
            return Vec::new();
        }
        let steps = if self.is_closed() { n } else { n.saturating_sub(1) };
        (0..n)
            .filter_map(|i| {
                let f = safe_div(i as f64, steps as f64, 0.0);
                self.point_at_fraction(f, tolerance)
            })
            .collect()
    }
}

impl Path {
    /// Total arc length over all subpaths.
    pub fn length(&self, tolerance: f64) -> f64 {
        self.subpaths.iter().map(|s| s.length(tolerance)).sum()
    }
}

fn point_on_curve(curve: &Bezier, k: f64) -> Option<PathPoint> {
    let point = curve.evaluate(k)?;
    let tangent = tangent_at(curve, k);
    Some(PathPoint {
        point,
        angle: tangent.dy.atan2(tangent.dx),
    })
}

// The last de Casteljau level with two points spans the tangent. A zero
// tangent (coincident controls at an end) falls back to the chord.
fn tangent_at(curve: &Bezier, k: f64) -> Vector {
    let mut level = curve.clone();
    while level.points.len() > 2 {
        level = level.simplify(k);
    }
    let tangent = match level.points.as_slice() {
        [a, b] => *b - *a,
        _ => Vector::ZERO,
    };
    if tangent.length() > EPS_LEN {
        return tangent;
    }
    match (curve.points.first(), curve.points.last()) {
        (Some(&a), Some(&b)) => b - a,
        _ => Vector::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tolerance::{approx_eq, DEFAULT_ARC_TOLERANCE};
    use crate::model::Segment;
    use std::f64::consts::PI;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square() -> Subpath {
        Subpath::polygon(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)])
    }

    #[test]
    fn square_perimeter() {
        assert!(approx_eq(square().length(DEFAULT_ARC_TOLERANCE), 40.0, 1e-9));
        assert!(approx_eq(square().standardized().length(DEFAULT_ARC_TOLERANCE), 40.0, 1e-6));
    }

    #[test]
    fn quarter_circle_length() {
        // Standard cubic approximation of a quarter of the unit circle.
        let k = 0.552_284_749_8;
        let arc = Subpath::open(
            pt(1.0, 0.0),
            [Segment::curve_to(pt(0.0, 1.0), pt(1.0, k), pt(k, 1.0))],
        );
        let len = arc.length(1e-6);
        assert!(approx_eq(len, PI / 2.0, 1e-3), "len = {len}");
    }

    #[test]
    fn fractions_walk_the_perimeter() {
        let s = square();
        let tol = DEFAULT_ARC_TOLERANCE;
        let half = s.point_at_fraction(0.5, tol).unwrap();
        assert!(half.point.distance_to(pt(10.0, 10.0)) < 1e-6);
        let eighth = s.point_at_fraction(0.125, tol).unwrap();
        assert!(eighth.point.distance_to(pt(5.0, 0.0)) < 1e-6);
        assert!(approx_eq(eighth.angle, 0.0, 1e-9));
        // clamped
        let before = s.point_at_fraction(-1.0, tol).unwrap();
        assert_eq!(before.point, pt(0.0, 0.0));
    }

    #[test]
    fn empty_subpath_has_no_points() {
        let empty = Subpath::open(pt(1.0, 1.0), Vec::<Segment>::new());
        assert!(empty.point_at_fraction(0.5, DEFAULT_ARC_TOLERANCE).is_none());
        assert!(empty.sample(4, DEFAULT_ARC_TOLERANCE).is_empty());
        assert_eq!(empty.length(DEFAULT_ARC_TOLERANCE), 0.0);
    }

    #[test]
    fn closed_sampling_skips_duplicate_end() {
        let pts = square().sample(4, DEFAULT_ARC_TOLERANCE);
        assert_eq!(pts.len(), 4);
        let expected = [pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)];
        for (got, want) in pts.iter().zip(expected) {
            assert!(got.point.distance_to(want) < 1e-6, "{:?} vs {:?}", got.point, want);
        }
    }

    #[test]
    fn open_sampling_includes_both_ends() {
        let line = Subpath::open(pt(0.0, 0.0), [Segment::line_to(pt(9.0, 0.0))]);
        let xs: Vec<f64> = line
            .sample(4, DEFAULT_ARC_TOLERANCE)
            .iter()
            .map(|p| p.point.x)
            .collect();
        assert_eq!(xs.len(), 4);
        for (got, want) in xs.iter().zip([0.0, 3.0, 6.0, 9.0]) {
            assert!(approx_eq(*got, want, 1e-3));
        }
    }

    #[test]
    fn tangent_of_degenerate_handle_uses_chord() {
        let s = Subpath::open(
            pt(0.0, 0.0),
            [Segment::curve_to(pt(0.0, 10.0), pt(0.0, 0.0), pt(0.0, 10.0))],
        );
        let first = s.point_at_fraction(0.0, DEFAULT_ARC_TOLERANCE).unwrap();
        assert!(approx_eq(first.angle, PI / 2.0, 1e-9));
    }
}
