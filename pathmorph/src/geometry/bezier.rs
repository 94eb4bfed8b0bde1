//! Bézier curves of any order, evaluated and subdivided with de Casteljau.
//!
//! A curve is its control polygon: the first and last points are the curve's
//! end points and everything in between is a control point. Order 1 is a
//! line, 2 a quadratic and 3 a cubic.

use crate::geometry::tolerance::MAX_SUBDIVISION_DEPTH;
use crate::model::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Bezier {
    pub points: Vec<Point>,
}

impl Bezier {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn order(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// One de Casteljau step: lerp every adjacent pair at `k`.
    ///
    /// The result has one point less than `self`; empty and single-point
    /// curves simplify to the empty curve.
    pub fn simplify(&self, k: f64) -> Bezier {
        Bezier::new(lerp_level(&self.points, k))
    }

    /// Point on the curve at parameter `k`. `None` for an empty curve.
    pub fn evaluate(&self, k: f64) -> Option<Point> {
        let mut level = self.points.clone();
        while level.len() > 1 {
            level = lerp_level(&level, k);
        }
        level.first().copied()
    }

    /// Split the curve at parameter `k`.
    ///
    /// Returns the curves covering `0..k` and `k..1`, both of the original
    /// order. `k` outside `[0, 1]` extrapolates.
    pub fn split_at(&self, k: f64) -> (Bezier, Bezier) {
        let n = self.points.len();
        let mut first = Vec::with_capacity(n);
        let mut second = Vec::with_capacity(n);
        let mut level = self.points.clone();
        while let (Some(&head), Some(&tail)) = (level.first(), level.last()) {
            first.push(head);
            second.push(tail);
            level = lerp_level(&level, k);
        }
        second.reverse();
        (Bezier::new(first), Bezier::new(second))
    }

    /// Split the curve at every factor in `factors`, producing
    /// `factors.len() + 1` pieces.
    ///
    /// Factors are parameters of the original curve. They are consumed in the
    /// given order; a factor lower than its predecessor makes the next piece
    /// run backwards over already covered ground, so the pieces overlap.
    pub fn split_at_factors(&self, factors: &[f64]) -> Vec<Bezier> {
        if self.points.len() < 2 || factors.is_empty() {
            return vec![self.clone()];
        }
        let mut pieces = Vec::with_capacity(factors.len() + 1);
        let mut rest = self.clone();
        // Original parameter at which `rest` begins; it always ends at 1.
        let mut consumed = 0.0;
        for &k in factors {
            let span = 1.0 - consumed;
            let local = if span == 0.0 { 0.0 } else { (k - consumed) / span };
            let (head, tail) = rest.split_at(local);
            pieces.push(head);
            rest = tail;
            consumed = k;
        }
        pieces.push(rest);
        pieces
    }

    /// Length of the control polygon.
    pub fn polygon_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }

    /// Straight-line distance between the end points.
    pub fn chord_length(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(&a), Some(&b)) => a.distance_to(b),
            _ => 0.0,
        }
    }

    /// True when every control point coincides exactly, so splitting cannot
    /// make progress.
    pub fn is_degenerate(&self) -> bool {
        match self.points.split_first() {
            Some((first, rest)) => rest.iter().all(|p| p == first),
            None => true,
        }
    }

    /// Approximate arc length using adaptive subdivision.
    pub fn arc_length(&self, tolerance: f64) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        arc_length_recursive(self, tolerance, 0)
    }

    /// Find the parameter at `target_length` along the curve.
    /// Returns None if the length exceeds the curve's length.
    pub fn parameter_at_arc_length(&self, target_length: f64, tolerance: f64) -> Option<f64> {
        let total = self.arc_length(tolerance);
        if target_length >= total {
            return if target_length <= total + tolerance {
                Some(1.0)
            } else {
                None
            };
        }
        if target_length <= 0.0 {
            return Some(0.0);
        }

        // Binary search for k
        let mut lo = 0.0f64;
        let mut hi = 1.0f64;
        for _ in 0..48 {
            let mid = (lo + hi) * 0.5;
            let (left, _) = self.split_at(mid);
            let len = left.arc_length(tolerance);
            if (len - target_length).abs() < tolerance * 0.1 {
                return Some(mid);
            }
            if len < target_length {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Some((lo + hi) * 0.5)
    }
}

#[inline]
fn lerp_level(points: &[Point], k: f64) -> Vec<Point> {
    points.windows(2).map(|w| w[0].lerp(w[1], k)).collect()
}

fn arc_length_recursive(curve: &Bezier, tolerance: f64, depth: u32) -> f64 {
    let chord = curve.chord_length();
    let poly_len = curve.polygon_length();

    // Flat enough or too deep: average of chord and polygon
    if depth >= MAX_SUBDIVISION_DEPTH || (poly_len - chord).abs() < tolerance {
        return (chord + poly_len) * 0.5;
    }

    let (left, right) = curve.split_at(0.5);
    arc_length_recursive(&left, tolerance, depth + 1)
        + arc_length_recursive(&right, tolerance, depth + 1)
}
