//! Start-shift and translation of subpaths, used to line two shapes up
//! before they are interpolated.

use crate::model::{Point, Vector};
use crate::path::Path;
use crate::subpath::Subpath;

impl Subpath {
    /// Rotate a closed subpath so that vertex `shifts` becomes the start.
    ///
    /// The last `shifts` segments (mod the segment count) move to the front
    /// and the start point becomes the terminal point of the new last segment.
    /// Negative shifts rotate the other way. Open or empty subpaths are
    /// returned unchanged.
    pub fn shifting_start(&self, shifts: i64) -> Subpath {
        let count = self.segments.len();
        if !self.is_closed() || count == 0 || shifts == 0 {
            return self.clone();
        }
        let shifts = shifts.rem_euclid(count as i64) as usize;
        let mut segments = self.segments.clone();
        segments.rotate_right(shifts);
        let start = segments
            .last()
            .and_then(|s| s.end_point())
            .unwrap_or(self.start);
        Subpath {
            start,
            segments,
            closed: self.closed,
        }
    }

    pub fn translated(&self, by: Vector) -> Subpath {
        Subpath {
            start: self.start + by,
            segments: self.segments.iter().map(|s| s.translated(by)).collect(),
            closed: self.closed,
        }
    }

    /// Translate so the centroid lands on `center`. Unchanged when the
    /// centroid is undefined (no enclosed area).
    pub fn with_centroid(&self, center: Point) -> Subpath {
        match self.centroid() {
            Some(current) => self.translated(center - current),
            None => self.clone(),
        }
    }
}

impl Path {
    pub fn translated(&self, by: Vector) -> Path {
        Path::new(self.subpaths.iter().map(|s| s.translated(by)).collect())
    }

    /// Translate the whole path so its area-weighted centroid lands on
    /// `center`. Unchanged when the centroid is undefined.
    pub fn with_centroid(&self, center: Point) -> Path {
        match self.centroid() {
            Some(current) => self.translated(center - current),
            None => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square() -> Subpath {
        Subpath::polygon(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)])
    }

    #[test]
    fn shift_rotates_segments_and_start() {
        let s = square();
        let shifted = s.shifting_start(1);
        // the closing side moves to the front, so drawing starts at (0,10)
        assert_eq!(shifted.start(), pt(0.0, 10.0));
        assert_eq!(shifted.segments()[0], Segment::line_to(pt(0.0, 0.0)));
        assert!(shifted.is_closed());
        assert_eq!(shifted.end_point(), shifted.start());
    }

    #[test]
    fn shift_wraps_and_inverts() {
        let s = square();
        assert_eq!(s.shifting_start(4), s);
        assert_eq!(s.shifting_start(5), s.shifting_start(1));
        assert_eq!(s.shifting_start(-1), s.shifting_start(3));
        assert_eq!(s.shifting_start(3).shifting_start(-3), s);
    }

    #[test]
    fn shift_open_subpath_is_noop() {
        let open = Subpath::open(pt(0.0, 0.0), [Segment::line_to(pt(1.0, 0.0))]);
        assert_eq!(open.shifting_start(2), open);
    }

    #[test]
    fn translate_and_back() {
        let s = square();
        let v = Vector::new(3.5, -2.25);
        assert_eq!(s.translated(v).translated(-v), s);
    }

    #[test]
    fn centroid_assignment_moves_shape() {
        let moved = square().with_centroid(pt(100.0, 50.0));
        let c = moved.centroid().unwrap();
        assert!((c.x - 100.0).abs() < 1e-9 && (c.y - 50.0).abs() < 1e-9);
        assert_eq!(moved.start(), pt(95.0, 45.0));
    }

    #[test]
    fn centroid_assignment_without_area_is_noop() {
        let line = Subpath::open(pt(0.0, 0.0), [Segment::line_to(pt(4.0, 0.0))]);
        assert_eq!(line.with_centroid(pt(9.0, 9.0)), line);
    }

    #[test]
    fn path_centroid_assignment() {
        let p = Path::from(square()).with_centroid(pt(0.0, 0.0));
        let c = p.centroid().unwrap();
        assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9);
    }
}
