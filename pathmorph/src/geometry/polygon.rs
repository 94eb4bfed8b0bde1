//! Area and centroid of point polygons.

use crate::model::Point;

/// Shoelace signed area, wrapping from the last point back to the first.
///
/// Positive = counter-clockwise in y-up space.
pub fn signed_area(points: &[Point]) -> f64 {
    let Some(&last) = points.last() else {
        return 0.0;
    };
    let mut prev = last;
    let mut area = 0.0;
    for &p in points {
        area += (prev.x * p.y - prev.y * p.x) / 2.0;
        prev = p;
    }
    area
}

/// Arithmetic mean of the points. `None` when empty.
pub fn average_point(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Area-weighted center of mass of the polygon bounded by `points`.
///
/// Fan triangulation: the first three remaining points form a triangle, its
/// signed area weights its average point, then the middle point is dropped.
/// Returns `None` for fewer than three points or a zero total area.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.len() < 3 {
        return None;
    }
    let anchor = points[0];
    let (mut px, mut py, mut total) = (0.0, 0.0, 0.0);
    for pair in points[1..].windows(2) {
        let triangle = [anchor, pair[0], pair[1]];
        let weight = signed_area(&triangle);
        let Some(avg) = average_point(&triangle) else {
            continue;
        };
        px += weight * avg.x;
        py += weight * avg.y;
        total += weight;
    }
    if total == 0.0 || !total.is_finite() {
        return None;
    }
    Some(Point::new(px / total, py / total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_signed_area_orientation() {
        let mut pts = square();
        assert_eq!(signed_area(&pts), 100.0);
        pts.reverse();
        assert_eq!(signed_area(&pts), -100.0);
        assert_eq!(signed_area(&[]), 0.0);
    }

    #[test]
    fn test_centroid_square() {
        let c = centroid(&square()).unwrap();
        assert!((c.x - 5.0).abs() < 1e-12 && (c.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_concave() {
        // L-shape: 2x1 bar plus 1x1 block on top-left, total area 3
        let l = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let c = centroid(&l).unwrap();
        // (2*(1,0.5) + 1*(0.5,1.5)) / 3
        assert!((c.x - 2.5 / 3.0).abs() < 1e-12);
        assert!((c.y - 2.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_degenerate() {
        assert_eq!(centroid(&[]), None);
        assert_eq!(centroid(&square()[..2]), None);
        let collinear = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        assert_eq!(centroid(&collinear), None);
    }
}
