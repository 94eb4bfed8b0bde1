//! One contiguous, optionally closed run of segments.

use crate::geometry::polygon;
use crate::model::{Point, Segment, SegmentKind};

/// An ordered run of drawable segments starting at `start`.
///
/// Segments never contain `Move` or `Close`. A closed subpath always ends
/// exactly at `start`. Closedness is settled when the subpath is built and
/// carried by every derived subpath.
#[derive(Clone, Debug, PartialEq)]
pub struct Subpath {
    pub(crate) start: Point,
    pub(crate) segments: Vec<Segment>,
    pub(crate) closed: bool,
}

impl Subpath {
    /// Build a subpath, dropping `Move`/`Close` entries.
    ///
    /// The subpath is closed when `closed` is set, `segments` contained a
    /// `Close`, or the last segment lands back on `start`. A closing line back
    /// to `start` is appended when a closed subpath does not already end there.
    pub fn new(start: Point, segments: impl IntoIterator<Item = Segment>, closed: bool) -> Self {
        let mut closed = closed;
        let mut kept = Vec::new();
        for seg in segments {
            match seg {
                Segment::Close => closed = true,
                Segment::Move { .. } => {}
                other => kept.push(other),
            }
        }
        if closed {
            if let Some(last) = kept.last().and_then(Segment::end_point) {
                if last != start {
                    kept.push(Segment::line_to(start));
                }
            }
        }
        let closed = closed || kept.last().and_then(Segment::end_point) == Some(start);
        Self {
            start,
            segments: kept,
            closed,
        }
    }

    pub fn open(start: Point, segments: impl IntoIterator<Item = Segment>) -> Self {
        Self::new(start, segments, false)
    }

    pub fn closed(start: Point, segments: impl IntoIterator<Item = Segment>) -> Self {
        Self::new(start, segments, true)
    }

    /// Closed polygon through `points`, starting at the first one.
    pub fn polygon(points: &[Point]) -> Self {
        match points.split_first() {
            Some((&first, rest)) => {
                Self::closed(first, rest.iter().map(|&p| Segment::line_to(p)))
            }
            None => Self::closed(Point::ZERO, Vec::<Segment>::new()),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn end_point(&self) -> Point {
        if self.is_closed() {
            return self.start;
        }
        self.segments
            .last()
            .and_then(Segment::end_point)
            .unwrap_or(self.start)
    }

    /// Terminal point of every segment, in order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().filter_map(Segment::end_point)
    }

    pub fn kinds(&self) -> impl Iterator<Item = SegmentKind> + '_ {
        self.segments.iter().map(Segment::kind)
    }

    /// Same segment count and the same segment kinds in order. Closedness
    /// is not part of the structure: an open run can morph into a loop.
    pub fn same_structure(&self, other: &Subpath) -> bool {
        self.len() == other.len() && self.kinds().eq(other.kinds())
    }

    /// Segments paired with the point each one is drawn from.
    pub fn segments_with_start(&self) -> impl Iterator<Item = (Point, &Segment)> + '_ {
        let mut current = self.start;
        self.segments.iter().map(move |seg| {
            let from = current;
            if let Some(p) = seg.end_point() {
                current = p;
            }
            (from, seg)
        })
    }

    /// Every segment re-expressed as a cubic curve.
    pub fn standardized(&self) -> Subpath {
        let segments = self
            .segments_with_start()
            .map(|(from, seg)| seg.to_cubic(from))
            .collect();
        Subpath {
            start: self.start,
            segments,
            closed: self.closed,
        }
    }

    pub fn is_standardized(&self) -> bool {
        self.kinds().all(|k| k == SegmentKind::Cubic)
    }

    /// Area-weighted center of the polygon through the start point and every
    /// segment's terminal point. `None` when that polygon has no area.
    pub fn centroid(&self) -> Option<Point> {
        let mut points = Vec::with_capacity(self.segments.len() + 2);
        points.push(self.start);
        points.extend(self.vertices());
        if self.is_closed() {
            points.push(self.end_point());
        }
        polygon::centroid(&points)
    }

    /// Sum of the straight distances between the vertices at `from` and `to`.
    ///
    /// Vertex 0 is the start point, vertex `i` the end of segment `i - 1`.
    pub fn chord_distance(&self, from: usize, to: usize) -> f64 {
        let to = to.min(self.segments.len());
        if from >= to {
            return 0.0;
        }
        let mut current = match from {
            0 => self.start,
            i => self.segments[i - 1].end_point().unwrap_or(self.start),
        };
        let mut total = 0.0;
        for p in self.segments[from..to].iter().filter_map(Segment::end_point) {
            total += current.distance_to(p);
            current = p;
        }
        total
    }

    /// Command stream: a move to the start, the segments, and a close when closed.
    pub fn commands(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.segments.len() + 2);
        out.push(Segment::move_to(self.start));
        out.extend_from_slice(&self.segments);
        if self.is_closed() {
            out.push(Segment::Close);
        }
        out
    }

    /// Per-point interpolation toward a subpath of the same structure. The
    /// result is closed only when both inputs are.
    pub fn lerp(&self, other: &Subpath, t: f64) -> Option<Subpath> {
        if !self.same_structure(other) {
            return None;
        }
        let segments = self
            .segments
            .iter()
            .zip(&other.segments)
            .map(|(a, b)| a.lerp(b, t))
            .collect::<Option<Vec<_>>>()?;
        Some(Subpath {
            start: self.start.lerp(other.start, t),
            segments,
            closed: self.closed && other.closed,
        })
    }
}
