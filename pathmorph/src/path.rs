//! Paths as ordered subpaths, and the command-stream adapters around them.

use crate::geometry::polygon;
use crate::model::{Point, Segment};
use crate::subpath::Subpath;

/// Receives a command stream, e.g. a native path builder.
pub trait PathSink {
    fn emit(&mut self, segment: Segment);
}

/// Replays a command stream, e.g. a native path iterator.
pub trait PathSource {
    fn for_each_segment(&self, f: &mut dyn FnMut(Segment));
}

impl PathSink for Vec<Segment> {
    fn emit(&mut self, segment: Segment) {
        self.push(segment);
    }
}

impl PathSource for [Segment] {
    fn for_each_segment(&self, f: &mut dyn FnMut(Segment)) {
        for &seg in self {
            f(seg);
        }
    }
}

impl PathSource for Vec<Segment> {
    fn for_each_segment(&self, f: &mut dyn FnMut(Segment)) {
        self.as_slice().for_each_segment(f);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub(crate) subpaths: Vec<Subpath>,
}

impl Path {
    pub fn new(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }

    /// Partition a flat command stream into subpaths.
    ///
    /// A `Move` opens a new subpath at its point. A `Close` closes the current
    /// subpath (adding a line back to its start when needed) and opens the
    /// next one where the closed one ended. A `Close` with nothing to close is
    /// dropped. Commands before any `Move` start at the origin.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut builder = SubpathBuilder::default();
        for seg in segments {
            builder.push(seg);
        }
        builder.finish()
    }

    pub fn from_source<S: PathSource + ?Sized>(source: &S) -> Self {
        let mut builder = SubpathBuilder::default();
        source.for_each_segment(&mut |seg| builder.push(seg));
        builder.finish()
    }

    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    pub fn into_subpaths(self) -> Vec<Subpath> {
        self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Total number of segments across all subpaths.
    pub fn segment_count(&self) -> usize {
        self.subpaths.iter().map(Subpath::len).sum()
    }

    pub fn standardized(&self) -> Path {
        Path::new(self.subpaths.iter().map(Subpath::standardized).collect())
    }

    /// Replay every subpath's commands into `sink`.
    pub fn emit<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for sub in &self.subpaths {
            for seg in sub.commands() {
                sink.emit(seg);
            }
        }
    }

    pub fn commands(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.segment_count() + 2 * self.subpaths.len());
        self.emit(&mut out);
        out
    }

    /// Subpath centroids averaged by the absolute area of each subpath.
    pub fn centroid(&self) -> Option<Point> {
        let (mut px, mut py, mut total) = (0.0, 0.0, 0.0);
        for sub in &self.subpaths {
            let Some(c) = sub.centroid() else {
                continue;
            };
            let mut ring = vec![sub.start()];
            ring.extend(sub.vertices());
            let area = polygon::signed_area(&ring).abs();
            px += area * c.x;
            py += area * c.y;
            total += area;
        }
        if total == 0.0 {
            return None;
        }
        Some(Point::new(px / total, py / total))
    }

    /// Per-point interpolation toward a path with identical structure.
    pub fn lerp(&self, other: &Path, t: f64) -> Option<Path> {
        if self.subpaths.len() != other.subpaths.len() {
            return None;
        }
        self.subpaths
            .iter()
            .zip(&other.subpaths)
            .map(|(a, b)| a.lerp(b, t))
            .collect::<Option<Vec<_>>>()
            .map(Path::new)
    }

    pub fn same_structure(&self, other: &Path) -> bool {
        self.subpaths.len() == other.subpaths.len()
            && self
                .subpaths
                .iter()
                .zip(&other.subpaths)
                .all(|(a, b)| a.same_structure(b))
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path::from_segments(iter)
    }
}

impl From<Subpath> for Path {
    fn from(sub: Subpath) -> Self {
        Path::new(vec![sub])
    }
}

#[derive(Default)]
struct SubpathBuilder {
    done: Vec<Subpath>,
    start: Point,
    pending: Vec<Segment>,
}

impl SubpathBuilder {
    fn push(&mut self, seg: Segment) {
        match seg {
            Segment::Move { to } => {
                self.flush();
                self.start = to;
            }
            Segment::Close => {
                if self.pending.is_empty() {
                    return;
                }
                let closed = Subpath::closed(self.start, self.pending.drain(..));
                self.start = closed.end_point();
                self.done.push(closed);
            }
            other => self.pending.push(other),
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let open = Subpath::open(self.start, self.pending.drain(..));
            self.done.push(open);
        }
    }

    fn finish(mut self) -> Path {
        self.flush();
        Path::new(self.done)
    }
}
