//! Two-path morph preparation.
//!
//! Both paths are standardized to cubic segments, paired subpath by subpath,
//! optionally rotated, grown to a common segment count and aligned by
//! centroid. The result interpolates point-for-point at any `t`.

use log::{debug, warn};

use crate::config::{CentroidAlignment, MorphOptions};
use crate::error::MorphError;
use crate::geometry::limits::{MAX_FRAMES, MAX_MORPH_SEGMENTS};
use crate::model::{Segment, Weight};
use crate::path::Path;
use crate::subpath::Subpath;

/// Two paths with identical segment structure, ready to interpolate.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphPair {
    from: Path,
    to: Path,
    shortfall: usize,
}

impl MorphPair {
    pub fn prepare(from: &Path, to: &Path, options: &MorphOptions) -> Result<Self, MorphError> {
        options.validate()?;
        let from_std = from.standardized();
        let to_std = to.standardized();
        let count = from_std.subpaths.len().max(to_std.subpaths.len());

        let mut from_out = Vec::with_capacity(count);
        let mut to_out = Vec::with_capacity(count);
        let mut shortfall = 0;

        for i in 0..count {
            let a = from_std
                .subpaths
                .get(i)
                .map(|s| s.shifting_start(options.from.shift_for(i)));
            let b = to_std
                .subpaths
                .get(i)
                .map(|s| s.shifting_start(options.to.shift_for(i)));

            let (ea, eb) = match (a, b) {
                (Some(a), Some(b)) => {
                    let target = pair_target(a.len().max(b.len()), options.segment_factor)?;
                    let ea = a.equalized_to(target, &options.from.weights);
                    let eb = b.equalized_to(target, &options.to.weights);
                    let want = target.max(ea.len()).max(eb.len());
                    let (ea, pa) = settle(&a, ea, want, &options.from.weights);
                    let (eb, pb) = settle(&b, eb, want, &options.to.weights);
                    shortfall += pa + pb;
                    (ea, eb)
                }
                (Some(a), None) => {
                    let (ea, pa) = grow_alone(&a, options.segment_factor, &options.from.weights)?;
                    shortfall += pa;
                    let eb = collapsed_like(&ea);
                    (ea, eb)
                }
                (None, Some(b)) => {
                    let (eb, pb) = grow_alone(&b, options.segment_factor, &options.to.weights)?;
                    shortfall += pb;
                    let ea = collapsed_like(&eb);
                    (ea, eb)
                }
                (None, None) => continue,
            };
            let (ea, eb) = with_shared_closedness(ea, eb);
            debug!("subpath pair {}: {} segments", i, ea.len());
            from_out.push(ea);
            to_out.push(eb);
        }

        if shortfall > 0 {
            warn!(
                "morph padded {} zero-length segments where equalization stopped early",
                shortfall
            );
        }

        let (from_path, to_path) =
            align_centroids(Path::new(from_out), Path::new(to_out), options.centroid);
        debug_assert!(from_path.same_structure(&to_path));
        Ok(MorphPair {
            from: from_path,
            to: to_path,
            shortfall,
        })
    }

    pub fn from(&self) -> &Path {
        &self.from
    }

    pub fn to(&self) -> &Path {
        &self.to
    }

    pub fn into_paths(self) -> (Path, Path) {
        (self.from, self.to)
    }

    /// Number of zero-length segments appended because a side could not be
    /// split any further.
    pub fn shortfall(&self) -> usize {
        self.shortfall
    }

    /// Segments per subpath pair.
    pub fn segment_counts(&self) -> Vec<usize> {
        self.from.subpaths.iter().map(Subpath::len).collect()
    }

    /// Interpolated path; `t = 0` is the source and `t = 1` the target.
    pub fn at(&self, t: f64) -> Path {
        self.from
            .lerp(&self.to, t)
            .unwrap_or_else(|| self.from.clone())
    }

    /// Like [`MorphPair::at`], but rejects `t` outside `[0, 1]`.
    pub fn try_at(&self, t: f64) -> Result<Path, MorphError> {
        if !t.is_finite() {
            return Err(MorphError::NonFinite("t"));
        }
        if !(0.0..=1.0).contains(&t) {
            return Err(MorphError::OutOfRange {
                param: "t",
                min: 0.0,
                max: 1.0,
                got: t,
            });
        }
        Ok(self.at(t))
    }

    /// `n + 1` evenly spaced paths from `t = 0` to `t = 1`. `n` is clamped to
    /// `1..=MAX_FRAMES`.
    pub fn frames(&self, n: usize) -> Vec<Path> {
        let n = n.clamp(1, MAX_FRAMES);
        (0..=n).map(|i| self.at(i as f64 / n as f64)).collect()
    }

    pub fn try_frames(&self, n: usize) -> Result<Vec<Path>, MorphError> {
        if n == 0 || n > MAX_FRAMES {
            return Err(MorphError::OutOfRange {
                param: "n",
                min: 1.0,
                max: MAX_FRAMES as f64,
                got: n as f64,
            });
        }
        Ok(self.frames(n))
    }
}

fn pair_target(longest: usize, factor: usize) -> Result<usize, MorphError> {
    let target = longest.saturating_mul(factor).max(longest);
    if target > MAX_MORPH_SEGMENTS {
        return Err(MorphError::limit("segments per subpath pair", MAX_MORPH_SEGMENTS));
    }
    Ok(target)
}

// Bring an equalized side up to `want`: grow again from its input when a
// weighted counterpart overshot, then pad whatever is still missing.
fn settle(source: &Subpath, equalized: Subpath, want: usize, weights: &[Weight]) -> (Subpath, usize) {
    let equalized = if equalized.len() < want {
        source.equalized_to(want, weights)
    } else {
        equalized
    };
    let missing = want.saturating_sub(equalized.len());
    (padded(equalized, missing), missing)
}

fn grow_alone(sub: &Subpath, factor: usize, weights: &[Weight]) -> Result<(Subpath, usize), MorphError> {
    let target = pair_target(sub.len(), factor)?;
    let grown = sub.equalized_to(target, weights);
    let want = target.max(grown.len());
    Ok(settle(sub, grown, want, weights))
}

fn padded(mut sub: Subpath, count: usize) -> Subpath {
    if count == 0 {
        return sub;
    }
    let end = sub.end_point();
    sub.segments
        .extend(std::iter::repeat(Segment::curve_to(end, end, end)).take(count));
    sub
}

// Stand-in for a subpath missing on one side: the counterpart's structure
// shrunk onto its centroid (or its start when it encloses no area).
fn collapsed_like(counterpart: &Subpath) -> Subpath {
    let at = counterpart.centroid().unwrap_or(counterpart.start());
    let segments = counterpart.segments.iter().map(|seg| match seg {
        Segment::Line { .. } => Segment::line_to(at),
        Segment::QuadCurve { .. } => Segment::quad_to(at, at),
        _ => Segment::curve_to(at, at, at),
    });
    Subpath {
        start: at,
        segments: segments.collect(),
        closed: true,
    }
}

// A pair is closed only when both sides close. An open side keeps an open
// partner open even when its last point lands on its start.
fn with_shared_closedness(mut a: Subpath, mut b: Subpath) -> (Subpath, Subpath) {
    let closed = a.is_closed() && b.is_closed();
    a.closed = closed;
    b.closed = closed;
    (a, b)
}

fn align_centroids(from: Path, to: Path, mode: CentroidAlignment) -> (Path, Path) {
    match mode {
        CentroidAlignment::None => (from, to),
        CentroidAlignment::Shared => match from.centroid() {
            Some(c) => {
                let to = to.with_centroid(c);
                (from, to)
            }
            None => (from, to),
        },
        CentroidAlignment::Pairs => {
            let to = from
                .subpaths
                .iter()
                .zip(to.into_subpaths())
                .map(|(a, b)| match a.centroid() {
                    Some(c) => b.with_centroid(c),
                    None => b,
                })
                .collect();
            (from, Path::new(to))
        }
        CentroidAlignment::At { center } => (from.with_centroid(center), to.with_centroid(center)),
    }
}
