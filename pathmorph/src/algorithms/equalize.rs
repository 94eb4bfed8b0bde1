//! Segment-count equalization.
//!
//! Grows a subpath to a requested segment count without changing its shape.
//! Each new segment comes from splitting, at its parametric midpoint, the
//! segment with the largest chord length times weight. Weights let callers
//! bias where new vertices land along the subpath.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace, warn};

use crate::model::{Point, Segment, Weight};
use crate::subpath::Subpath;

/// A segment with the point it is drawn from and its ranking inputs.
#[derive(Clone, Debug)]
struct WeightedSegment {
    previous: Point,
    segment: Segment,
    chord: f64,
    weight: f64,
    // all control points coincide, so splitting makes no progress
    degenerate: bool,
}

impl WeightedSegment {
    fn wrap(start: Point, segments: &[Segment], weight: f64) -> Vec<WeightedSegment> {
        let mut current = start;
        let mut out = Vec::with_capacity(segments.len());
        for seg in segments {
            let Some(to) = seg.end_point() else {
                continue;
            };
            if let Some(curve) = seg.bezier(current) {
                out.push(WeightedSegment {
                    previous: current,
                    segment: *seg,
                    chord: current.distance_to(to),
                    weight,
                    degenerate: curve.is_degenerate(),
                });
            }
            current = to;
        }
        out
    }

    #[inline]
    fn weighted_length(&self) -> f64 {
        self.chord * self.weight
    }

    fn split(&self, factor: f64, weight: f64) -> Vec<WeightedSegment> {
        let pieces = self.segment.split_at_factors(self.previous, &[factor]);
        Self::wrap(self.previous, &pieces, weight)
    }
}

impl Subpath {
    /// Add `count` segments by repeatedly halving the segment with the largest
    /// weighted chord length.
    ///
    /// `weights` must be ascending by `start_percentage`. Every weight boundary
    /// that falls strictly inside a segment splits that segment exactly there
    /// first; those splits count toward the target, so with weights the result
    /// can hold more than `len() + count` segments. Growth stops early when no
    /// segment can be split any further (zero-length geometry); the result
    /// then has fewer segments than requested.
    pub fn adding_segments(&self, count: usize, weights: &[Weight]) -> Subpath {
        let wanted = self.segments.len() + count;
        let mut wrapped = WeightedSegment::wrap(self.start, &self.segments, Weight::DEFAULT_VALUE);
        assign_weights(&mut wrapped, weights);
        let wrapped = grow(wrapped, wanted);
        debug!(
            "equalized subpath: {} -> {} segments (wanted {})",
            self.segments.len(),
            wrapped.len(),
            wanted
        );
        Subpath {
            start: self.start,
            segments: wrapped.into_iter().map(|w| w.segment).collect(),
            closed: self.closed,
        }
    }

    /// Grow to `target` segments. Subpaths already at or above it only get the
    /// weight boundary splits.
    pub fn equalized_to(&self, target: usize, weights: &[Weight]) -> Subpath {
        self.adding_segments(target.saturating_sub(self.len()), weights)
    }
}

// Walk segments by cumulative chord percentage and apply each weight from its
// start percentage onward. A boundary inside a segment splits it there; a
// boundary on (or before) a segment's start is adopted without splitting.
// Percentages are compared exactly.
fn assign_weights(wrapped: &mut Vec<WeightedSegment>, weights: &[Weight]) {
    if weights.is_empty() {
        return;
    }
    let total: f64 = wrapped.iter().map(|w| w.chord).sum();
    if total == 0.0 || !total.is_finite() {
        debug!("weight pass skipped: subpath has no chord length");
        return;
    }

    let mut distance = 0.0;
    let mut index = 0;
    let mut pending = weights.iter().peekable();
    let mut value = Weight::DEFAULT_VALUE;

    while index < wrapped.len() {
        let chord = wrapped[index].chord;
        let next_distance = distance + chord;
        let current_pct = distance / total;
        let next_pct = next_distance / total;

        if let Some(boundary) = pending.next_if(|w| w.start_percentage < next_pct) {
            let factor = (boundary.start_percentage - current_pct) / (next_pct - current_pct);
            let previous_value = value;
            value = boundary.value;
            if !(factor > 0.0 && factor < 1.0) || current_pct == next_pct {
                continue;
            }
            let pieces = wrapped[index].split(factor, previous_value);
            trace!(
                "weight boundary {} splits segment {} at {}",
                boundary.start_percentage,
                index,
                factor
            );
            let first_chord = pieces.first().map_or(0.0, |p| p.chord);
            wrapped.splice(index..=index, pieces);
            // the second half is revisited and picks up the new weight
            index += 1;
            distance += first_chord;
            continue;
        }

        wrapped[index].weight = value;
        index += 1;
        distance = next_distance;
    }
}

// Growth candidates sit in an arena threaded as a linked list, so a split
// rewrites one slot and appends one without moving anything else. `rank` is
// the segment's position in path order: its original index followed by one
// 0/1 step per split, compared lexicographically.
struct Node {
    item: WeightedSegment,
    next: Option<usize>,
    rank: Vec<u32>,
}

// Heap entry: heaviest weighted chord first, earliest position on ties.
struct Candidate {
    weighted: f64,
    rank: Vec<u32>,
    node: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weighted
            .total_cmp(&other.weighted)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

fn push_candidate(heap: &mut BinaryHeap<Candidate>, nodes: &[Node], index: usize) {
    let node = &nodes[index];
    if node.item.degenerate {
        return;
    }
    heap.push(Candidate {
        weighted: node.item.weighted_length(),
        rank: node.rank.clone(),
        node: index,
    });
}

fn grow(wrapped: Vec<WeightedSegment>, wanted: usize) -> Vec<WeightedSegment> {
    if wrapped.len() >= wanted {
        return wrapped;
    }
    let first_len = wrapped.len();
    let mut nodes: Vec<Node> = Vec::with_capacity(wanted);
    for (i, item) in wrapped.into_iter().enumerate() {
        nodes.push(Node {
            item,
            next: (i + 1 < first_len).then_some(i + 1),
            rank: vec![i as u32],
        });
    }
    let mut heap = BinaryHeap::with_capacity(wanted);
    for i in 0..nodes.len() {
        push_candidate(&mut heap, &nodes, i);
    }

    let mut count = nodes.len();
    while count < wanted {
        let Some(Candidate { node, .. }) = heap.pop() else {
            warn!(
                "equalization stopped at {} of {} segments: nothing left to split",
                count, wanted
            );
            break;
        };
        let target = &nodes[node].item;
        let pieces = target.split(0.5, target.weight);
        let Ok([first, second]) = <[WeightedSegment; 2]>::try_from(pieces) else {
            warn!(
                "equalization stopped at {} of {} segments: degenerate split",
                count, wanted
            );
            break;
        };
        let added = nodes.len();
        let mut rank = std::mem::take(&mut nodes[node].rank);
        let mut second_rank = rank.clone();
        rank.push(0);
        second_rank.push(1);
        let next = nodes[node].next;
        nodes.push(Node {
            item: second,
            next,
            rank: second_rank,
        });
        let slot = &mut nodes[node];
        slot.item = first;
        slot.next = Some(added);
        slot.rank = rank;
        push_candidate(&mut heap, &nodes, node);
        push_candidate(&mut heap, &nodes, added);
        count += 1;
    }

    let mut out = Vec::with_capacity(nodes.len());
    let mut cursor = (!nodes.is_empty()).then_some(0);
    while let Some(i) = cursor {
        out.push(nodes[i].item.clone());
        cursor = nodes[i].next;
    }
    out
}
