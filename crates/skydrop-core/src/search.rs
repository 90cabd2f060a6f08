//! Shortest-path search from a center to an arbitrary coordinate.
//!
//! Dijkstra over the implicit graph exposed by [`RangeView`]. The target is
//! a coordinate rather than a node: the search ends as soon as the cheapest
//! frontier center can reach the target within its own range, and the final
//! hop to the target is added to the cumulative distance.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::models::{Coordinate, DistributionCenter};
use crate::range::RangeView;

/// A path of centers ending within one hop of the target coordinate.
#[derive(Debug, Clone)]
pub struct PathToPoint<'a> {
    pub centers: Vec<&'a DistributionCenter>,
    /// Cumulative hop distance including the final leg to the target.
    pub total_distance_km: f64,
    /// Centers settled before the search terminated.
    pub nodes_visited: usize,
}

#[derive(Debug, Clone, Copy)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier entry ordered by cumulative distance, then center id so that
/// equal-cost pops are deterministic.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<'a> {
    cost: FloatOrd,
    id: &'a str,
    idx: usize,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.id == other.id && self.idx == other.idx
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.id.cmp(other.id))
            .then_with(|| self.idx.cmp(&other.idx))
    }
}

/// Find the minimum-distance path from the center at `start_idx` to any
/// center that can reach `target`, plus the direct hop to `target`.
///
/// `excluded` names a center that must not appear as an intermediate node;
/// it is still implicitly reachable as the coordinate target. Returns `None`
/// when the frontier empties without any center reaching the target.
pub fn shortest_path_to_point<'a>(
    view: &RangeView<'a>,
    start_idx: usize,
    target: Coordinate,
    excluded: Option<&str>,
) -> Option<PathToPoint<'a>> {
    let n = view.len();
    let mut best = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut nodes_visited = 0usize;

    best[start_idx] = 0.0;
    frontier.push(Reverse(FrontierEntry {
        cost: FloatOrd(0.0),
        id: view.center(start_idx).id.as_str(),
        idx: start_idx,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let idx = entry.idx;
        if settled[idx] {
            // Stale entry superseded by a cheaper relaxation.
            continue;
        }
        settled[idx] = true;
        nodes_visited += 1;

        let cost = best[idx];
        let current = view.center(idx);

        // Checked before expansion: a center that reaches the target is the
        // end of the path. The start center itself satisfies this at cost 0
        // when the customer is already in range.
        let to_target = view.distance_to_point(current, target);
        if to_target <= current.max_range_km {
            return Some(PathToPoint {
                centers: reconstruct(view, &prev, idx),
                total_distance_km: cost + to_target,
                nodes_visited,
            });
        }

        for (next_idx, hop_km) in view.neighbours(idx) {
            if settled[next_idx] {
                continue;
            }
            if excluded.is_some_and(|id| view.center(next_idx).id == id) {
                continue;
            }
            let tentative = cost + hop_km;
            if tentative < best[next_idx] {
                best[next_idx] = tentative;
                prev[next_idx] = Some(idx);
                frontier.push(Reverse(FrontierEntry {
                    cost: FloatOrd(tentative),
                    id: view.center(next_idx).id.as_str(),
                    idx: next_idx,
                }));
            }
        }
    }

    None
}

fn reconstruct<'a>(
    view: &RangeView<'a>,
    prev: &[Option<usize>],
    end_idx: usize,
) -> Vec<&'a DistributionCenter> {
    let mut path = Vec::new();
    let mut cursor = Some(end_idx);
    while let Some(idx) = cursor {
        path.push(view.center(idx));
        cursor = prev[idx];
    }
    path.reverse();
    path
}
