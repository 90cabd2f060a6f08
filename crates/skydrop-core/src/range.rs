//! Reachability view over the active center snapshot.
//!
//! Drone range belongs to the departing center, so edges are directional:
//! A may reach B while B cannot reach A. The view evaluates reachability on
//! demand instead of materializing an adjacency structure, because the
//! search target is an arbitrary coordinate that changes per call and is not
//! itself a node.

use crate::models::{Coordinate, DistributionCenter};
use crate::spatial::haversine_distance;

/// Borrowed view over the active centers of a catalog snapshot.
pub struct RangeView<'a> {
    centers: Vec<&'a DistributionCenter>,
}

impl<'a> RangeView<'a> {
    /// Build a view over the active centers in `snapshot`.
    ///
    /// Iteration order follows the snapshot, which keeps tie-breaking
    /// deterministic for callers.
    pub fn active(snapshot: &'a [DistributionCenter]) -> Self {
        Self {
            centers: snapshot.iter().filter(|c| c.active).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn center(&self, idx: usize) -> &'a DistributionCenter {
        self.centers[idx]
    }

    pub fn centers(&self) -> &[&'a DistributionCenter] {
        &self.centers
    }

    /// Index of a center by id, if it is part of the active view.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.centers.iter().position(|c| c.id == id)
    }

    /// Distance in km from a center to an arbitrary coordinate.
    pub fn distance_to_point(&self, from: &DistributionCenter, target: Coordinate) -> f64 {
        haversine_distance(from.lat, from.lon, target.lat, target.lon)
    }

    /// Whether a drone departing `from` can reach `target` in one hop.
    pub fn can_reach_point(&self, from: &DistributionCenter, target: Coordinate) -> bool {
        self.distance_to_point(from, target) <= from.max_range_km
    }

    /// Whether a drone departing `from` can reach center `to` in one hop.
    pub fn can_reach_center(&self, from: &DistributionCenter, to: &DistributionCenter) -> bool {
        self.can_reach_point(from, to.position())
    }

    /// Centers reachable in one hop from the center at `from_idx`, with the
    /// hop distance. The origin is never its own neighbour.
    pub fn neighbours(&self, from_idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let from = self.centers[from_idx];
        self.centers.iter().enumerate().filter_map(move |(idx, to)| {
            if idx == from_idx {
                return None;
            }
            let hop_km = haversine_distance(from.lat, from.lon, to.lat, to.lon);
            (hop_km <= from.max_range_km).then_some((idx, hop_km))
        })
    }
}
