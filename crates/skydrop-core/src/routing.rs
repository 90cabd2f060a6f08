//! Route assembly: start-center selection and hub routing.
//!
//! Every delivery that does not start at the main warehouse flies
//! start -> main warehouse -> customer. Both legs are shortest-path searches
//! over the active snapshot; the warehouse joins the two legs and appears in
//! the merged route exactly once.

use crate::error::RoutingError;
use crate::models::{Coordinate, DistributionCenter, RouteResult};
use crate::range::RangeView;
use crate::search::{shortest_path_to_point, PathToPoint};
use crate::spatial::haversine_distance;

/// Pick the active center closest to the customer.
///
/// Ties go to the first center encountered in snapshot order. Returns `None`
/// when there are no active centers; order creation must treat that as a
/// fatal precondition.
pub fn find_nearest_center<'a>(
    centers: &'a [DistributionCenter],
    customer: Coordinate,
) -> Option<&'a DistributionCenter> {
    let mut nearest: Option<(&DistributionCenter, f64)> = None;
    for center in centers.iter().filter(|c| c.active) {
        let distance = haversine_distance(center.lat, center.lon, customer.lat, customer.lon);
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((center, distance)),
        }
    }
    nearest.map(|(center, _)| center)
}

/// Compute the full delivery route start -> main warehouse -> customer.
///
/// Fails with [`RoutingError::MissingMainWarehouse`] when the catalog has no
/// active main warehouse; an unreachable customer is reported through
/// `RouteResult::feasible`, not as an error.
pub fn find_complete_route(
    centers: &[DistributionCenter],
    start: &DistributionCenter,
    customer: Coordinate,
) -> Result<RouteResult, RoutingError> {
    let view = RangeView::active(centers);

    let hub_idx = view
        .centers()
        .iter()
        .position(|c| c.is_main_warehouse())
        .ok_or(RoutingError::MissingMainWarehouse)?;
    let hub = view.center(hub_idx);

    let Some(start_idx) = view.index_of(&start.id) else {
        // A start center outside the active snapshot cannot dispatch.
        return Ok(RouteResult::infeasible());
    };

    // Orders assigned directly to the warehouse only need the outbound leg.
    if start.id == hub.id {
        return Ok(to_route_result(shortest_path_to_point(
            &view, hub_idx, customer, None,
        )));
    }

    // Leg one targets the warehouse as a coordinate; the warehouse node
    // itself must not be expanded as an intermediate, otherwise it could end
    // up in the middle of the merged route.
    let Some(leg_to_hub) =
        shortest_path_to_point(&view, start_idx, hub.position(), Some(hub.id.as_str()))
    else {
        return Ok(RouteResult::infeasible());
    };

    let Some(leg_to_customer) = shortest_path_to_point(&view, hub_idx, customer, None) else {
        return Ok(RouteResult::infeasible());
    };

    // Merge at the junction: leg one ends with the hop onto the warehouse,
    // leg two starts there. The warehouse is counted once.
    let mut route: Vec<DistributionCenter> =
        leg_to_hub.centers.iter().map(|c| (*c).clone()).collect();
    route.push(hub.clone());
    route.extend(leg_to_customer.centers.iter().skip(1).map(|c| (*c).clone()));

    Ok(RouteResult::found(
        route,
        leg_to_hub.total_distance_km + leg_to_customer.total_distance_km,
    ))
}

fn to_route_result(path: Option<PathToPoint>) -> RouteResult {
    match path {
        Some(path) => RouteResult::found(
            path.centers.iter().map(|c| (*c).clone()).collect(),
            path.total_distance_km,
        ),
        None => RouteResult::infeasible(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CenterType;

    fn point(id: &str, lat: f64, lon: f64, range_km: f64) -> DistributionCenter {
        DistributionCenter::new(id, id.to_uppercase(), lat, lon, range_km, CenterType::DistributionPoint)
    }

    fn warehouse(id: &str, lat: f64, lon: f64, range_km: f64) -> DistributionCenter {
        DistributionCenter::new(id, id.to_uppercase(), lat, lon, range_km, CenterType::MainWarehouse)
    }

    /// Every hop, including the final customer leg, must respect the
    /// departing center's range.
    fn assert_hops_within_range(result: &RouteResult, customer: Coordinate) {
        assert!(result.feasible);
        for pair in result.route.windows(2) {
            let hop = haversine_distance(pair[0].lat, pair[0].lon, pair[1].lat, pair[1].lon);
            assert!(
                hop <= pair[0].max_range_km + 1e-9,
                "hop {} -> {} of {hop} km exceeds range {}",
                pair[0].id,
                pair[1].id,
                pair[0].max_range_km
            );
        }
        let last = result.route.last().expect("feasible route is nonempty");
        let final_leg = haversine_distance(last.lat, last.lon, customer.lat, customer.lon);
        assert!(final_leg <= last.max_range_km + 1e-9);
    }

    #[test]
    fn nearest_center_over_empty_catalog_is_none() {
        assert!(find_nearest_center(&[], Coordinate::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn nearest_center_matches_brute_force_scan() {
        let centers = vec![
            point("a", 4.60, -74.08, 10.0),
            point("b", 4.65, -74.05, 10.0),
            point("c", 4.70, -74.10, 10.0),
        ];
        let customer = Coordinate::new(4.66, -74.06);

        let expected = centers
            .iter()
            .min_by(|x, y| {
                let dx = haversine_distance(x.lat, x.lon, customer.lat, customer.lon);
                let dy = haversine_distance(y.lat, y.lon, customer.lat, customer.lon);
                dx.total_cmp(&dy)
            })
            .unwrap();
        let nearest = find_nearest_center(&centers, customer).unwrap();
        assert_eq!(nearest.id, expected.id);
    }

    #[test]
    fn nearest_center_ignores_inactive_and_breaks_ties_first() {
        let customer = Coordinate::new(0.0, 0.0);
        let centers = vec![
            point("closest-but-inactive", 0.0, 0.001, 10.0).deactivated(),
            point("first", 0.0, 0.01, 10.0),
            point("same-distance", 0.0, -0.01, 10.0),
        ];
        let nearest = find_nearest_center(&centers, customer).unwrap();
        assert_eq!(nearest.id, "first");
    }

    #[test]
    fn missing_warehouse_is_a_configuration_error() {
        let centers = vec![point("a", 0.0, 0.0, 10.0)];
        let err = find_complete_route(&centers, &centers[0], Coordinate::new(0.0, 0.05));
        assert_eq!(err.unwrap_err(), RoutingError::MissingMainWarehouse);
    }

    #[test]
    fn start_at_warehouse_with_customer_in_range_is_single_node() {
        let centers = vec![warehouse("hub", 0.0, 0.0, 15.0), point("a", 0.0, 0.3, 15.0)];
        let customer = Coordinate::new(0.0, 0.1);

        let result = find_complete_route(&centers, &centers[0], customer).unwrap();
        assert!(result.feasible);
        assert_eq!(result.route.len(), 1);
        assert_eq!(result.route[0].id, "hub");
        let direct = haversine_distance(0.0, 0.0, customer.lat, customer.lon);
        assert!((result.total_distance_km - direct).abs() < 1e-9);
        assert_hops_within_range(&result, customer);
    }

    #[test]
    fn two_leg_route_contains_warehouse_exactly_once() {
        // start -> mid -> hub, then hub -> customer directly.
        let centers = vec![
            warehouse("hub", 0.0, 0.0, 12.0),
            point("mid", 0.0, 0.1, 12.0),
            point("start", 0.0, 0.2, 12.0),
        ];
        let customer = Coordinate::new(0.0, -0.05);

        let result = find_complete_route(&centers, &centers[2], customer).unwrap();
        assert!(result.feasible);

        let ids: Vec<&str> = result.route.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["start", "mid", "hub"]);
        let hub_occurrences = ids.iter().filter(|id| **id == "hub").count();
        assert_eq!(hub_occurrences, 1);

        let expected = haversine_distance(0.0, 0.2, 0.0, 0.1)
            + haversine_distance(0.0, 0.1, 0.0, 0.0)
            + haversine_distance(0.0, 0.0, customer.lat, customer.lon);
        assert!((result.total_distance_km - expected).abs() < 1e-9);
        assert_hops_within_range(&result, customer);
    }

    #[test]
    fn unreachable_warehouse_short_circuits_to_infeasible() {
        let centers = vec![
            warehouse("hub", 0.0, 0.0, 50.0),
            point("start", 3.0, 3.0, 5.0),
        ];
        let result = find_complete_route(&centers, &centers[1], Coordinate::new(0.0, 0.05)).unwrap();
        assert!(!result.feasible);
        assert!(result.route.is_empty());
        assert_eq!(result.total_distance_km, 0.0);
    }

    #[test]
    fn unreachable_customer_after_warehouse_is_infeasible() {
        // Leg one succeeds, leg two cannot reach the customer.
        let centers = vec![
            warehouse("hub", 0.0, 0.0, 12.0),
            point("start", 0.0, 0.1, 12.0),
        ];
        let customer = Coordinate::new(1.0, 1.0);
        let result = find_complete_route(&centers, &centers[1], customer).unwrap();
        assert!(!result.feasible);
        assert!(result.route.is_empty());
        assert_eq!(result.total_distance_km, 0.0);
    }

    #[test]
    fn warehouse_never_appears_mid_route() {
        // The straight line from start to "beyond" passes over the hub. The
        // first leg must end at the hub, not thread through it.
        let centers = vec![
            warehouse("hub", 0.0, 0.0, 12.0),
            point("start", 0.0, 0.2, 12.0),
            point("mid", 0.0, 0.1, 12.0),
            point("beyond", 0.0, -0.1, 12.0),
        ];
        let customer = Coordinate::new(0.0, -0.15);

        let result = find_complete_route(&centers, &centers[1], customer).unwrap();
        assert!(result.feasible);
        let ids: Vec<&str> = result.route.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["start", "mid", "hub", "beyond"]);
        assert_hops_within_range(&result, customer);
    }
}
