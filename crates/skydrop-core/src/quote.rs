//! Delivery quoting: the computation half of order creation.
//!
//! Assigns the start center, routes the delivery, and prices it. Persisting
//! the resulting order is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::models::{Coordinate, DistributionCenter};
use crate::pricing::{estimate_cost, PricingConfig};
use crate::routing::{find_complete_route, find_nearest_center};

/// A priced, routed delivery ready to be turned into an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryQuote {
    pub start_center_id: String,
    pub start_center_name: String,
    pub route: Vec<DistributionCenter>,
    pub total_distance_km: f64,
    pub service_cost: f64,
    pub estimated_minutes: u32,
    /// Human-readable route, e.g. `"North -> Central -> Customer"`.
    pub route_summary: String,
}

/// Quote a delivery to `customer` over the given catalog snapshot.
pub fn quote_delivery(
    centers: &[DistributionCenter],
    customer: Coordinate,
    config: &PricingConfig,
) -> Result<DeliveryQuote, QuoteError> {
    let start = find_nearest_center(centers, customer).ok_or(QuoteError::NoActiveCenters)?;

    let result = find_complete_route(centers, start, customer)?;
    if !result.feasible {
        return Err(QuoteError::Undeliverable);
    }

    let estimate = estimate_cost(result.total_distance_km, result.stop_count(), config);
    let route_summary = summarize_route(&result.route);

    Ok(DeliveryQuote {
        start_center_id: start.id.clone(),
        start_center_name: start.name.clone(),
        route: result.route,
        total_distance_km: result.total_distance_km,
        service_cost: estimate.service_cost,
        estimated_minutes: estimate.estimated_minutes,
        route_summary,
    })
}

fn summarize_route(route: &[DistributionCenter]) -> String {
    let names: Vec<&str> = route.iter().map(|c| c.name.as_str()).collect();
    format!("{} -> Customer", names.join(" -> "))
}
