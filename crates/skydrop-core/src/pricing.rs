//! Service cost and delivery-time estimation.

use serde::{Deserialize, Serialize};

/// Rates and speeds used to price a delivery.
///
/// Always passed in explicitly so the engine stays pure and testable; there
/// is no ambient/global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Cost per kilometer flown
    pub rate_per_km: f64,
    /// Surcharge per intermediate stop
    pub stop_fee: f64,
    /// Cruise speed in km/h
    pub drone_speed_kmh: f64,
    /// Fixed order-preparation time in minutes
    pub preparation_minutes: f64,
    /// Dwell time per intermediate stop in minutes
    pub stop_dwell_minutes: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rate_per_km: 2.5,
            stop_fee: 0.5,
            drone_speed_kmh: 50.0,
            preparation_minutes: 10.0,
            stop_dwell_minutes: 5.0,
        }
    }
}

/// Monetary cost and estimated delivery time for one order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub service_cost: f64,
    pub estimated_minutes: u32,
}

/// Stops that incur a surcharge: every center after the departure one. The
/// departure center and the final customer leg are free.
fn intermediate_stops(stop_count: usize) -> usize {
    stop_count.saturating_sub(2)
}

/// Monetary service cost for a delivery.
///
/// Proportional to the distance flown, plus a fee per intermediate stop.
pub fn service_cost(total_distance_km: f64, stop_count: usize, config: &PricingConfig) -> f64 {
    total_distance_km * config.rate_per_km + intermediate_stops(stop_count) as f64 * config.stop_fee
}

/// Estimated delivery time in whole minutes.
///
/// Preparation time, plus flight time at cruise speed, plus dwell time per
/// intermediate stop. Flight time is kept at full precision and the sum is
/// rounded half-up only at the end.
pub fn delivery_minutes(total_distance_km: f64, stop_count: usize, config: &PricingConfig) -> u32 {
    let flight_minutes = total_distance_km / config.drone_speed_kmh * 60.0;
    let dwell_minutes = intermediate_stops(stop_count) as f64 * config.stop_dwell_minutes;
    (config.preparation_minutes + flight_minutes + dwell_minutes).round() as u32
}

/// Cost and delivery time for a routed delivery.
pub fn estimate_cost(total_distance_km: f64, stop_count: usize, config: &PricingConfig) -> CostEstimate {
    CostEstimate {
        service_cost: service_cost(total_distance_km, stop_count, config),
        estimated_minutes: delivery_minutes(total_distance_km, stop_count, config),
    }
}
