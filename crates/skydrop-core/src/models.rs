//! Core data models for the skydrop delivery network.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether the point lies inside the valid lat/lon envelope.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Role of a center inside the delivery network.
///
/// Every non-local delivery is routed through the single main warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterType {
    MainWarehouse,
    DistributionPoint,
}

/// A distribution center in the catalog.
///
/// `max_range_km` is the farthest a drone dispatched from this center can fly
/// in a single hop before it must land. Range is a property of the departing
/// center, so reachability between two centers is not symmetric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionCenter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub max_range_km: f64,
    pub center_type: CenterType,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl DistributionCenter {
    /// Create an active center with only the fields routing cares about.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        max_range_km: f64,
        center_type: CenterType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            lat,
            lon,
            max_range_km,
            center_type,
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn is_main_warehouse(&self) -> bool {
        self.center_type == CenterType::MainWarehouse
    }
}

/// Outcome of a route computation.
///
/// When `feasible` is false the route is empty and the distance is zero; an
/// unreachable customer is an expected business outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    pub feasible: bool,
    pub route: Vec<DistributionCenter>,
    pub total_distance_km: f64,
}

impl RouteResult {
    pub fn found(route: Vec<DistributionCenter>, total_distance_km: f64) -> Self {
        Self {
            feasible: true,
            route,
            total_distance_km,
        }
    }

    pub fn infeasible() -> Self {
        Self {
            feasible: false,
            route: Vec::new(),
            total_distance_km: 0.0,
        }
    }

    /// Centers visited plus the final leg to the customer.
    pub fn stop_count(&self) -> usize {
        if self.feasible {
            self.route.len() + 1
        } else {
            0
        }
    }
}
