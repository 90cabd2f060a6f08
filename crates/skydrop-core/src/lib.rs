pub mod error;
pub mod models;
pub mod pricing;
pub mod quote;
pub mod range;
pub mod routing;
pub mod search;
pub mod spatial;

pub use error::{QuoteError, RoutingError};
pub use models::{CenterType, Coordinate, DistributionCenter, RouteResult};
pub use pricing::{delivery_minutes, estimate_cost, service_cost, CostEstimate, PricingConfig};
pub use quote::{quote_delivery, DeliveryQuote};
pub use range::RangeView;
pub use routing::{find_complete_route, find_nearest_center};
pub use search::{shortest_path_to_point, PathToPoint};
pub use spatial::{distance_between, haversine_distance, EARTH_RADIUS_KM};
