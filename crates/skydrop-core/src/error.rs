//! Error types for routing and quoting.

use thiserror::Error;

/// Fatal configuration problems detected while routing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The catalog has no active main warehouse. Routing cannot proceed;
    /// this aborts the operation rather than marking the order undeliverable.
    #[error("no active main warehouse in the center catalog")]
    MissingMainWarehouse,
}

/// Failures while building a delivery quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// No active centers exist, so no start center can be assigned.
    #[error("no active distribution centers available")]
    NoActiveCenters,

    /// No feasible route exists within range constraints. This is the
    /// user-facing "cannot deliver to this location" outcome.
    #[error("no feasible delivery route to the customer location")]
    Undeliverable,

    #[error(transparent)]
    Routing(#[from] RoutingError),
}
