//! MoveNest trip estimation and quote engine
//!
//! Turns free-text pickup and dropoff locations plus a service selection
//! into a distance estimate, a travel-time estimate and a fare breakdown,
//! including monthly-contract discounts.

pub mod api;
pub mod config;
pub mod distance;
pub mod error;
pub mod fare;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod quote_engine;
pub mod summary;
pub mod travel_time;
pub mod web;

// Re-export core types for public API
pub use config::{MoveNestConfig, PricingConfig};
pub use distance::DistanceEstimator;
pub use error::QuoteError;
pub use fare::FareCalculator;
pub use location_resolver::{GazetteerResolver, LocationResolver};
pub use models::{
    ContractDuration, ContractTerms, Coordinate, FareBreakdown, Quote, QuoteRequest,
    ResolutionMethod, ServiceType,
};
pub use quote_engine::QuoteEngine;
pub use travel_time::TravelTimeEstimator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
