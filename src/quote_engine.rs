//! Quote Engine
//!
//! Chains location resolution, distance and travel-time estimation, and
//! fare calculation into a single [`Quote`]. The engine holds no state
//! beyond its configuration, so the same request always yields the same
//! quote.

use tracing::{debug, instrument};

use crate::Result;
use crate::config::PricingConfig;
use crate::distance::DistanceEstimator;
use crate::fare::FareCalculator;
use crate::location_resolver::{GazetteerResolver, LocationResolver};
use crate::models::{LocationQuery, Quote, QuoteRequest};
use crate::travel_time::TravelTimeEstimator;

pub struct QuoteEngine<R = GazetteerResolver> {
    resolver: R,
    fares: FareCalculator,
}

impl QuoteEngine<GazetteerResolver> {
    /// Engine backed by the built-in gazetteer
    #[must_use]
    pub fn new(pricing: PricingConfig) -> Self {
        Self::with_resolver(GazetteerResolver::default(), pricing)
    }
}

impl Default for QuoteEngine<GazetteerResolver> {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl<R: LocationResolver> QuoteEngine<R> {
    pub fn with_resolver(resolver: R, pricing: PricingConfig) -> Self {
        Self {
            resolver,
            fares: FareCalculator::new(pricing),
        }
    }

    /// Rebuild the engine around a new pricing snapshot
    #[must_use]
    pub fn with_pricing(self, pricing: PricingConfig) -> Self {
        Self {
            resolver: self.resolver,
            fares: FareCalculator::new(pricing),
        }
    }

    #[must_use]
    pub fn pricing(&self) -> &PricingConfig {
        self.fares.pricing()
    }

    /// Build a fresh quote for a request
    #[instrument(skip(self, request), fields(service = %request.service))]
    pub fn build_quote(&self, request: &QuoteRequest) -> Result<Quote> {
        let pickup = self.resolver.resolve(&LocationQuery::new(request.pickup.as_str())?);
        let dropoff = self.resolver.resolve(&LocationQuery::new(request.dropoff.as_str())?);

        let distance = DistanceEstimator::estimate(&pickup.coordinate, &dropoff.coordinate);
        let time = TravelTimeEstimator::estimate(distance.road_km)?;

        let fare = self.fares.calculate(
            &request.service,
            distance.road_km,
            request.is_monthly_contract(),
            request.contract.as_ref().map(|contract| contract.trips_per_week),
        );

        debug!(
            road_km = distance.road_km,
            minutes = time.total_minutes,
            total = fare.total,
            "Quote built"
        );

        Ok(Quote {
            pickup,
            dropoff,
            service: request.service.clone(),
            distance,
            time,
            fare,
            contract: request.contract.clone(),
        })
    }
}
