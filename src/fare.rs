//! Fare calculation: base rate, distance charge and contract discount

use crate::config::PricingConfig;
use crate::models::{FareBreakdown, ServiceType};

/// Weeks counted in a month when projecting contract totals
const WEEKS_PER_MONTH: f64 = 4.0;

/// Prices trips from an injected rate table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareCalculator {
    pricing: PricingConfig,
}

impl FareCalculator {
    #[must_use]
    pub fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    #[must_use]
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Price a trip of `distance_km` road kilometres.
    ///
    /// Never fails. Services outside the catalogue are charged the default
    /// base rate; `distance_km` is expected to be a validated road distance.
    #[must_use]
    pub fn calculate(
        &self,
        service: &ServiceType,
        distance_km: f64,
        is_monthly_contract: bool,
        trips_per_week: Option<u32>,
    ) -> FareBreakdown {
        let base_fare = self.pricing.base_rate(service);
        let distance_fare = distance_km * self.pricing.rate_per_km;
        let gross = base_fare + distance_fare;

        if !is_monthly_contract {
            return FareBreakdown {
                base_fare,
                distance_fare,
                discount: 0.0,
                total: gross,
                monthly_total: 0.0,
            };
        }

        let discount = (gross * self.pricing.monthly_discount).round();
        let total = gross - discount;
        let trips = f64::from(trips_per_week.unwrap_or(0));
        let monthly_total = (total * trips * WEEKS_PER_MONTH).round();

        FareBreakdown {
            base_fare,
            distance_fare,
            discount,
            total,
            monthly_total,
        }
    }
}

impl Default for FareCalculator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
