//! Quote request and the value objects assembled into a quote

use serde::{Deserialize, Serialize};

use crate::models::{ContractTerms, ResolvedLocation, ServiceType};

/// Straight-line and road distance between two coordinates
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct DistanceResult {
    pub straight_line_km: f64,
    /// Straight-line distance scaled by `correction_factor`, one decimal place
    pub road_km: f64,
    pub correction_factor: f64,
}

/// Estimated door-to-door travel time
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeEstimate {
    pub total_minutes: u32,
    /// `"5h 49m"` above an hour, `"45 mins"` otherwise
    pub formatted: String,
}

/// Price breakdown for a single trip
///
/// Values are kept unrounded; the `display_*` accessors give the whole
/// currency units shown to customers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FareBreakdown {
    pub base_fare: f64,
    pub distance_fare: f64,
    pub discount: f64,
    pub total: f64,
    pub monthly_total: f64,
}

impl FareBreakdown {
    #[must_use]
    pub fn display_base_fare(&self) -> i64 {
        self.base_fare.round() as i64
    }

    #[must_use]
    pub fn display_distance_fare(&self) -> i64 {
        self.distance_fare.round() as i64
    }

    #[must_use]
    pub fn display_discount(&self) -> i64 {
        self.discount.round() as i64
    }

    #[must_use]
    pub fn display_total(&self) -> i64 {
        self.total.round() as i64
    }

    #[must_use]
    pub fn display_monthly_total(&self) -> i64 {
        self.monthly_total.round() as i64
    }
}

/// Input for a quote as submitted by the quote form
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuoteRequest {
    pub pickup: String,
    pub dropoff: String,
    pub service: ServiceType,
    /// Present when the customer ticked "Monthly Contract"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractTerms>,
}

impl QuoteRequest {
    pub fn new<P: Into<String>, D: Into<String>>(pickup: P, dropoff: D, service: ServiceType) -> Self {
        Self {
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            service,
            contract: None,
        }
    }

    #[must_use]
    pub fn with_contract(mut self, contract: ContractTerms) -> Self {
        self.contract = Some(contract);
        self
    }

    #[must_use]
    pub fn is_monthly_contract(&self) -> bool {
        self.contract.is_some()
    }
}

/// A complete quote for one trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Quote {
    pub pickup: ResolvedLocation,
    pub dropoff: ResolvedLocation,
    pub service: ServiceType,
    pub distance: DistanceResult,
    pub time: TimeEstimate,
    pub fare: FareBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractTerms>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContractDuration;

    #[test]
    fn test_fare_display_rounding() {
        let fare = FareBreakdown {
            base_fare: 100.0,
            distance_fare: 243.1,
            discount: 0.0,
            total: 343.1,
            monthly_total: 0.0,
        };
        assert_eq!(fare.display_distance_fare(), 243);
        assert_eq!(fare.display_total(), 343);
    }

    #[test]
    fn test_request_deserialization() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{
                "pickup": "Sandton City",
                "dropoff": "Midrand",
                "service": "elderly",
                "contract": {"organization_name": "Acme", "duration_months": 12, "trips_per_week": 10}
            }"#,
        )
        .unwrap();

        assert_eq!(request.service, ServiceType::Luggage);
        assert!(request.is_monthly_contract());
        let contract = request.contract.unwrap();
        assert_eq!(contract.duration, ContractDuration::TwelveMonths);
        assert_eq!(contract.trips_per_week, 10);
    }

    #[test]
    fn test_request_without_contract() {
        let request = QuoteRequest::new("Pretoria", "Centurion", ServiceType::Staff);
        assert!(!request.is_monthly_contract());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("contract").is_none());
    }
}
