//! Monthly contract terms for schools and companies

use serde::{Deserialize, Serialize};

use crate::{QuoteError, Result};

/// Contract length offered on the quote form
///
/// Stored with the quote. It does not change the fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ContractDuration {
    ThreeMonths,
    #[default]
    SixMonths,
    TwelveMonths,
}

impl ContractDuration {
    #[must_use]
    pub fn months(self) -> u32 {
        match self {
            ContractDuration::ThreeMonths => 3,
            ContractDuration::SixMonths => 6,
            ContractDuration::TwelveMonths => 12,
        }
    }
}

impl TryFrom<u32> for ContractDuration {
    type Error = QuoteError;

    fn try_from(months: u32) -> Result<Self> {
        match months {
            3 => Ok(ContractDuration::ThreeMonths),
            6 => Ok(ContractDuration::SixMonths),
            12 => Ok(ContractDuration::TwelveMonths),
            other => Err(QuoteError::invalid_input(format!(
                "contract duration must be 3, 6 or 12 months, got {other}"
            ))),
        }
    }
}

impl From<ContractDuration> for u32 {
    fn from(duration: ContractDuration) -> Self {
        duration.months()
    }
}

/// Terms captured when a customer asks for a monthly contract
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractTerms {
    /// School or company name
    #[serde(default)]
    pub organization_name: String,
    #[serde(default, rename = "duration_months")]
    pub duration: ContractDuration,
    #[serde(default)]
    pub trips_per_week: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_conversion() {
        assert_eq!(ContractDuration::try_from(3).unwrap().months(), 3);
        assert_eq!(ContractDuration::try_from(12).unwrap(), ContractDuration::TwelveMonths);
        assert!(ContractDuration::try_from(4).is_err());
    }

    #[test]
    fn test_terms_deserialize_with_defaults() {
        let terms: ContractTerms =
            serde_json::from_str(r#"{"organization_name": "Greenside High"}"#).unwrap();
        assert_eq!(terms.organization_name, "Greenside High");
        assert_eq!(terms.duration, ContractDuration::SixMonths);
        assert_eq!(terms.trips_per_week, 0);

        let bad = serde_json::from_str::<ContractTerms>(r#"{"duration_months": 5}"#);
        assert!(bad.is_err());
    }
}
