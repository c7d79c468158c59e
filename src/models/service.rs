//! Service catalogue offered by the storefront

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport service selected for a trip
///
/// The storefront pages use several labels for the same category
/// (`elderly` for luggage, `events` for car hire, `kids_transport` on the
/// booking form). All of them parse into the same variant. Labels outside
/// the catalogue are kept as [`ServiceType::Unlisted`] so pricing can fall
/// back to the default base rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceType {
    Kids,
    Staff,
    Luggage,
    CarHire,
    Unlisted(String),
}

impl ServiceType {
    /// Every catalogued service, in display order
    pub const CATALOGUE: [ServiceType; 4] = [
        ServiceType::Kids,
        ServiceType::Staff,
        ServiceType::Luggage,
        ServiceType::CarHire,
    ];

    /// Parse a label from any of the storefront forms
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "kids" | "kids_transport" => ServiceType::Kids,
            "staff" | "staff_transport" => ServiceType::Staff,
            "luggage" | "luggage_transport" | "elderly" => ServiceType::Luggage,
            "carhire" | "car_hire" | "events" => ServiceType::CarHire,
            _ => ServiceType::Unlisted(label.trim().to_string()),
        }
    }

    /// Canonical label used in configuration and JSON
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ServiceType::Kids => "kids",
            ServiceType::Staff => "staff",
            ServiceType::Luggage => "luggage",
            ServiceType::CarHire => "carhire",
            ServiceType::Unlisted(label) => label,
        }
    }

    /// Name shown to customers
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            ServiceType::Kids => "Kids Transport",
            ServiceType::Staff => "Staff Transport",
            ServiceType::Luggage => "Luggage Transport",
            ServiceType::CarHire => "Car Hire",
            ServiceType::Unlisted(label) => label,
        }
    }
}

impl From<String> for ServiceType {
    fn from(label: String) -> Self {
        ServiceType::parse(&label)
    }
}

impl From<ServiceType> for String {
    fn from(service: ServiceType) -> Self {
        service.label().to_string()
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kids", ServiceType::Kids)]
    #[case("kids_transport", ServiceType::Kids)]
    #[case("Staff", ServiceType::Staff)]
    #[case("luggage", ServiceType::Luggage)]
    #[case("elderly", ServiceType::Luggage)]
    #[case("carhire", ServiceType::CarHire)]
    #[case("events", ServiceType::CarHire)]
    #[case(" car_hire ", ServiceType::CarHire)]
    fn test_parse_aliases(#[case] label: &str, #[case] expected: ServiceType) {
        assert_eq!(ServiceType::parse(label), expected);
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let service = ServiceType::parse("Wedding Shuttle");
        assert_eq!(service, ServiceType::Unlisted("Wedding Shuttle".to_string()));
        assert_eq!(service.display_name(), "Wedding Shuttle");
    }

    #[test]
    fn test_serde_uses_canonical_label() {
        let service: ServiceType = serde_json::from_str(r#""events""#).unwrap();
        assert_eq!(service, ServiceType::CarHire);
        assert_eq!(serde_json::to_string(&service).unwrap(), r#""carhire""#);
    }
}
