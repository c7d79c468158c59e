//! Location model for geographic coordinates and free-text queries

use serde::{Deserialize, Serialize};

use crate::{QuoteError, Result};

/// Latitude/longitude pair in decimal degrees
///
/// Only built through [`Coordinate::new`] or deserialization, both of which
/// enforce the range.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = QuoteError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN and out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(QuoteError::invalid_input(format!(
                "latitude {latitude} is outside -90..=90"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(QuoteError::invalid_input(format!(
                "longitude {longitude} is outside -180..=180"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Const constructor for compile-time tables whose values are known to be in range
    pub(crate) const fn fixed(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in decimal degrees, -90..=90
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees, -180..=180
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl From<Coordinate> for haversine::Location {
    fn from(coordinate: Coordinate) -> Self {
        haversine::Location {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }
}

/// Free-text place name or address fragment, never blank
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn new<S: Into<String>>(text: S) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuoteError::invalid_input("location cannot be empty"));
        }
        Ok(Self(text))
    }

    /// The query exactly as the caller typed it
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed, lowercased form used for gazetteer lookups
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.trim().to_lowercase()
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = QuoteError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a query was turned into a coordinate
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionMethod {
    /// Normalized query is a gazetteer key
    Exact,
    /// Normalized query contains a gazetteer key
    Partial,
    /// No gazetteer key matched; coordinate derived from the query text
    HashedFallback,
}

/// Result of resolving one query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub query: LocationQuery,
    pub coordinate: Coordinate,
    pub method: ResolutionMethod,
}
