//! Location Resolution Module
//!
//! Turns free-text pickup and dropoff fields into coordinates. The bundled
//! [`GazetteerResolver`] is an approximation layer: a fixed table of South
//! African cities plus a deterministic pseudo-coordinate for anything it
//! does not recognise. A real geocoding client can replace it by
//! implementing [`LocationResolver`].

use crate::models::{Coordinate, LocationQuery, ResolutionMethod, ResolvedLocation};
use tracing::debug;

/// Resolves a query into a coordinate. Implementations never fail.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, query: &LocationQuery) -> ResolvedLocation;
}

/// A named place in the gazetteer
#[derive(Debug, Clone, Copy)]
pub struct GazetteerEntry {
    /// Lowercase lookup key
    pub name: &'static str,
    pub coordinate: Coordinate,
}

const fn entry(name: &'static str, latitude: f64, longitude: f64) -> GazetteerEntry {
    GazetteerEntry {
        name,
        coordinate: Coordinate::fixed(latitude, longitude),
    }
}

/// Cities served by MoveNest. Order matters for partial matches.
pub const SOUTH_AFRICAN_CITIES: &[GazetteerEntry] = &[
    entry("johannesburg", -26.2041, 28.0473),
    entry("pretoria", -25.7479, 28.1878),
    entry("durban", -29.8587, 31.0218),
    entry("cape town", -33.9249, 18.4232),
    entry("port elizabeth", -33.9608, 25.6022),
    entry("bloemfontein", -29.1181, 26.2231),
    entry("sandton", -26.1076, 28.0567),
    entry("midrand", -25.9992, 28.1262),
    entry("centurion", -25.8640, 28.1858),
    entry("east london", -33.0292, 27.8546),
    entry("nelspruit", -25.4753, 30.9694),
    entry("polokwane", -23.8962, 29.4486),
];

/// Anchor for hashed fallback coordinates, between Midrand and Centurion
const FALLBACK_BASE_LATITUDE: f64 = -25.9278;
const FALLBACK_BASE_LONGITUDE: f64 = 28.1223;

/// Fixed-table resolver with a hashed fallback
#[derive(Debug, Clone, Copy)]
pub struct GazetteerResolver {
    entries: &'static [GazetteerEntry],
}

impl Default for GazetteerResolver {
    fn default() -> Self {
        Self::new(SOUTH_AFRICAN_CITIES)
    }
}

impl GazetteerResolver {
    #[must_use]
    pub fn new(entries: &'static [GazetteerEntry]) -> Self {
        Self { entries }
    }

    fn lookup(&self, normalized: &str) -> Option<(Coordinate, ResolutionMethod)> {
        if let Some(exact) = self.entries.iter().find(|e| e.name == normalized) {
            return Some((exact.coordinate, ResolutionMethod::Exact));
        }

        self.entries
            .iter()
            .find(|e| normalized.contains(e.name))
            .map(|e| (e.coordinate, ResolutionMethod::Partial))
    }

    /// Derive a stable coordinate from the raw query text
    ///
    /// The longitude hashes the UTF-16 units in reverse, so surrogate pairs
    /// are split rather than kept whole.
    fn hashed_coordinate(raw: &str) -> Coordinate {
        let units: Vec<u16> = raw.encode_utf16().collect();
        Coordinate::fixed(
            FALLBACK_BASE_LATITUDE + hash_offset(units.iter().copied()),
            FALLBACK_BASE_LONGITUDE + hash_offset(units.iter().rev().copied()),
        )
    }
}

impl LocationResolver for GazetteerResolver {
    fn resolve(&self, query: &LocationQuery) -> ResolvedLocation {
        debug!("Resolving location query: {:?}", query.as_str());

        let (coordinate, method) = self
            .lookup(&query.normalized())
            .unwrap_or_else(|| (Self::hashed_coordinate(query.as_str()), ResolutionMethod::HashedFallback));

        debug!(
            "Resolved {:?} via {:?} at ({})",
            query.as_str(),
            method,
            coordinate.format_coordinates()
        );

        ResolvedLocation {
            query: query.clone(),
            coordinate,
            method,
        }
    }
}

/// 32-bit rolling string hash (`hash = c + (hash << 5) - hash`) over UTF-16
/// code units, reduced to a degree offset in `[0, 0.2)`.
fn hash_offset(units: impl Iterator<Item = u16>) -> f64 {
    let hash = units.fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add((hash << 5).wrapping_sub(hash))
    });
    f64::from(hash.rem_euclid(100)) / 500.0
}
