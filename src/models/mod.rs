//! Data models for the quote engine
//!
//! This module contains the core domain models organized by concern:
//! - Location: coordinates, free-text queries and resolution results
//! - Service: the transport service catalogue
//! - Contract: monthly contract terms
//! - Quote: distance, time and fare results and the assembled quote

pub mod contract;
pub mod location;
pub mod quote;
pub mod service;

// Re-export all public types for convenient access
pub use contract::{ContractDuration, ContractTerms};
pub use location::{Coordinate, LocationQuery, ResolutionMethod, ResolvedLocation};
pub use quote::{DistanceResult, FareBreakdown, Quote, QuoteRequest, TimeEstimate};
pub use service::ServiceType;
