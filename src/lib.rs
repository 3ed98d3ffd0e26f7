//! Dars Search - Tutor search service for the Dars tutoring marketplace
//!
//! This library provides the tutor search pipeline used by the Dars
//! marketplace: great-circle distance ranking, offering-level eligibility
//! filtering, and a typed four-way search outcome the frontend branches on.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::{distance_km, format_distance, haversine_km, MissingCoordinate},
    filter::{is_unset, offering_matches, required_filters_present, select_offering},
    pipeline::{search, SearchOutcome},
};
pub use crate::models::{
    CatalogState, GeoPoint, Offering, PriceRange, ResultOrder, SearchCriteria, SearchRequest,
    SearchResponse, Tutor, TutorMatch,
};
