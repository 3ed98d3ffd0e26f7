// Core search pipeline exports
pub mod distance;
pub mod filter;
pub mod pipeline;

pub use distance::{distance_km, format_distance, haversine_km, MissingCoordinate};
pub use filter::{is_unset, offering_matches, required_filters_present, select_offering};
pub use pipeline::{search, SearchOutcome};
