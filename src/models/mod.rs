// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CatalogState, GeoPoint, Offering, PriceRange, ResultOrder, SearchCriteria, Tutor, TutorMatch,
};
pub use requests::SearchRequest;
pub use responses::{ErrorResponse, HealthResponse, SearchResponse};
