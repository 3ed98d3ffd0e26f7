use serde::{Deserialize, Serialize};

use crate::models::domain::TutorMatch;

/// Body of a successful search call.
///
/// Tagged on `status` so clients branch on one field: `ok` carries the
/// match list (possibly empty), `missing_required_filters` carries the
/// guiding message instead. Transport failures do not use this shape;
/// they come back as an [`ErrorResponse`] with a 5xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    Ok {
        matches: Vec<TutorMatch>,
        total: usize,
    },
    MissingRequiredFilters {
        message: String,
    },
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
