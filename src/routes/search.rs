use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::pipeline::{search, SearchOutcome};
use crate::models::{CatalogState, ErrorResponse, HealthResponse, SearchRequest, SearchResponse};
use crate::services::{CatalogCache, CatalogClient};

/// Guiding copy for searches submitted before subject and grade are chosen.
const MISSING_FILTERS_MESSAGE: &str = "Choose a subject and grade to search for tutors";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub cache: Arc<CatalogCache>,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/tutors/search", web::post().to(search_tutors))
        .route("/catalog/refresh", web::post().to(refresh_catalog));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let upstream_healthy = state.catalog.health_check().await.unwrap_or(false);

    let status = if upstream_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Tutor search endpoint
///
/// POST /api/v1/tutors/search
///
/// Request body:
/// ```json
/// {
///   "subject": "math",
///   "grade": "grade-10",
///   "language": "arabic",
///   "educationSystem": "national",
///   "governate": "Cairo",
///   "district": "Nasr City",
///   "minRating": 4.0,
///   "minPrice": 100,
///   "maxPrice": 300,
///   "latitude": 30.0444,
///   "longitude": 31.2357,
///   "order": "nearest_first"
/// }
/// ```
async fn search_tutors(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let criteria = req.criteria();
    let searcher = req.searcher_position();

    tracing::info!(
        "Searching tutors: subject={:?}, grade={:?}, order={:?}",
        criteria.subject,
        criteria.grade,
        req.order
    );

    let outcome = match state.cache.snapshot(&state.catalog).await {
        Ok(tutors) => search(
            CatalogState::Ready(tutors.as_slice()),
            &criteria,
            searcher,
            req.order,
        ),
        Err(e) => {
            let message = e.to_string();
            search(CatalogState::Failed(&message), &criteria, searcher, req.order)
        }
    };

    match outcome {
        SearchOutcome::Filtered(matches) => {
            tracing::info!("Returning {} tutors", matches.len());
            let total = matches.len();
            HttpResponse::Ok().json(SearchResponse::Ok { matches, total })
        }
        SearchOutcome::MissingRequiredFilters => {
            HttpResponse::Ok().json(SearchResponse::MissingRequiredFilters {
                message: MISSING_FILTERS_MESSAGE.to_string(),
            })
        }
        SearchOutcome::TransportError(message) => {
            tracing::error!("Catalog fetch failed: {}", message);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Catalog unavailable".to_string(),
                message,
                status_code: 502,
            })
        }
        // snapshot() always resolves, so this handler never produces Loading
        SearchOutcome::Loading => HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Catalog loading".to_string(),
            message: "Tutor catalog is not available yet, retry shortly".to_string(),
            status_code: 503,
        }),
    }
}

/// Drop the cached catalog snapshot
///
/// POST /api/v1/catalog/refresh
///
/// The next search after this call fetches a fresh catalog. Used by the
/// marketplace admin panel after approving or suspending tutors.
async fn refresh_catalog(state: web::Data<AppState>) -> impl Responder {
    state.cache.invalidate().await;
    tracing::info!("Catalog snapshot invalidated by refresh request");

    HttpResponse::Ok().json(serde_json::json!({ "invalidated": true }))
}
