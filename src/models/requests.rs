use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{GeoPoint, PriceRange, ResultOrder, SearchCriteria};

/// Body of a tutor search call.
///
/// Filter fields mirror the search form one-to-one and are all optional at
/// the wire level; whether subject and grade actually carry a selection is
/// the pipeline's call, not a validation error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, alias = "educationSystem", alias = "education_system")]
    pub sector: Option<String>,
    #[serde(default)]
    pub governate: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default, rename = "minRating", alias = "min_rating")]
    pub min_rating: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, rename = "minPrice", alias = "min_price")]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, rename = "maxPrice", alias = "max_price")]
    pub max_price: Option<f64>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub order: ResultOrder,
}

impl SearchRequest {
    /// Collapse the wire fields into pipeline criteria.
    ///
    /// A price range exists as soon as either bound is given; the absent
    /// bound is open (0 below, unbounded above).
    pub fn criteria(&self) -> SearchCriteria {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => Some(PriceRange::new(
                min.unwrap_or(0.0),
                max.unwrap_or(f64::INFINITY),
            )),
        };

        SearchCriteria {
            subject: self.subject.clone(),
            grade: self.grade.clone(),
            language: self.language.clone(),
            sector: self.sector.clone(),
            governate: self.governate.clone(),
            district: self.district.clone(),
            min_rating: self.min_rating,
            price_range,
        }
    }

    /// Searcher position, only when both components were sent.
    pub fn searcher_position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}
