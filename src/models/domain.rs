use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components are real numbers (upstream documents occasionally
    /// carry nulls that deserialize into NaN by way of intermediaries).
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// One subject a tutor teaches: the (subject, grade, sector, language,
/// price, rating) tuple. A tutor may carry many of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub subject: String,
    pub grade: String,
    /// Education sector ("national", "languages", "azhar", ...). The older
    /// marketplace controllers call this field `educationSystem`.
    #[serde(default, alias = "educationSystem", alias = "education_system")]
    pub sector: String,
    #[serde(default)]
    pub language: String,
    /// 0 to 5; absent means the offering has never been rated.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Group-session price; absent means the tutor has not priced it yet.
    #[serde(rename = "groupPrice", alias = "group_price", default)]
    pub group_price: Option<f64>,
}

impl Offering {
    /// Unrated offerings count as rating 0, so any positive rating
    /// threshold excludes them.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Canonical tutor record as the search pipeline consumes it.
///
/// The catalog client normalizes the marketplace's duck-typed documents
/// (`subjects` vs `subjectProfiles`, `_id` vs `tutorId`) into this one shape
/// at the fetch boundary; nothing downstream re-normalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    #[serde(rename = "tutorId", alias = "_id", alias = "id")]
    pub tutor_id: String,
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub governate: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(
        rename = "subjects",
        alias = "subjectProfiles",
        alias = "subject_profiles",
        default
    )]
    pub offerings: Vec<Offering>,
}

impl Tutor {
    /// Both coordinates as one point, or `None` when either is missing.
    /// Tutors registered before the map feature have neither; a few legacy
    /// rows carry only one.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

/// Inclusive price bounds for group sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The active set of search filters supplied by the searcher.
///
/// Subject and grade are mandatory; the rest pass vacuously when unset.
/// `None`, the empty string, and the literal `"none"` (the search form's
/// placeholder option) all count as unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub language: Option<String>,
    pub sector: Option<String>,
    pub governate: Option<String>,
    pub district: Option<String>,
    pub min_rating: Option<f64>,
    pub price_range: Option<PriceRange>,
}

/// Catalog availability as handed to the pipeline.
///
/// The upstream fetch is asynchronous and externally owned, so the pipeline
/// only ever sees a status flag plus the fetched list. Borrowed, so a search
/// structurally cannot mutate its inputs.
#[derive(Debug, Clone, Copy)]
pub enum CatalogState<'a> {
    /// The tutor collection has not been fetched yet.
    Loading,
    /// The upstream fetch failed; the message is surfaced verbatim.
    Failed(&'a str),
    /// The collection is resident in memory.
    Ready(&'a [Tutor]),
}

/// Presentation order of the result list.
///
/// Results are never implicitly distance-sorted; the caller opts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// Catalog insertion order, post-filter.
    #[default]
    CatalogOrder,
    /// Ascending distance, stable; entries with unknown distance keep their
    /// relative order at the end.
    NearestFirst,
}

/// One entry of the ranked result list: the tutor, the offering selected to
/// represent it, and the distance from the searcher when both positions are
/// known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorMatch {
    #[serde(rename = "tutorId")]
    pub tutor_id: String,
    pub name: String,
    #[serde(default)]
    pub governate: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub position: Option<GeoPoint>,
    pub offering: Offering,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    /// Ready for result cards: meters below one kilometer, otherwise
    /// kilometers to one decimal.
    #[serde(rename = "distanceDisplay")]
    pub distance_display: Option<String>,
}
