use thiserror::Error;

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A distance was requested against a point that is unknown or unusable.
///
/// Carries which side was missing ("searcher" or "tutor"). Callers that only
/// need "distance unknown" semantics map this to `None`; it never crosses
/// the search pipeline boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing coordinate: {0} position is unknown")]
pub struct MissingCoordinate(pub &'static str);

/// Calculate the Haversine distance between two points in kilometers
///
/// Pure and deterministic: identical points yield exactly 0.0, and the
/// formula is symmetric in its arguments.
///
/// # Arguments
/// * `a` - First point in decimal degrees
/// * `b` - Second point in decimal degrees
///
/// # Returns
/// Great-circle distance in kilometers
#[inline]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two optional points.
///
/// Error policy for absent components: an absent point, or a point whose
/// latitude/longitude is not a finite number, yields [`MissingCoordinate`]
/// naming the offending side instead of letting a NaN leak into result
/// ordering.
pub fn distance_km(
    searcher: Option<GeoPoint>,
    tutor: Option<GeoPoint>,
) -> Result<f64, MissingCoordinate> {
    let a = searcher
        .filter(GeoPoint::is_finite)
        .ok_or(MissingCoordinate("searcher"))?;
    let b = tutor
        .filter(GeoPoint::is_finite)
        .ok_or(MissingCoordinate("tutor"))?;

    Ok(haversine_km(a, b))
}

/// Format a distance for result cards: meters below one kilometer,
/// kilometers to one decimal from there up ("850m", "12.3km").
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km", km)
    }
}
