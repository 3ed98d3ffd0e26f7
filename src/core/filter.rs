use crate::models::{Offering, SearchCriteria, Tutor};

/// True when a text criterion carries no selection.
///
/// Upstream search forms submit `"none"` as the placeholder option and
/// sometimes an empty string, so all three spellings of "no filter" have
/// to collapse to the same thing.
pub fn is_unset(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.is_empty() || v == "none",
    }
}

/// True when both required criteria (subject and grade) carry a selection.
pub fn required_filters_present(criteria: &SearchCriteria) -> bool {
    !is_unset(criteria.subject.as_deref()) && !is_unset(criteria.grade.as_deref())
}

/// Optional text criterion: unset passes everything, set requires equality.
fn matches_or_unset(criterion: Option<&str>, value: &str) -> bool {
    match criterion {
        Some(c) if !is_unset(Some(c)) => c == value,
        _ => true,
    }
}

/// Check a single offering against the search criteria
///
/// Subject and grade are exact-match requirements. Language and sector
/// only constrain when set. A positive rating floor excludes unrated
/// offerings, and a price range excludes unpriced ones.
pub fn offering_matches(offering: &Offering, criteria: &SearchCriteria) -> bool {
    if criteria.subject.as_deref() != Some(offering.subject.as_str()) {
        return false;
    }
    if criteria.grade.as_deref() != Some(offering.grade.as_str()) {
        return false;
    }

    if !matches_or_unset(criteria.language.as_deref(), &offering.language) {
        return false;
    }
    if !matches_or_unset(criteria.sector.as_deref(), &offering.sector) {
        return false;
    }

    if let Some(threshold) = criteria.min_rating {
        if threshold > 0.0 && offering.rating_or_zero() < threshold {
            return false;
        }
    }

    if let Some(range) = &criteria.price_range {
        match offering.group_price {
            Some(price) if range.contains(price) => {}
            _ => return false,
        }
    }

    true
}

/// Check tutor-level location filters (governate, then district)
///
/// A tutor without a recorded governate or district fails the
/// corresponding filter when it is set.
pub fn matches_region(tutor: &Tutor, criteria: &SearchCriteria) -> bool {
    if !is_unset(criteria.governate.as_deref()) {
        match &tutor.governate {
            Some(g) if criteria.governate.as_deref() == Some(g.as_str()) => {}
            _ => return false,
        }
    }
    if !is_unset(criteria.district.as_deref()) {
        match &tutor.district {
            Some(d) if criteria.district.as_deref() == Some(d.as_str()) => {}
            _ => return false,
        }
    }
    true
}

/// Find the first offering of a tutor that satisfies the criteria
///
/// Region filters gate the tutor as a whole before any offering is
/// examined. Offerings are scanned in stored order and the first match
/// wins, so the returned offering is deterministic for a given record.
pub fn select_offering<'a>(tutor: &'a Tutor, criteria: &SearchCriteria) -> Option<&'a Offering> {
    if !matches_region(tutor, criteria) {
        return None;
    }
    tutor
        .offerings
        .iter()
        .find(|offering| offering_matches(offering, criteria))
}
