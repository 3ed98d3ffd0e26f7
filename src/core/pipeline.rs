use crate::core::distance::{distance_km, format_distance};
use crate::core::filter::{required_filters_present, select_offering};
use crate::models::{CatalogState, GeoPoint, ResultOrder, SearchCriteria, Tutor, TutorMatch};

/// Terminal state of one search invocation.
///
/// The four variants require different corrective action from the caller,
/// so they are distinct values rather than an error type: a transport
/// failure is retried upstream, missing required filters need a guiding
/// message, and an empty `Filtered` list means "relax your filters". None
/// of them is a panic-worthy condition.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The catalog has not arrived yet; nothing was filtered.
    Loading,
    /// The catalog fetch failed; carries the upstream message verbatim.
    TransportError(String),
    /// Subject or grade is unset; nothing was filtered.
    MissingRequiredFilters,
    /// Eligible tutors, one entry per tutor with a matching offering.
    /// An empty list is a valid "no tutors found" result.
    Filtered(Vec<TutorMatch>),
}

/// Run one search over the catalog.
///
/// Outcomes are evaluated in a fixed order, first match wins: a catalog
/// that is still loading or failed short-circuits before the required
/// filters are even looked at, and the required-filter gate short-circuits
/// before any tutor is examined.
///
/// The call is pure: inputs are borrowed, the result is freshly allocated,
/// and two calls with identical inputs produce identical output lists in
/// identical order.
pub fn search(
    catalog: CatalogState<'_>,
    criteria: &SearchCriteria,
    searcher: Option<GeoPoint>,
    order: ResultOrder,
) -> SearchOutcome {
    let tutors = match catalog {
        CatalogState::Loading => return SearchOutcome::Loading,
        CatalogState::Failed(message) => {
            return SearchOutcome::TransportError(message.to_string())
        }
        CatalogState::Ready(tutors) => tutors,
    };

    if !required_filters_present(criteria) {
        return SearchOutcome::MissingRequiredFilters;
    }

    let mut matches: Vec<TutorMatch> = tutors
        .iter()
        .filter_map(|tutor| build_match(tutor, criteria, searcher))
        .collect();

    if order == ResultOrder::NearestFirst {
        sort_nearest_first(&mut matches);
    }

    SearchOutcome::Filtered(matches)
}

/// Build the result entry for one tutor, or `None` if no offering matches.
///
/// An unknown position on either side leaves the distance fields empty
/// instead of failing the entry.
fn build_match(
    tutor: &Tutor,
    criteria: &SearchCriteria,
    searcher: Option<GeoPoint>,
) -> Option<TutorMatch> {
    let offering = select_offering(tutor, criteria)?;
    let distance = distance_km(searcher, tutor.position()).ok();

    Some(TutorMatch {
        tutor_id: tutor.tutor_id.clone(),
        name: tutor.name.clone(),
        governate: tutor.governate.clone(),
        district: tutor.district.clone(),
        position: tutor.position(),
        offering: offering.clone(),
        distance_km: distance,
        distance_display: distance.map(format_distance),
    })
}

/// Ascending distance; entries without a known distance sink to the end.
///
/// The sort is stable, so tutors at equal distance (and all the unranked
/// ones) keep their catalog order.
fn sort_nearest_first(matches: &mut [TutorMatch]) {
    matches.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(da), Some(db)) => da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Offering;

    fn offering(subject: &str, grade: &str) -> Offering {
        Offering {
            subject: subject.to_string(),
            grade: grade.to_string(),
            sector: "national".to_string(),
            language: "arabic".to_string(),
            rating: Some(4.5),
            group_price: Some(300.0),
        }
    }

    fn tutor(id: &str, lat: Option<f64>, lon: Option<f64>) -> Tutor {
        Tutor {
            tutor_id: id.to_string(),
            name: format!("Tutor {}", id),
            latitude: lat,
            longitude: lon,
            governate: None,
            district: None,
            offerings: vec![offering("math", "grade-10")],
        }
    }

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            subject: Some("math".to_string()),
            grade: Some("grade-10".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_short_circuits() {
        let outcome = search(
            CatalogState::Loading,
            &SearchCriteria::default(),
            None,
            ResultOrder::CatalogOrder,
        );
        assert_eq!(outcome, SearchOutcome::Loading);
    }

    #[test]
    fn test_failed_catalog_beats_missing_filters() {
        // Both conditions hold; transport error wins.
        let outcome = search(
            CatalogState::Failed("upstream timed out"),
            &SearchCriteria::default(),
            None,
            ResultOrder::CatalogOrder,
        );
        assert_eq!(
            outcome,
            SearchOutcome::TransportError("upstream timed out".to_string())
        );
    }

    #[test]
    fn test_missing_filters_gate() {
        let tutors = vec![tutor("a", None, None)];
        let outcome = search(
            CatalogState::Ready(&tutors),
            &SearchCriteria::default(),
            None,
            ResultOrder::CatalogOrder,
        );
        assert_eq!(outcome, SearchOutcome::MissingRequiredFilters);
    }

    #[test]
    fn test_empty_match_list_is_filtered_not_missing() {
        let tutors = vec![tutor("a", None, None)];
        let mut c = criteria();
        c.grade = Some("grade-11".to_string());

        let outcome = search(
            CatalogState::Ready(&tutors),
            &c,
            None,
            ResultOrder::CatalogOrder,
        );
        assert_eq!(outcome, SearchOutcome::Filtered(vec![]));
    }

    #[test]
    fn test_unknown_positions_leave_distance_empty() {
        let tutors = vec![tutor("a", Some(30.0), Some(31.0)), tutor("b", None, None)];
        let outcome = search(
            CatalogState::Ready(&tutors),
            &criteria(),
            None,
            ResultOrder::CatalogOrder,
        );

        match outcome {
            SearchOutcome::Filtered(matches) => {
                assert_eq!(matches.len(), 2);
                assert!(matches.iter().all(|m| m.distance_km.is_none()));
                assert!(matches.iter().all(|m| m.distance_display.is_none()));
            }
            other => panic!("expected Filtered, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_order_is_preserved_by_default() {
        let tutors = vec![
            tutor("far", Some(31.2001), Some(29.9187)),
            tutor("near", Some(30.05), Some(31.24)),
        ];
        let searcher = Some(GeoPoint::new(30.0444, 31.2357));

        let outcome = search(
            CatalogState::Ready(&tutors),
            &criteria(),
            searcher,
            ResultOrder::CatalogOrder,
        );
        match outcome {
            SearchOutcome::Filtered(matches) => {
                let ids: Vec<&str> = matches.iter().map(|m| m.tutor_id.as_str()).collect();
                assert_eq!(ids, vec!["far", "near"]);
            }
            other => panic!("expected Filtered, got {:?}", other),
        }
    }

    #[test]
    fn test_nearest_first_sorts_and_sinks_unranked() {
        let tutors = vec![
            tutor("far", Some(31.2001), Some(29.9187)),
            tutor("unranked", None, None),
            tutor("near", Some(30.05), Some(31.24)),
        ];
        let searcher = Some(GeoPoint::new(30.0444, 31.2357));

        let outcome = search(
            CatalogState::Ready(&tutors),
            &criteria(),
            searcher,
            ResultOrder::NearestFirst,
        );
        match outcome {
            SearchOutcome::Filtered(matches) => {
                let ids: Vec<&str> = matches.iter().map(|m| m.tutor_id.as_str()).collect();
                assert_eq!(ids, vec!["near", "far", "unranked"]);
            }
            other => panic!("expected Filtered, got {:?}", other),
        }
    }
}
