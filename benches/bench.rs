// Criterion benchmarks for the Dars tutor search pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dars_search::core::distance::haversine_km;
use dars_search::core::filter::select_offering;
use dars_search::core::pipeline::search;
use dars_search::models::{
    CatalogState, GeoPoint, Offering, ResultOrder, SearchCriteria, Tutor,
};

const SUBJECTS: [&str; 4] = ["math", "physics", "chemistry", "arabic"];
const GRADES: [&str; 3] = ["grade-9", "grade-10", "grade-11"];

fn create_tutor(id: usize, lat: f64, lon: f64) -> Tutor {
    let offerings = (0..3)
        .map(|n| Offering {
            subject: SUBJECTS[(id + n) % SUBJECTS.len()].to_string(),
            grade: GRADES[(id + n) % GRADES.len()].to_string(),
            sector: "national".to_string(),
            language: if id % 4 == 0 { "english" } else { "arabic" }.to_string(),
            rating: Some(3.0 + (id % 20) as f64 / 10.0),
            group_price: Some(100.0 + (id % 30) as f64 * 10.0),
        })
        .collect();

    Tutor {
        tutor_id: id.to_string(),
        name: format!("Tutor {}", id),
        latitude: Some(lat),
        longitude: Some(lon),
        governate: Some("Cairo".to_string()),
        district: None,
        offerings,
    }
}

fn create_catalog(count: usize) -> Vec<Tutor> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lon_offset = (i as f64 * 0.001) % 0.5;
            create_tutor(i, 30.0444 + lat_offset, 31.2357 + lon_offset)
        })
        .collect()
}

fn create_criteria() -> SearchCriteria {
    SearchCriteria {
        subject: Some("math".to_string()),
        grade: Some("grade-10".to_string()),
        ..Default::default()
    }
}

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_km", |b| {
        b.iter(|| {
            haversine_km(
                black_box(GeoPoint::new(30.0444, 31.2357)),
                black_box(GeoPoint::new(31.2001, 29.9187)),
            )
        });
    });
}

fn bench_select_offering(c: &mut Criterion) {
    let tutor = create_tutor(1, 30.0444, 31.2357);
    let criteria = create_criteria();

    c.bench_function("select_offering", |b| {
        b.iter(|| select_offering(black_box(&tutor), black_box(&criteria)));
    });
}

fn bench_search_pipeline(c: &mut Criterion) {
    let criteria = create_criteria();
    let searcher = Some(GeoPoint::new(30.0444, 31.2357));

    let mut group = c.benchmark_group("search");

    for tutor_count in [10, 50, 100, 500, 1000].iter() {
        let tutors = create_catalog(*tutor_count);

        group.bench_with_input(
            BenchmarkId::new("catalog_order", tutor_count),
            tutor_count,
            |b, _| {
                b.iter(|| {
                    search(
                        black_box(CatalogState::Ready(&tutors)),
                        black_box(&criteria),
                        black_box(searcher),
                        ResultOrder::CatalogOrder,
                    )
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_first", tutor_count),
            tutor_count,
            |b, _| {
                b.iter(|| {
                    search(
                        black_box(CatalogState::Ready(&tutors)),
                        black_box(&criteria),
                        black_box(searcher),
                        ResultOrder::NearestFirst,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine,
    bench_select_offering,
    bench_search_pipeline
);

criterion_main!(benches);
