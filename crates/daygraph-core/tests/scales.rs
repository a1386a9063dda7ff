// File: crates/daygraph-core/tests/scales.rs
// Purpose: Validate scale endpoint mapping, monotonicity, and degenerate domains.

use chrono::NaiveDate;
use daygraph_core::{extent, CountScale, DateScale, DatasetError, Record};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn rec(date: &str, article: u64, text: u64, code: u64, total: u64) -> Record {
    Record { date: d(date), article, text, code, total, todo: None }
}

#[test]
fn date_scale_maps_domain_onto_pixel_range() {
    let scale = DateScale::new((d("2024-01-01"), d("2024-01-31")), 40.0, 450.0);
    assert!((scale.to_px(d("2024-01-01")) - 40.0).abs() < 1e-3);
    assert!((scale.to_px(d("2024-01-31")) - 450.0).abs() < 1e-3);
    // midpoint of the domain lands on the midpoint of the range
    assert!((scale.to_px(d("2024-01-16")) - 245.0).abs() < 1e-3);
}

#[test]
fn date_scale_is_monotonic_and_clamped() {
    let scale = DateScale::new((d("2024-03-01"), d("2024-03-10")), 40.0, 450.0);
    let days = ["2024-03-01", "2024-03-02", "2024-03-05", "2024-03-09", "2024-03-10"];
    let px: Vec<f32> = days.iter().map(|s| scale.to_px(d(s))).collect();
    for pair in px.windows(2) {
        assert!(pair[0] <= pair[1], "expected non-decreasing pixels, got {pair:?}");
    }
    // out-of-domain dates clamp to the range edges
    assert_eq!(scale.to_px(d("2024-02-01")), 40.0);
    assert_eq!(scale.to_px(d("2024-04-01")), 450.0);
}

#[test]
fn count_scale_inverts_the_pixel_range() {
    let scale = CountScale::new((3, 9), 40.0, 260.0);
    assert!((scale.to_px(3.0) - 260.0).abs() < 1e-3, "min maps to the bottom edge");
    assert!((scale.to_px(9.0) - 40.0).abs() < 1e-3, "max maps to the top edge");
    // larger counts sit higher on screen
    let mut prev = scale.to_px(3.0);
    for v in [4.0, 5.0, 7.0, 9.0] {
        let px = scale.to_px(v);
        assert!(px < prev, "expected decreasing pixels, got {px} after {prev}");
        prev = px;
    }
}

#[test]
fn degenerate_domains_stay_finite() {
    // one-day date domain: everything lands on the left edge
    let xs = DateScale::new((d("2024-06-01"), d("2024-06-01")), 40.0, 450.0);
    assert_eq!(xs.to_px(d("2024-06-01")), 40.0);

    // flat count domain: the single value sits on the bottom edge
    let ys = CountScale::new((5, 5), 40.0, 260.0);
    let px = ys.to_px(5.0);
    assert!(px.is_finite());
    assert!((px - 260.0).abs() < 1e-3);
}

#[test]
fn extent_over_records() {
    let records = vec![
        rec("2024-01-01", 2, 1, 0, 3),
        rec("2024-01-03", 1, 1, 1, 3),
        rec("2024-01-07", 4, 2, 1, 7),
    ];
    let (lo, hi) = extent(&records, |r| r.total).unwrap();
    assert_eq!((lo, hi), (3, 7));
    let (first, last) = extent(&records, |r| r.date).unwrap();
    assert_eq!((first, last), (d("2024-01-01"), d("2024-01-07")));
}

#[test]
fn extent_of_nothing_is_an_error() {
    let err = extent(&[], |r: &Record| r.total).unwrap_err();
    assert!(matches!(err, DatasetError::Empty));
}
