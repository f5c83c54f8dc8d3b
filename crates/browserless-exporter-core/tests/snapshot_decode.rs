//! Upstream wire schema decode tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use browserless_exporter_core::{samples, FetchErrorKind, UpstreamSnapshot};

const FULL: &str = r#"{"successful":10,"error":1,"queued":2,"rejected":0,"unhealthy":0,"timedout":1,"totalTime":523.4,"meanTime":52.3,"maxTime":100.1,"minTime":10.0,"maxConcurrent":5}"#;

#[test]
fn decode_full_body() {
    let snap = UpstreamSnapshot::decode(FULL.as_bytes()).unwrap();
    assert_eq!(snap.successful, 10);
    assert_eq!(snap.error, 1);
    assert_eq!(snap.queued, 2);
    assert_eq!(snap.timedout, 1);
    assert_eq!(snap.total_time, 523.4);
    assert_eq!(snap.min_time, 10.0);
    assert_eq!(snap.max_concurrent, 5);
}

#[test]
fn full_body_maps_to_expected_samples() {
    let snap = UpstreamSnapshot::decode(FULL.as_bytes()).unwrap();
    let got: Vec<(&str, f64)> = samples(&snap).iter().map(|s| (s.desc.name, s.value)).collect();
    assert_eq!(
        got,
        vec![
            ("browserless_successful", 10.0),
            ("browserless_error", 1.0),
            ("browserless_queued", 2.0),
            ("browserless_rejected", 0.0),
            ("browserless_unhealthy", 0.0),
            ("browserless_timedout", 1.0),
            ("browserless_time_total", 523.4),
            ("browserless_time_mean", 52.3),
            ("browserless_time_max", 100.1),
            ("browserless_time_min", 10.0),
            ("browserless_concurrent_max", 5.0),
        ]
    );
}

#[test]
fn unknown_fields_ignored_missing_fields_zero() {
    let body = br#"{"successful":3,"cpu":0.4,"date":1700000000}"#;
    let snap = UpstreamSnapshot::decode(body).unwrap();
    assert_eq!(snap.successful, 3);
    assert_eq!(snap.error, 0);
    assert_eq!(snap.mean_time, 0.0);
}

#[test]
fn null_fields_decode_as_zero() {
    let body = br#"{"successful":4,"meanTime":null,"minTime":null,"error":null}"#;
    let snap = UpstreamSnapshot::decode(body).unwrap();
    assert_eq!(snap.successful, 4);
    assert_eq!(snap.error, 0);
    assert_eq!(snap.mean_time, 0.0);
    assert_eq!(snap.min_time, 0.0);
    assert_eq!(samples(&snap).len(), 11);
}

#[test]
fn large_counter_widens_exactly() {
    let snap = UpstreamSnapshot::decode(br#"{"successful":9007199254740991}"#).unwrap();
    assert_eq!(samples(&snap)[0].value, 9_007_199_254_740_991.0);
}

#[test]
fn malformed_json_is_decode_error() {
    let err = UpstreamSnapshot::decode(b"<html>502 Bad Gateway</html>").unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Decode);
}

#[test]
fn wrong_type_is_decode_error() {
    let err = UpstreamSnapshot::decode(br#"{"successful":"ten"}"#).unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Decode);

    let err = UpstreamSnapshot::decode(b"42").unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Decode);
}
