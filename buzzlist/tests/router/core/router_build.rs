use buzzlist::{BuzzConfig, BuzzError, Buzzlist};

use crate::helpers::{StubConnector, ymd};

#[test]
fn build_requires_a_connector() {
    let err = Buzzlist::builder().build().err().expect("must fail");
    assert!(matches!(err, BuzzError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_concurrency_and_zero_quotes() {
    let c = StubConnector::builder().build();
    let err = Buzzlist::builder()
        .with_connector(c.clone())
        .concurrency(0)
        .build()
        .err()
        .expect("must fail");
    assert!(matches!(err, BuzzError::InvalidArg(_)));

    let err = Buzzlist::builder()
        .with_connector(c)
        .quotes_count(0)
        .build()
        .err()
        .expect("must fail");
    assert!(matches!(err, BuzzError::InvalidArg(_)));
}

#[test]
fn build_rejects_inverted_window_from_deserialized_config() {
    let mut json = serde_json::to_value(BuzzConfig::default()).unwrap();
    json["history_window"] = serde_json::json!({ "start": "2023-12-31", "end": "2010-01-01" });
    let cfg: BuzzConfig = serde_json::from_value(json).unwrap();

    let err = Buzzlist::builder()
        .with_connector(StubConnector::builder().build())
        .config(cfg)
        .build()
        .err()
        .expect("must fail");
    assert!(matches!(err, BuzzError::InvalidArg(_)));
}

#[test]
fn defaults_match_the_documented_pipeline() {
    let buzz = Buzzlist::builder()
        .with_connector(StubConnector::builder().build())
        .build()
        .unwrap();
    let cfg = buzz.config();
    assert_eq!(cfg.country, "India");
    assert_eq!(cfg.quotes_count, 1);
    assert_eq!(cfg.min_observations, 50);
    assert_eq!(cfg.history_window.start(), ymd(2010, 1, 1));
    assert_eq!(cfg.history_window.end(), ymd(2023, 12, 31));
    assert_eq!(cfg.selection_start, ymd(2015, 1, 1));
    assert_eq!(cfg.provider_timeout, std::time::Duration::from_secs(10));
    assert_eq!(cfg.concurrency, 1);
    assert!(cfg.memoize_resolution);
}
