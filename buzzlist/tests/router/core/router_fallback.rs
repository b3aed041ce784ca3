use std::time::Duration;

use buzzlist::{BuzzError, Buzzlist, CompanyName, TickerSymbol};

use crate::helpers::StubConnector;

#[tokio::test]
async fn first_registered_connector_wins() {
    let a = StubConnector::builder()
        .name("a")
        .resolves(&[("Acme", "ACM.A")])
        .build();
    let b = StubConnector::builder()
        .name("b")
        .resolves(&[("Acme", "ACM.B")])
        .build();
    let buzz = Buzzlist::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .build()
        .unwrap();

    let sym = buzz.resolve(&CompanyName::from("Acme")).await.unwrap();
    assert_eq!(sym, TickerSymbol::from("ACM.A"));
    assert_eq!(a.search_calls(), 1);
    assert_eq!(b.search_calls(), 0, "fallback must not be called on success");
}

#[tokio::test]
async fn failing_connector_falls_back_to_next() {
    let a = StubConnector::builder()
        .name("a")
        .search_fn(|_| Err(BuzzError::fetch("https://a.test", "status 503")))
        .build();
    let b = StubConnector::builder()
        .name("b")
        .resolves(&[("Acme", "ACM.B")])
        .build();
    let buzz = Buzzlist::builder()
        .with_connector(a.clone())
        .with_connector(b)
        .build()
        .unwrap();

    let sym = buzz.resolve(&CompanyName::from("Acme")).await.unwrap();
    assert_eq!(sym.as_str(), "ACM.B");
    assert_eq!(a.search_calls(), 1);
}

#[tokio::test]
async fn connectors_without_the_capability_are_skipped() {
    let source_only = StubConnector::builder().name("source").build();
    let search = StubConnector::builder()
        .name("search")
        .resolves(&[("Acme", "ACM")])
        .build();
    let buzz = Buzzlist::builder()
        .with_connector(source_only.clone())
        .with_connector(search)
        .build()
        .unwrap();

    let sym = buzz.resolve(&CompanyName::from("Acme")).await.unwrap();
    assert_eq!(sym.as_str(), "ACM");
    assert_eq!(source_only.search_calls(), 0);
}

#[tokio::test]
async fn no_capable_connector_is_unsupported() {
    let buzz = Buzzlist::builder()
        .with_connector(StubConnector::builder().build())
        .build()
        .unwrap();
    let err = buzz.resolve(&CompanyName::from("Acme")).await.unwrap_err();
    assert!(matches!(err, BuzzError::Unsupported { .. }), "got {err:?}");
}

#[tokio::test]
async fn slow_provider_times_out_and_falls_back() {
    let slow = StubConnector::builder()
        .name("slow")
        .delay_ms(500)
        .resolves(&[("Acme", "SLOW")])
        .build();
    let fast = StubConnector::builder()
        .name("fast")
        .resolves(&[("Acme", "FAST")])
        .build();
    let buzz = Buzzlist::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();

    let sym = buzz.resolve(&CompanyName::from("Acme")).await.unwrap();
    assert_eq!(sym.as_str(), "FAST");
}

#[tokio::test]
async fn all_failures_are_aggregated() {
    let a = StubConnector::builder()
        .name("a")
        .search_fn(|_| Err(BuzzError::fetch("https://a.test", "reset")))
        .build();
    let b = StubConnector::builder()
        .name("b")
        .delay_ms(500)
        .resolves(&[])
        .build();
    let buzz = Buzzlist::builder()
        .with_connector(a)
        .with_connector(b)
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();

    let err = buzz.resolve(&CompanyName::from("Acme")).await.unwrap_err();
    let BuzzError::AllProvidersFailed(errors) = err else {
        panic!("expected aggregate, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], BuzzError::Fetch { .. }));
    assert!(
        matches!(&errors[1], BuzzError::ProviderTimeout { connector, .. } if connector == "b")
    );
}
