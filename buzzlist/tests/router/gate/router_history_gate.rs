use std::time::Duration;

use buzzlist::{BuzzError, Buzzlist, HistoryCheck, HistoryWindow, TickerSymbol};
use buzzlist_mock::{MockBehavior, series_with};

use crate::helpers::{StubConnector, scripted, ymd};

#[tokio::test]
async fn fifty_observations_pass_and_forty_nine_do_not() {
    let (conn, ctrl) = scripted(&[]).await;
    let w = HistoryWindow::default();
    let pass = TickerSymbol::from("PASS.NS");
    let fail = TickerSymbol::from("FAIL.NS");
    ctrl.set_history_behavior(&pass, MockBehavior::Return(series_with(&pass, w, 50)))
        .await;
    ctrl.set_history_behavior(&fail, MockBehavior::Return(series_with(&fail, w, 49)))
        .await;
    let buzz = Buzzlist::builder().with_connector(conn).build().unwrap();

    assert_eq!(
        buzz.history_check(&pass).await,
        HistoryCheck::Sufficient { observations: 50 }
    );
    assert_eq!(
        buzz.history_check(&fail).await,
        HistoryCheck::Insufficient {
            observations: 49,
            required: 50
        }
    );
    assert!(buzz.has_sufficient_history(&pass).await);
    assert!(!buzz.has_sufficient_history(&fail).await);
}

#[tokio::test]
async fn only_in_window_observations_count() {
    // 60 days starting 2023-12-01: 31 fall inside the default window.
    let stub = StubConnector::builder()
        .history_fn(|s, _| {
            let w = HistoryWindow::new(ymd(2023, 12, 1), ymd(2024, 3, 1)).unwrap();
            Ok(series_with(s, w, 60))
        })
        .build();
    let buzz = Buzzlist::builder().with_connector(stub).build().unwrap();

    let check = buzz.history_check(&TickerSymbol::from("LATE.NS")).await;
    assert_eq!(
        check,
        HistoryCheck::Insufficient {
            observations: 31,
            required: 50
        }
    );
}

#[tokio::test]
async fn threshold_and_window_are_configurable() {
    let stub = StubConnector::builder().history_len(5).build();
    let buzz = Buzzlist::builder()
        .with_connector(stub)
        .min_observations(5)
        .history_window(HistoryWindow::new(ymd(2020, 1, 1), ymd(2020, 12, 31)).unwrap())
        .build()
        .unwrap();
    assert!(buzz.has_sufficient_history(&TickerSymbol::from("X")).await);
}

#[tokio::test]
async fn gate_never_errors() {
    let (conn, ctrl) = scripted(&[]).await;
    let broken = TickerSymbol::from("BROKEN");
    let hanging = TickerSymbol::from("HANG");
    ctrl.set_history_behavior(
        &broken,
        MockBehavior::Fail(BuzzError::fetch("https://chart.test", "status 500")),
    )
    .await;
    ctrl.set_history_behavior(&hanging, MockBehavior::Hang).await;
    let buzz = Buzzlist::builder()
        .with_connector(conn)
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();

    let check = buzz.history_check(&broken).await;
    assert!(matches!(check, HistoryCheck::LookupFailed { ref reason } if reason.is_fetch()));

    let check = buzz.history_check(&hanging).await;
    assert!(matches!(
        check,
        HistoryCheck::LookupFailed {
            reason: BuzzError::ProviderTimeout { .. }
        }
    ));

    // No behavior configured: the dynamic mock reports the capability unsupported.
    let check = buzz.history_check(&TickerSymbol::from("UNKNOWN")).await;
    assert!(!check.passed());
}

#[tokio::test]
async fn unresolved_symbol_is_not_looked_up() {
    let stub = StubConnector::builder().history_len(100).build();
    let buzz = Buzzlist::builder()
        .with_connector(stub.clone())
        .build()
        .unwrap();

    let check = buzz.history_check(&TickerSymbol::unresolved()).await;
    assert!(matches!(check, HistoryCheck::LookupFailed { .. }));
    assert_eq!(stub.history_calls(), 0);
}

#[tokio::test]
async fn gate_result_is_not_memoized() {
    let stub = StubConnector::builder().history_len(60).build();
    let buzz = Buzzlist::builder()
        .with_connector(stub.clone())
        .build()
        .unwrap();
    let sym = TickerSymbol::from("ACM");
    buzz.history_check(&sym).await;
    buzz.history_check(&sym).await;
    assert_eq!(stub.history_calls(), 2);
}
