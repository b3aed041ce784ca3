use std::sync::Arc;

use buzzlist::{BuzzError, Buzzlist, CompanyName, HistoryWindow, TickerSymbol};
use buzzlist_mock::MockConnector;

use crate::helpers::{StubConnector, ymd};

#[tokio::test]
async fn selected_entry_history_runs_from_selection_start() {
    let buzz = Buzzlist::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let wl = buzz.watchlist().await.unwrap();
    let selection = wl
        .select(&CompanyName::from("Tata Motors"))
        .expect("in watchlist");
    assert_eq!(selection.ticker, TickerSymbol::from("TATAMOTORS.NS"));

    let series = buzz
        .selection_history(&selection, ymd(2024, 6, 28))
        .await
        .unwrap();
    let summary = series.summary().expect("non-empty");
    assert_eq!(summary.first, ymd(2015, 1, 1));
    assert_eq!(summary.last, ymd(2024, 6, 28));
}

#[tokio::test]
async fn selection_window_is_passed_to_the_provider() {
    let stub = StubConnector::builder()
        .history_fn(|s, w| {
            assert_eq!(w, HistoryWindow::new(ymd(2018, 3, 1), ymd(2019, 3, 1)).unwrap());
            Ok(buzzlist_mock::series_with(s, w, 3))
        })
        .build();
    let buzz = Buzzlist::builder()
        .with_connector(stub)
        .selection_start(ymd(2018, 3, 1))
        .build()
        .unwrap();
    let wl: buzzlist::Watchlist = [(CompanyName::from("Acme"), TickerSymbol::from("ACM"))]
        .into_iter()
        .collect();
    let selection = wl.select(&CompanyName::from("Acme")).unwrap();

    let series = buzz
        .selection_history(&selection, ymd(2019, 3, 1))
        .await
        .unwrap();
    assert_eq!(series.len(), 3);
}

#[tokio::test]
async fn end_before_selection_start_is_invalid() {
    let stub = StubConnector::builder().history_len(3).build();
    let buzz = Buzzlist::builder()
        .with_connector(stub.clone())
        .build()
        .unwrap();
    let wl: buzzlist::Watchlist = [(CompanyName::from("Acme"), TickerSymbol::from("ACM"))]
        .into_iter()
        .collect();
    let selection = wl.select(&CompanyName::from("Acme")).unwrap();

    let err = buzz
        .selection_history(&selection, ymd(2014, 12, 31))
        .await
        .unwrap_err();
    assert!(matches!(err, BuzzError::InvalidArg(_)));
    assert_eq!(stub.history_calls(), 0);
}

#[tokio::test]
async fn unknown_symbol_history_is_not_found() {
    let buzz = Buzzlist::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let err = buzz
        .history(&TickerSymbol::from("NOPE.NS"), HistoryWindow::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BuzzError::NotFound { .. }));
}
