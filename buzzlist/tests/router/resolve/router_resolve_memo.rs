use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use buzzlist::{BuzzError, Buzzlist, ExclusionReason, MemoCache, SearchResponse};
use buzzlist_mock::MockBehavior;

use crate::helpers::{ENOUGH, StubConnector, article, hit, listed, scripted};

#[tokio::test]
async fn repeated_name_is_searched_once_per_run() {
    let (conn, ctrl) = scripted(&["Acme", "Beta", "Acme"]).await;
    listed(&ctrl, "Acme", "ACM", ENOUGH).await;
    listed(&ctrl, "Beta", "BET", ENOUGH).await;
    let buzz = Buzzlist::builder().with_connector(conn).build().unwrap();

    buzz.watchlist().await.unwrap();
    assert_eq!(ctrl.search_calls("Acme").await, 1);
    assert_eq!(ctrl.search_calls("Beta").await, 1);
}

#[tokio::test]
async fn concurrent_lookups_of_one_name_share_a_request() {
    let (conn, ctrl) = scripted(&["Acme", "Acme", "Acme", "Acme"]).await;
    listed(&ctrl, "Acme", "ACM", ENOUGH).await;
    ctrl.set_search_behavior(
        "Acme",
        MockBehavior::Delayed(
            Duration::from_millis(40),
            SearchResponse {
                hits: vec![hit("ACM")],
            },
        ),
    )
    .await;
    let buzz = Buzzlist::builder()
        .with_connector(conn)
        .concurrency(4)
        .build()
        .unwrap();

    let wl = buzz.watchlist().await.unwrap();
    assert_eq!(wl.len(), 1);
    assert_eq!(ctrl.search_calls("Acme").await, 1);
}

#[tokio::test]
async fn memo_is_fresh_for_every_run_by_default() {
    let (conn, ctrl) = scripted(&["Acme"]).await;
    listed(&ctrl, "Acme", "ACM", ENOUGH).await;
    let buzz = Buzzlist::builder().with_connector(conn).build().unwrap();

    buzz.watchlist().await.unwrap();
    buzz.watchlist().await.unwrap();
    assert_eq!(ctrl.search_calls("Acme").await, 2);
}

#[tokio::test]
async fn injected_memo_spans_runs() {
    let (conn, ctrl) = scripted(&["Acme"]).await;
    listed(&ctrl, "Acme", "ACM", ENOUGH).await;
    let memo = MemoCache::shared();
    let buzz = Buzzlist::builder()
        .with_connector(conn)
        .memo(Arc::clone(&memo))
        .build()
        .unwrap();

    buzz.watchlist().await.unwrap();
    buzz.watchlist().await.unwrap();
    assert_eq!(ctrl.search_calls("Acme").await, 1);
}

#[tokio::test]
async fn disabling_memoization_searches_every_occurrence() {
    let (conn, ctrl) = scripted(&["Acme", "Acme"]).await;
    listed(&ctrl, "Acme", "ACM", ENOUGH).await;
    let buzz = Buzzlist::builder()
        .with_connector(conn)
        .memoize_resolution(false)
        .memo(MemoCache::shared())
        .build()
        .unwrap();

    buzz.watchlist().await.unwrap();
    assert_eq!(ctrl.search_calls("Acme").await, 2);
}

#[tokio::test]
async fn failed_resolution_is_retried_on_next_occurrence() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&attempts);
    let stub = StubConnector::builder()
        .article_ok(article())
        .names_ok(&["Acme", "Acme"])
        .search_fn(move |_| {
            if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(BuzzError::fetch("https://search.test", "status 503"))
            } else {
                Ok(SearchResponse {
                    hits: vec![hit("ACM")],
                })
            }
        })
        .history_len(ENOUGH)
        .build();
    let buzz = Buzzlist::builder()
        .with_connector(stub.clone())
        .build()
        .unwrap();

    let report = buzz.watchlist_report().await.unwrap();
    assert_eq!(stub.search_calls(), 2);
    assert_eq!(report.watchlist.len(), 1);
    assert_eq!(report.exclusions.len(), 1);
    assert_eq!(report.exclusions[0].index, 0);
    assert!(matches!(
        report.exclusions[0].reason,
        ExclusionReason::ResolveFailed(_)
    ));
}

#[tokio::test]
async fn unresolved_result_is_memoized() {
    let (conn, ctrl) = scripted(&["Nobody", "Nobody"]).await;
    ctrl.set_resolution("Nobody", "").await;
    let buzz = Buzzlist::builder().with_connector(conn).build().unwrap();

    let report = buzz.watchlist_report().await.unwrap();
    assert!(report.watchlist.is_empty());
    assert_eq!(report.exclusions.len(), 2);
    assert_eq!(ctrl.search_calls("Nobody").await, 1);
}
