use buzzlist::{BuzzError, Buzzlist, CompanyName};
use buzzlist_mock::{MockBehavior, MockConnector};

use crate::helpers::{StubConnector, article, scripted};

#[tokio::test]
async fn candidates_come_back_in_document_order_with_duplicates() {
    let buzz = Buzzlist::builder()
        .with_connector(std::sync::Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let (link, names) = buzz.candidates().await.unwrap();
    assert!(link.title.starts_with("Buzzing Stocks"));
    assert_eq!(names.len(), 6);
    assert_eq!(names[0], names[5]);
    assert_eq!(names[2], CompanyName::from("Larsen  Toubro"));
}

#[tokio::test]
async fn missing_article_is_source_unavailable() {
    let (conn, ctrl) = scripted(&["Acme"]).await;
    ctrl.set_article_behavior(MockBehavior::Fail(BuzzError::not_found(
        "article link matching ^Buzzing Stocks",
    )))
    .await;
    let buzz = Buzzlist::builder().with_connector(conn).build().unwrap();

    let err = buzz.watchlist().await.unwrap_err();
    match err {
        BuzzError::SourceUnavailable { stage, cause } => {
            assert_eq!(stage, "locate-article");
            assert!(matches!(*cause, BuzzError::NotFound { .. }));
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
    assert_eq!(ctrl.search_calls("Acme").await, 0);
}

#[tokio::test]
async fn article_fetch_failure_is_source_unavailable() {
    let source = StubConnector::builder()
        .article_ok(article())
        .names_err(BuzzError::fetch("https://news.test/buzzing-stocks.html", "status 500"))
        .build();
    let buzz = Buzzlist::builder().with_connector(source).build().unwrap();

    let err = buzz.watchlist_report().await.unwrap_err();
    let BuzzError::SourceUnavailable { stage, cause } = err else {
        panic!("expected SourceUnavailable, got {err:?}");
    };
    assert_eq!(stage, "extract-names");
    assert!(cause.is_fetch());
}

#[tokio::test]
async fn article_without_names_is_an_empty_watchlist() {
    let (conn, _ctrl) = scripted(&[]).await;
    let buzz = Buzzlist::builder().with_connector(conn).build().unwrap();
    let report = buzz.watchlist_report().await.unwrap();
    assert!(report.names.is_empty());
    assert!(report.watchlist.is_empty());
    assert!(report.exclusions.is_empty());
}

#[tokio::test]
async fn source_falls_back_to_next_connector() {
    let broken = StubConnector::builder()
        .name("broken")
        .article_err(BuzzError::fetch("https://down.test", "connection refused"))
        .build();
    let (conn, _ctrl) = scripted(&["Acme"]).await;
    let buzz = Buzzlist::builder()
        .with_connector(broken)
        .with_connector(conn)
        .build()
        .unwrap();
    let link = buzz.locate_article().await.unwrap();
    assert_eq!(link, article());
}
