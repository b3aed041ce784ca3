use std::sync::Arc;

use buzzlist::{Buzzlist, CompanyName, ExclusionReason, TickerSymbol};
use buzzlist_mock::MockConnector;

#[tokio::test]
async fn report_lists_every_dropped_occurrence() {
    let buzz = Buzzlist::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let report = buzz.watchlist_report().await.unwrap();

    assert_eq!(report.names.len(), 6);
    assert_eq!(report.watchlist.len(), 3);
    assert_eq!(report.exclusions.len(), 2);

    let newco = &report.exclusions[0];
    assert_eq!(newco.index, 3);
    assert_eq!(newco.company, CompanyName::from("Newco Listings"));
    assert_eq!(
        newco.reason,
        ExclusionReason::InsufficientHistory {
            ticker: TickerSymbol::from("NEWCO.NS"),
            observations: 10,
            required: 50,
        }
    );

    let unknown = &report.exclusions[1];
    assert_eq!(unknown.index, 4);
    assert_eq!(unknown.reason, ExclusionReason::Unresolved);
}

#[tokio::test]
async fn report_serializes_for_downstream_tools() {
    let buzz = Buzzlist::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let report = buzz.watchlist_report().await.unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["watchlist"][0]["company"], "Reliance Industries");
    assert_eq!(json["watchlist"][0]["ticker"], "RELIANCE.NS");
    assert_eq!(json["exclusions"][1]["reason"], "Unresolved");
}
