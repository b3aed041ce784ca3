use std::time::Duration;

use buzzlist::{Buzzlist, HistoryWindow, SearchResponse, TickerSymbol};
use buzzlist_mock::{MockBehavior, series_with};
use proptest::prelude::*;

use crate::helpers::{ENOUGH, TOO_FEW, hit, scripted};

const NAMES: &[&str] = &["Alpha", "Bravo", "Alpha", "Charlie", "Delta", "Bravo", "Echo"];

// Later names answer faster, so completion order is the reverse of extraction order.
async fn build(concurrency: usize) -> Buzzlist {
    let (conn, ctrl) = scripted(NAMES).await;
    let w = HistoryWindow::default();
    for (i, name) in ["Alpha", "Bravo", "Charlie", "Delta", "Echo"].iter().enumerate() {
        let symbol = format!("{}.NS", name.to_ascii_uppercase());
        let delay = Duration::from_millis(5 * (5 - i as u64));
        ctrl.set_search_behavior(
            name,
            MockBehavior::Delayed(
                delay,
                SearchResponse {
                    hits: vec![hit(&symbol)],
                },
            ),
        )
        .await;
        let sym = TickerSymbol::from(symbol.as_str());
        let n = if *name == "Delta" { TOO_FEW } else { ENOUGH };
        ctrl.set_history_behavior(&sym, MockBehavior::Delayed(delay, series_with(&sym, w, n)))
            .await;
    }
    Buzzlist::builder()
        .with_connector(conn)
        .concurrency(concurrency)
        .build()
        .unwrap()
}

#[tokio::test]
async fn parallel_run_matches_sequential_run() {
    let sequential = build(1).await.watchlist_report().await.unwrap();
    let parallel = build(4).await.watchlist_report().await.unwrap();

    assert_eq!(parallel.watchlist, sequential.watchlist);
    assert_eq!(parallel.exclusions, sequential.exclusions);
    let order: Vec<&str> = parallel.watchlist.names().map(|n| n.as_str()).collect();
    assert_eq!(order, vec!["Alpha", "Bravo", "Charlie", "Echo"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn any_concurrency_yields_the_sequential_watchlist(concurrency in 1usize..=8) {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_time()
            .build()
            .unwrap();
        let (expected, got) = rt.block_on(async {
            let expected = build(1).await.watchlist().await.unwrap();
            let got = build(concurrency).await.watchlist().await.unwrap();
            (expected, got)
        });
        prop_assert_eq!(expected, got);
    }
}
