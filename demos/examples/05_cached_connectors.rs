use std::sync::Arc;
use std::time::Instant;

use buzzlist::{Buzzlist, CacheConfig, MemoCache};
use buzzlist_core::BuzzConnector;
use buzzlist_demos::common::use_mock;
use buzzlist_middleware::ConnectorBuilder;

/// Connectors whose search and history answers live as long as the process.
fn cached_connectors(cfg: &CacheConfig) -> Vec<Arc<dyn BuzzConnector>> {
    if use_mock() {
        println!("--- (Using Mock Connector for CI) ---");
        let raw: Arc<dyn BuzzConnector> = Arc::new(buzzlist_mock::MockConnector::new());
        vec![ConnectorBuilder::new(raw).with_cache(cfg).build()]
    } else {
        vec![
            buzzlist_moneycontrol::MoneycontrolConnector::new().build(),
            buzzlist_yahoo::YahooConnector::new().with_cache(cfg).build(),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The resolution memo is shared across runs as well.
    let buzz = cached_connectors(&CacheConfig::default())
        .into_iter()
        .fold(Buzzlist::builder(), |b, c| b.with_connector(c))
        .memo(MemoCache::shared())
        .build()?;

    for run in 1..=2 {
        let started = Instant::now();
        let watchlist = buzz.watchlist().await?;
        println!(
            "run {run}: {} entries in {:?}",
            watchlist.len(),
            started.elapsed()
        );
    }

    Ok(())
}
