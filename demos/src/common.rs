use std::sync::Arc;

use buzzlist::Buzzlist;
use buzzlist_core::{BuzzConnector, BuzzError};

/// True when demos should run against the offline fixture connector.
#[must_use]
pub fn use_mock() -> bool {
    std::env::var("BUZZLIST_DEMOS_USE_MOCK").is_ok()
}

/// Connectors for demos, in routing order.
///
/// Live runs register the news-site connector first and Yahoo second.
#[must_use]
pub fn get_connectors() -> Vec<Arc<dyn BuzzConnector>> {
    if use_mock() {
        println!("--- (Using Mock Connector for CI) ---");
        vec![Arc::new(buzzlist_mock::MockConnector::new())]
    } else {
        vec![
            buzzlist_moneycontrol::MoneycontrolConnector::new().build(),
            buzzlist_yahoo::YahooConnector::new().build(),
        ]
    }
}

/// Orchestrator over [`get_connectors`] with default settings.
///
/// # Errors
/// Returns `InvalidArg` if the builder rejects the configuration.
pub fn get_buzzlist() -> Result<Buzzlist, BuzzError> {
    get_connectors()
        .into_iter()
        .fold(Buzzlist::builder(), |b, c| b.with_connector(c))
        .build()
}
