//! buzzlist-yahoo
//!
//! Public connector that implements `BuzzConnector` on top of the Yahoo Finance
//! quote-search and chart endpoints. Exposes search (name to ticker) and
//! daily history; article discovery is left to news connectors.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
/// Endpoint and transport configuration.
pub mod config;
/// Payload decoding.
pub mod wire;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YahooChart, YahooSearch};
use async_trait::async_trait;
use buzzlist_core::{
    BuzzError, HistoricalSeries, HistoryWindow, SearchRequest, SearchResponse, TickerSymbol,
    connector::{BuzzConnector, ConnectorKey, HistoryProvider, SearchProvider},
};

pub use builder::YahooConnectorBuilder;
pub use config::YahooConfig;

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type SearchAdapter = Arc<dyn YahooSearch>;
#[cfg(not(feature = "test-adapters"))]
type SearchAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type ChartAdapter = Arc<dyn YahooChart>;
#[cfg(not(feature = "test-adapters"))]
type ChartAdapter = AdapterArc;

/// Public connector type. Production users will construct with `YahooConnector::new_default()`.
pub struct YahooConnector {
    search: SearchAdapter,
    chart: ChartAdapter,
}

impl YahooConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("buzzlist-yahoo");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: BuzzError, what: &str) -> BuzzError {
        match e {
            BuzzError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    BuzzError::not_found(what.to_string())
                } else {
                    BuzzError::connector("buzzlist-yahoo", msg)
                }
            }
            other => other,
        }
    }

    /// Build with a fresh HTTP client and the default endpoints.
    #[must_use]
    pub fn new_default() -> Self {
        let a = RealAdapter::new_default();
        Self::from_adapter(&a)
    }

    /// Build against custom endpoints or transport settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_config(cfg: YahooConfig) -> Result<Self, BuzzError> {
        let a = RealAdapter::new(cfg)?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// The client's own user agent and timeout apply; `cfg` only supplies endpoints.
    #[must_use]
    pub fn with_reqwest_client(http: reqwest::Client, cfg: YahooConfig) -> Self {
        let a = RealAdapter::with_client(http, cfg);
        Self::from_adapter(&a)
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            search: adapter.clone_arc_search(),
            chart: adapter.clone_arc_chart(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            search: Arc::clone(&shared),
            chart: shared,
        }
    }
}

#[async_trait]
impl SearchProvider for YahooConnector {
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
        self.search
            .search(req)
            .await
            .map_err(|e| match e {
                BuzzError::Connector { msg, .. } => BuzzError::connector("buzzlist-yahoo", msg),
                other => other,
            })
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    async fn history(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError> {
        if !symbol.is_resolved() {
            return Err(BuzzError::InvalidArg("history requires a ticker".into()));
        }
        self.chart
            .daily(symbol, window)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))
    }
}

impl BuzzConnector for YahooConnector {
    fn name(&self) -> &'static str {
        "buzzlist-yahoo"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}
