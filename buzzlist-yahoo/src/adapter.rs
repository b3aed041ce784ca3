#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveTime};

use buzzlist_core::{
    BuzzError, HistoricalSeries, HistoryWindow, SearchRequest, SearchResponse, TickerSymbol,
};

use crate::config::YahooConfig;
use crate::wire;

/// Quote-search abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YahooSearch: Send + Sync {
    /// Perform a text search and return the decoded hits.
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError>;
}

/// Daily chart abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YahooChart: Send + Sync {
    /// Fetch daily candles for `symbol` inside `window`.
    async fn daily(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError>;
}

/// Real adapter backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    cfg: YahooConfig,
}

impl RealAdapter {
    /// Build a client from the default configuration.
    ///
    /// # Panics
    /// Panics if building the underlying HTTP client fails, which is unexpected
    /// in normal environments (TLS backend unavailable).
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(YahooConfig::default()).expect("Failed to build reqwest client for Yahoo")
    }

    /// Build a client applying the user agent and timeout from `cfg`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the HTTP client cannot be constructed.
    pub fn new(cfg: YahooConfig) -> Result<Self, BuzzError> {
        let http = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| BuzzError::InvalidArg(format!("http client: {e}")))?;
        Ok(Self { http, cfg })
    }

    /// Wrap an existing `reqwest::Client`. Its own headers and timeout apply.
    #[must_use]
    pub const fn with_client(http: reqwest::Client, cfg: YahooConfig) -> Self {
        Self { http, cfg }
    }

    async fn get_text(
        &self,
        url: reqwest::Url,
        query: &[(&str, String)],
        missing: Option<String>,
    ) -> Result<String, BuzzError> {
        let label = url.to_string();
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| BuzzError::fetch(&label, e.to_string()))?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND
            && let Some(what) = missing
        {
            return Err(BuzzError::not_found(what));
        }
        if !status.is_success() {
            return Err(BuzzError::fetch(&label, format!("status {status}")));
        }
        resp.text()
            .await
            .map_err(|e| BuzzError::fetch(&label, e.to_string()))
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// `period1`/`period2` for a window; `period2` is exclusive so it is the day after `end`.
pub(crate) fn chart_period(window: HistoryWindow) -> (i64, i64) {
    let end = window
        .end()
        .checked_add_days(Days::new(1))
        .unwrap_or(window.end());
    (midnight_utc(window.start()), midnight_utc(end))
}

#[async_trait]
impl YahooSearch for RealAdapter {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "buzzlist_yahoo::search",
            skip(self, req),
            fields(query = %req.query(), country = ?req.country_filter()),
        )
    )]
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
        let url = reqwest::Url::parse(self.cfg.search_endpoint())
            .map_err(|e| BuzzError::InvalidArg(format!("search url: {e}")))?;
        let mut query = vec![
            ("q", req.query().to_string()),
            ("quotes_count", req.max_results().to_string()),
        ];
        if let Some(country) = req.country_filter() {
            query.push(("country", country.to_string()));
        }
        let body = self.get_text(url, &query, None).await?;
        let resp = wire::parse_search(&body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(hits = resp.hits.len(), "search decoded");
        Ok(resp)
    }
}

#[async_trait]
impl YahooChart for RealAdapter {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "buzzlist_yahoo::daily",
            skip(self),
            fields(symbol = %symbol),
        )
    )]
    async fn daily(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError> {
        let url = self.cfg.chart_endpoint(symbol.as_str())?;
        let (period1, period2) = chart_period(window);
        let query = [
            ("period1", period1.to_string()),
            ("period2", period2.to_string()),
            ("interval", "1d".to_string()),
        ];
        let body = self
            .get_text(url, &query, Some(format!("history for {symbol}")))
            .await?;
        wire::parse_chart(symbol, window, &body)
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YahooSearch {
    /// Test helper that builds a `YahooSearch` from a closure taking the request
    /// and returning a list of symbol strings, mapped to minimal hits.
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooSearch>
    where
        F: Send + Sync + 'static + Fn(&SearchRequest) -> Result<Vec<String>, BuzzError>,
    {
        struct FnSearch<F>(F);

        #[async_trait]
        impl<F> YahooSearch for FnSearch<F>
        where
            F: Send + Sync + 'static + Fn(&SearchRequest) -> Result<Vec<String>, BuzzError>,
        {
            async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
                let hits = (self.0)(req)?
                    .into_iter()
                    .map(|s| buzzlist_core::SearchHit {
                        symbol: TickerSymbol::new(s),
                        name: None,
                        exchange: None,
                        kind: None,
                    })
                    .collect();
                Ok(SearchResponse { hits })
            }
        }

        Arc::new(FnSearch(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YahooChart {
    /// Build a `YahooChart` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooChart>
    where
        F: Send
            + Sync
            + 'static
            + Fn(TickerSymbol, HistoryWindow) -> Result<HistoricalSeries, BuzzError>,
    {
        struct FnChart<F>(F);

        #[async_trait]
        impl<F> YahooChart for FnChart<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(TickerSymbol, HistoryWindow) -> Result<HistoricalSeries, BuzzError>,
        {
            async fn daily(
                &self,
                symbol: &TickerSymbol,
                window: HistoryWindow,
            ) -> Result<HistoricalSeries, BuzzError> {
                (self.0)(symbol.clone(), window)
            }
        }

        Arc::new(FnChart(f))
    }
}

// Convenience so connector can take a single adapter and split it into both trait objects.
/// Helper trait to split a concrete adapter into arc trait objects.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YahooSearch>`.
    fn clone_arc_search(&self) -> Arc<dyn YahooSearch> {
        <dyn YahooSearch>::from_fn(|_| Err(BuzzError::unsupported("search")))
    }
    /// Clone as `Arc<dyn YahooChart>`.
    fn clone_arc_chart(&self) -> Arc<dyn YahooChart> {
        <dyn YahooChart>::from_fn(|_, _| Err(BuzzError::unsupported("history")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_search(&self) -> Arc<dyn YahooSearch> {
        Arc::new(self.clone()) as Arc<dyn YahooSearch>
    }
    fn clone_arc_chart(&self) -> Arc<dyn YahooChart> {
        Arc::new(self.clone()) as Arc<dyn YahooChart>
    }
}
