#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use buzzlist_core::connector::{
    ArticleLocator, BuzzConnector, HistoryProvider, NameExtractor, SearchProvider,
};
use buzzlist_core::{
    ArticleLink, BuzzError, CompanyName, HistoricalSeries, HistoryWindow, SearchHit,
    SearchRequest, SearchResponse, TickerSymbol,
};

type ArticleFn = Arc<dyn Fn() -> Result<ArticleLink, BuzzError> + Send + Sync>;
type NamesFn = Arc<dyn Fn(&ArticleLink) -> Result<Vec<CompanyName>, BuzzError> + Send + Sync>;
type SearchFn = Arc<dyn Fn(&SearchRequest) -> Result<SearchResponse, BuzzError> + Send + Sync>;
type HistoryFn =
    Arc<dyn Fn(&TickerSymbol, HistoryWindow) -> Result<HistoricalSeries, BuzzError> + Send + Sync>;

/// In-memory connector with per-capability closures and call counters.
///
/// A capability is advertised only when its closure is set.
pub struct StubConnector {
    pub name: &'static str,
    pub delay: Duration,
    pub article_fn: Option<ArticleFn>,
    pub names_fn: Option<NamesFn>,
    pub search_fn: Option<SearchFn>,
    pub history_fn: Option<HistoryFn>,
    search_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

impl StubConnector {
    pub fn builder() -> StubConnectorBuilder {
        StubConnectorBuilder {
            inner: Self {
                name: "stub",
                delay: Duration::ZERO,
                article_fn: None,
                names_fn: None,
                search_fn: None,
                history_fn: None,
                search_calls: AtomicUsize::new(0),
                history_calls: AtomicUsize::new(0),
            },
        }
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

pub struct StubConnectorBuilder {
    inner: StubConnector,
}

impl StubConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }

    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.inner.delay = Duration::from_millis(ms);
        self
    }

    pub fn article_ok(mut self, link: ArticleLink) -> Self {
        self.inner.article_fn = Some(Arc::new(move || Ok(link.clone())));
        self
    }

    pub fn article_err(mut self, err: BuzzError) -> Self {
        self.inner.article_fn = Some(Arc::new(move || Err(err.clone())));
        self
    }

    pub fn names_ok(mut self, names: &[&str]) -> Self {
        let names: Vec<CompanyName> = names.iter().copied().map(CompanyName::from).collect();
        self.inner.names_fn = Some(Arc::new(move |_| Ok(names.clone())));
        self
    }

    pub fn names_err(mut self, err: BuzzError) -> Self {
        self.inner.names_fn = Some(Arc::new(move |_| Err(err.clone())));
        self
    }

    pub fn search_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&SearchRequest) -> Result<SearchResponse, BuzzError> + Send + Sync + 'static,
    {
        self.inner.search_fn = Some(Arc::new(f));
        self
    }

    /// Search answers from a fixed `(query, symbol)` table; other queries get no hits.
    pub fn resolves(self, table: &[(&str, &str)]) -> Self {
        let table: Vec<(String, String)> = table
            .iter()
            .map(|(q, s)| ((*q).to_string(), (*s).to_string()))
            .collect();
        self.search_fn(move |req| {
            let hits = table
                .iter()
                .filter(|(q, _)| q == req.query())
                .map(|(_, s)| hit(s))
                .collect();
            Ok(SearchResponse { hits })
        })
    }

    pub fn history_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&TickerSymbol, HistoryWindow) -> Result<HistoricalSeries, BuzzError>
            + Send
            + Sync
            + 'static,
    {
        self.inner.history_fn = Some(Arc::new(f));
        self
    }

    /// Every symbol has `n` daily observations from the window start.
    pub fn history_len(self, n: usize) -> Self {
        self.history_fn(move |s, w| Ok(buzzlist_mock::series_with(s, w, n)))
    }

    pub fn build(self) -> Arc<StubConnector> {
        Arc::new(self.inner)
    }
}

pub fn hit(symbol: &str) -> SearchHit {
    SearchHit {
        symbol: TickerSymbol::from(symbol),
        name: None,
        exchange: None,
        kind: Some("EQUITY".to_string()),
    }
}

#[async_trait]
impl BuzzConnector for StubConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_article_locator(&self) -> Option<&dyn ArticleLocator> {
        self.article_fn.as_ref().map(|_| self as &dyn ArticleLocator)
    }

    fn as_name_extractor(&self) -> Option<&dyn NameExtractor> {
        self.names_fn.as_ref().map(|_| self as &dyn NameExtractor)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        self.search_fn.as_ref().map(|_| self as &dyn SearchProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        self.history_fn.as_ref().map(|_| self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl ArticleLocator for StubConnector {
    async fn locate_article(&self) -> Result<ArticleLink, BuzzError> {
        match &self.article_fn {
            Some(f) => f(),
            None => Err(BuzzError::unsupported("locate-article")),
        }
    }
}

#[async_trait]
impl NameExtractor for StubConnector {
    async fn extract_names(&self, article: &ArticleLink) -> Result<Vec<CompanyName>, BuzzError> {
        match &self.names_fn {
            Some(f) => f(article),
            None => Err(BuzzError::unsupported("extract-names")),
        }
    }
}

#[async_trait]
impl SearchProvider for StubConnector {
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        match &self.search_fn {
            Some(f) => f(req),
            None => Err(BuzzError::unsupported("search")),
        }
    }
}

#[async_trait]
impl HistoryProvider for StubConnector {
    async fn history(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        match &self.history_fn {
            Some(f) => f(symbol, window),
            None => Err(BuzzError::unsupported("history")),
        }
    }
}
