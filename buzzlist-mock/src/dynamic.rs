use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use buzzlist_core::connector::{
    ArticleLocator, BuzzConnector, HistoryProvider, NameExtractor, SearchProvider,
};
use buzzlist_core::{
    ArticleLink, BuzzError, CompanyName, HistoricalSeries, HistoryWindow, SearchHit,
    SearchRequest, SearchResponse, TickerSymbol,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after sleeping.
    Delayed(Duration, T),
    /// Fail immediately with the provided error.
    Fail(BuzzError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

impl<T> MockBehavior<T> {
    async fn run(self) -> Option<Result<T, BuzzError>> {
        match self {
            Self::Return(v) => Some(Ok(v)),
            Self::Delayed(after, v) => {
                tokio::time::sleep(after).await;
                Some(Ok(v))
            }
            Self::Fail(e) => Some(Err(e)),
            Self::Hang => {
                std::future::pending::<()>().await;
                None
            }
        }
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, capability: &str) -> Result<T, BuzzError> {
    match behavior {
        Some(b) => b
            .run()
            .await
            .unwrap_or_else(|| Err(BuzzError::unsupported(capability))),
        None => Err(BuzzError::unsupported(capability)),
    }
}

/// Per-key script: behaviors are consumed in order and the last one repeats.
struct Script<T> {
    queue: VecDeque<MockBehavior<T>>,
}

impl<T: Clone> Script<T> {
    fn next(&mut self) -> Option<MockBehavior<T>> {
        if self.queue.len() > 1 {
            self.queue.pop_front()
        } else {
            self.queue.front().cloned()
        }
    }
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

#[derive(Default)]
struct InternalState {
    article: Script<ArticleLink>,
    names: Script<Vec<CompanyName>>,
    search_rules: HashMap<String, Script<SearchResponse>>,
    history_rules: HashMap<TickerSymbol, Script<HistoricalSeries>>,
    search_calls: HashMap<String, usize>,
    history_calls: HashMap<TickerSymbol, usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `locate_article`.
    pub async fn set_article_behavior(&self, behavior: MockBehavior<ArticleLink>) {
        let mut guard = self.state.lock().await;
        guard.article.queue = VecDeque::from([behavior]);
    }

    /// Set the behavior for `extract_names`.
    pub async fn set_names_behavior(&self, behavior: MockBehavior<Vec<CompanyName>>) {
        let mut guard = self.state.lock().await;
        guard.names.queue = VecDeque::from([behavior]);
    }

    /// Convenience: extraction returns exactly `names`.
    pub async fn set_names(&self, names: &[&str]) {
        let names = names.iter().copied().map(CompanyName::from).collect();
        self.set_names_behavior(MockBehavior::Return(names)).await;
    }

    /// Set the behavior for `search` calls whose query equals `query`.
    pub async fn set_search_behavior(&self, query: &str, behavior: MockBehavior<SearchResponse>) {
        let mut guard = self.state.lock().await;
        guard.search_rules.insert(
            query.to_string(),
            Script {
                queue: VecDeque::from([behavior]),
            },
        );
    }

    /// Convenience: `query` resolves to `symbol`; an empty symbol means no match.
    pub async fn set_resolution(&self, query: &str, symbol: &str) {
        let hits = if symbol.is_empty() {
            vec![]
        } else {
            vec![SearchHit {
                symbol: TickerSymbol::from(symbol),
                name: Some(query.to_string()),
                exchange: None,
                kind: Some("EQUITY".to_string()),
            }]
        };
        self.set_search_behavior(query, MockBehavior::Return(SearchResponse { hits }))
            .await;
    }

    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: &TickerSymbol,
        behavior: MockBehavior<HistoricalSeries>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(
            symbol.clone(),
            Script {
                queue: VecDeque::from([behavior]),
            },
        );
    }

    /// Queue a behavior for the next `history` call for `symbol`.
    ///
    /// Queued behaviors are consumed in order; the last one keeps repeating.
    pub async fn push_history_behavior(
        &self,
        symbol: &TickerSymbol,
        behavior: MockBehavior<HistoricalSeries>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .history_rules
            .entry(symbol.clone())
            .or_default()
            .queue
            .push_back(behavior);
    }

    /// Number of `search` calls observed for `query`.
    pub async fn search_calls(&self, query: &str) -> usize {
        let guard = self.state.lock().await;
        guard.search_calls.get(query).copied().unwrap_or(0)
    }

    /// Number of `history` calls observed for `symbol`.
    pub async fn history_calls(&self, symbol: &TickerSymbol) -> usize {
        let guard = self.state.lock().await;
        guard.history_calls.get(symbol).copied().unwrap_or(0)
    }

    /// Clear all configured behaviors and call counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Inputs without a configured behavior fail with `BuzzError::Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn BuzzConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn BuzzConnector>, controller)
    }
}

/// Build a series of `n` consecutive daily candles starting at the window start.
#[must_use]
pub fn series_with(symbol: &TickerSymbol, window: HistoryWindow, n: usize) -> HistoricalSeries {
    let close = buzzlist_core::Decimal::ONE_HUNDRED;
    let candles = window
        .start()
        .iter_days()
        .take(n)
        .map(|date| buzzlist_core::Candle {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: Some(1),
        })
        .collect();
    HistoricalSeries {
        symbol: symbol.clone(),
        candles,
    }
}

#[async_trait]
impl BuzzConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_article_locator(&self) -> Option<&dyn ArticleLocator> {
        Some(self as &dyn ArticleLocator)
    }

    fn as_name_extractor(&self) -> Option<&dyn NameExtractor> {
        Some(self as &dyn NameExtractor)
    }

    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl ArticleLocator for DynamicMockConnector {
    async fn locate_article(&self) -> Result<ArticleLink, BuzzError> {
        // Take a behavior snapshot without holding the lock across await points
        let behavior = self.state.lock().await.article.next();
        play(behavior, "locate-article").await
    }
}

#[async_trait]
impl NameExtractor for DynamicMockConnector {
    async fn extract_names(&self, _article: &ArticleLink) -> Result<Vec<CompanyName>, BuzzError> {
        let behavior = self.state.lock().await.names.next();
        play(behavior, "extract-names").await
    }
}

#[async_trait]
impl SearchProvider for DynamicMockConnector {
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard.search_calls.entry(req.query().to_string()).or_default() += 1;
            guard
                .search_rules
                .get_mut(req.query())
                .and_then(Script::next)
        };
        play(behavior, "search").await
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        symbol: &TickerSymbol,
        _window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard.history_calls.entry(symbol.clone()).or_default() += 1;
            guard.history_rules.get_mut(symbol).and_then(Script::next)
        };
        play(behavior, "history").await
    }
}
