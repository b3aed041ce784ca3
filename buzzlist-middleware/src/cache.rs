use std::sync::Arc;

use async_trait::async_trait;
use buzzlist_core::connector::{ArticleLocator, HistoryProvider, NameExtractor, SearchProvider};
use buzzlist_core::{
    ArticleLink, BuzzConnector, BuzzError, CompanyName, HistoricalSeries, HistoryWindow,
    SearchRequest, SearchResponse, TickerSymbol,
};
use buzzlist_types::{CacheConfig, Capability};
use moka::future::Cache;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HistoryKey {
    symbol: TickerSymbol,
    window: HistoryWindow,
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Caching layer with the given per-capability settings.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl buzzlist_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn BuzzConnector>) -> Arc<dyn BuzzConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CacheMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "search": self.cfg.search,
            "history": self.cfg.history,
            "max_capacity": self.cfg.max_capacity,
        })
    }
}

// Per-capability stores; `None` means disabled.
struct Stores {
    search: Option<Cache<SearchRequest, Arc<SearchResponse>>>,
    history: Option<Cache<HistoryKey, Arc<HistoricalSeries>>>,
}

/// Connector wrapper that memoizes search and history responses for its lifetime.
///
/// Article discovery and name extraction always pass through: the news page is
/// expected to change between runs. Failed calls are never cached.
pub struct CachingConnector {
    inner: Arc<dyn BuzzConnector>,
    stores: Stores,
}

impl CachingConnector {
    fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Cache<K, V>>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let enabled = match cap {
            Capability::Search => cfg.search,
            Capability::History => cfg.history,
            _ => false,
        };
        if !enabled {
            return None;
        }
        let builder = Cache::builder();
        Some(match cfg.max_capacity {
            Some(cap) => builder.max_capacity(cap).build(),
            None => builder.build(),
        })
    }

    /// Wrap `inner` with the stores enabled in `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn BuzzConnector>, cfg: &CacheConfig) -> Self {
        let stores = Stores {
            search: Self::maybe_store(cfg, Capability::Search),
            history: Self::maybe_store(cfg, Capability::History),
        };
        Self { inner, stores }
    }
}

impl BuzzConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    buzzlist_core::buzz_connector_accessors!(inner);
}

#[async_trait]
impl ArticleLocator for CachingConnector {
    async fn locate_article(&self) -> Result<ArticleLink, BuzzError> {
        self.inner
            .as_article_locator()
            .ok_or_else(|| BuzzError::unsupported(Capability::LocateArticle.as_str()))?
            .locate_article()
            .await
    }
}

#[async_trait]
impl NameExtractor for CachingConnector {
    async fn extract_names(&self, article: &ArticleLink) -> Result<Vec<CompanyName>, BuzzError> {
        self.inner
            .as_name_extractor()
            .ok_or_else(|| BuzzError::unsupported(Capability::ExtractNames.as_str()))?
            .extract_names(article)
            .await
    }
}

#[async_trait]
impl SearchProvider for CachingConnector {
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
        let inner = self
            .inner
            .as_search_provider()
            .ok_or_else(|| BuzzError::unsupported("search"))?;
        if let Some(store) = &self.stores.search {
            let value = store
                .try_get_with(req.clone(), async { inner.search(req).await.map(Arc::new) })
                .await
                .map_err(|e: Arc<BuzzError>| (*e).clone())?;
            return Ok((*value).clone());
        }
        inner.search(req).await
    }
}

#[async_trait]
impl HistoryProvider for CachingConnector {
    async fn history(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError> {
        let inner = self
            .inner
            .as_history_provider()
            .ok_or_else(|| BuzzError::unsupported("history"))?;
        if let Some(store) = &self.stores.history {
            let key = HistoryKey {
                symbol: symbol.clone(),
                window,
            };
            let value = store
                .try_get_with(key, async {
                    inner.history(symbol, window).await.map(Arc::new)
                })
                .await
                .map_err(|e: Arc<BuzzError>| (*e).clone())?;
            return Ok((*value).clone());
        }
        inner.history(symbol, window).await
    }
}
