use std::time::Duration;

use async_trait::async_trait;
use buzzlist_core::connector::{
    ArticleLocator, BuzzConnector, HistoryProvider, NameExtractor, SearchProvider,
};
use buzzlist_core::{
    ArticleLink, BuzzError, CompanyName, HistoricalSeries, HistoryWindow, SearchRequest,
    SearchResponse, TickerSymbol,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, series_with};

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// The fixture article yields six names: three long-listed companies, one
/// recent listing with too little history, one name with no search match and a
/// trailing duplicate. A search query or symbol equal to `FAIL` returns a
/// connector error; `TIMEOUT` delays the call by 200 ms.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(key: &str, capability: &'static str) -> Result<(), BuzzError> {
        match key {
            "FAIL" => Err(BuzzError::connector(
                "buzzlist-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl BuzzConnector for MockConnector {
    fn name(&self) -> &'static str {
        "buzzlist-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
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
impl ArticleLocator for MockConnector {
    async fn locate_article(&self) -> Result<ArticleLink, BuzzError> {
        Ok(fixtures::news::article())
    }
}

#[async_trait]
impl NameExtractor for MockConnector {
    async fn extract_names(&self, article: &ArticleLink) -> Result<Vec<CompanyName>, BuzzError> {
        if article.href != fixtures::news::article().href {
            return Err(BuzzError::fetch(&article.href, "status 404"));
        }
        Ok(fixtures::news::names())
    }
}

#[async_trait]
impl SearchProvider for MockConnector {
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
        Self::maybe_fail_or_timeout(req.query(), "search").await?;
        Ok(fixtures::search::search(req))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError> {
        let s = symbol.as_str();
        Self::maybe_fail_or_timeout(s, "history").await?;
        fixtures::history::by_symbol(symbol, window)
            .ok_or_else(|| BuzzError::not_found(format!("history for {s}")))
    }
}
