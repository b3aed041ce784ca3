use async_trait::async_trait;

use crate::BuzzError;
pub use buzzlist_types::ConnectorKey;
use buzzlist_types::{
    ArticleLink, CompanyName, HistoricalSeries, HistoryWindow, SearchRequest, SearchResponse,
    TickerSymbol,
};

/// Focused role trait for connectors that can find the trending-stocks article.
#[async_trait]
pub trait ArticleLocator: Send + Sync {
    /// Fetch the news listing and return the first matching article link.
    ///
    /// Fails with `BuzzError::NotFound` when no anchor matches and with
    /// `BuzzError::Fetch` on transport failure.
    async fn locate_article(&self) -> Result<ArticleLink, BuzzError>;
}

/// Focused role trait for connectors that extract candidate names from an article.
#[async_trait]
pub trait NameExtractor: Send + Sync {
    /// Fetch `article` and return the cleaned names in document order.
    ///
    /// An article without emphasis elements yields an empty list, not an error.
    async fn extract_names(&self, article: &ArticleLink) -> Result<Vec<CompanyName>, BuzzError>;
}

/// Focused role trait for connectors that provide quote search.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for instruments matching a free-text query.
    ///
    /// No match is an empty response, never an error.
    async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError>;
}

/// Focused role trait for connectors that provide daily price history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch daily observations for `symbol` inside `window`.
    async fn history(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError>;

    /// Number of daily observations for `symbol` inside `window`.
    ///
    /// Default: fetch the series and count in-window candles. Providers with a
    /// cheaper count endpoint may override this.
    async fn observation_count(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<usize, BuzzError> {
        let series = self.history(symbol, window).await?;
        Ok(series
            .candles
            .iter()
            .filter(|c| window.contains(c.date))
            .count())
    }
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait BuzzConnector: Send + Sync {
    /// A stable identifier for provider ordering (e.g., "buzzlist-yahoo").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise article discovery when supported.
    fn as_article_locator(&self) -> Option<&dyn ArticleLocator> {
        None
    }

    /// Advertise name extraction when supported.
    fn as_name_extractor(&self) -> Option<&dyn NameExtractor> {
        None
    }

    /// Advertise quote search when supported.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }

    /// Advertise daily history when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }
}

/// Generate `as_*` accessors for a wrapper that implements `BuzzConnector`
/// by delegating to an inner field.
///
/// The wrapper must implement every capability trait itself; an accessor
/// returns the wrapper only when the inner connector advertises the capability.
#[macro_export]
macro_rules! buzz_connector_accessors {
    ($inner:ident) => {
        fn as_article_locator(&self) -> Option<&dyn $crate::connector::ArticleLocator> {
            if self.$inner.as_article_locator().is_some() {
                Some(self as &dyn $crate::connector::ArticleLocator)
            } else {
                None
            }
        }
        fn as_name_extractor(&self) -> Option<&dyn $crate::connector::NameExtractor> {
            if self.$inner.as_name_extractor().is_some() {
                Some(self as &dyn $crate::connector::NameExtractor)
            } else {
                None
            }
        }
        fn as_search_provider(&self) -> Option<&dyn $crate::connector::SearchProvider> {
            if self.$inner.as_search_provider().is_some() {
                Some(self as &dyn $crate::connector::SearchProvider)
            } else {
                None
            }
        }
        fn as_history_provider(&self) -> Option<&dyn $crate::connector::HistoryProvider> {
            if self.$inner.as_history_provider().is_some() {
                Some(self as &dyn $crate::connector::HistoryProvider)
            } else {
                None
            }
        }
    };
}
