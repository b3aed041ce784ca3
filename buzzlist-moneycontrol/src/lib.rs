//! buzzlist-moneycontrol
//!
//! News connector for moneycontrol.com. Finds the daily "Buzzing Stocks"
//! article on the stocks listing page and extracts the emphasized company
//! names from it.
#![warn(missing_docs)]

/// Page download adapter and its `reqwest` implementation.
pub mod adapter;
mod builder;
/// Listing location and transport configuration.
pub mod config;
/// Pure markup extraction.
pub mod markup;

use std::sync::Arc;

use adapter::{McPages, RealAdapter};
use async_trait::async_trait;
use buzzlist_core::{
    ArticleLink, BuzzError, CompanyName,
    connector::{ArticleLocator, BuzzConnector, ConnectorKey, NameExtractor},
};
use regex::Regex;
use url::Url;

pub use builder::MoneycontrolConnectorBuilder;
pub use config::MoneycontrolConfig;

#[cfg(feature = "test-adapters")]
type PagesAdapter = Arc<dyn McPages>;
#[cfg(not(feature = "test-adapters"))]
type PagesAdapter = Arc<RealAdapter>;

/// Public connector type. Production users will construct with `MoneycontrolConnector::new_default()`.
pub struct MoneycontrolConnector {
    pages: PagesAdapter,
    listing: Url,
    title: Regex,
}

impl MoneycontrolConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("buzzlist-moneycontrol");

    /// Build with a fresh HTTP client and the default listing page.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be built, which is unexpected in
    /// normal environments (TLS backend unavailable).
    #[must_use]
    pub fn new_default() -> Self {
        Self::with_config(MoneycontrolConfig::default())
            .expect("Failed to build reqwest client for moneycontrol")
    }

    /// Build against a custom listing page, title pattern or transport settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable listing URL or title pattern, or
    /// if the HTTP client cannot be constructed.
    pub fn with_config(cfg: MoneycontrolConfig) -> Result<Self, BuzzError> {
        let real = RealAdapter::new(&cfg)?;
        Self::assemble(Arc::new(real), &cfg)
    }

    /// Build from a provided `reqwest::Client`; its own headers and timeout apply.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable listing URL or title pattern.
    pub fn with_reqwest_client(
        http: reqwest::Client,
        cfg: &MoneycontrolConfig,
    ) -> Result<Self, BuzzError> {
        Self::assemble(Arc::new(RealAdapter::with_client(http)), cfg)
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable listing URL or title pattern.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter(
        pages: Arc<dyn McPages>,
        cfg: &MoneycontrolConfig,
    ) -> Result<Self, BuzzError> {
        Self::assemble(pages, cfg)
    }

    fn assemble(pages: PagesAdapter, cfg: &MoneycontrolConfig) -> Result<Self, BuzzError> {
        let listing = Url::parse(cfg.listing())
            .map_err(|e| BuzzError::InvalidArg(format!("listing url: {e}")))?;
        let title = Regex::new(&cfg.title_pattern)
            .map_err(|e| BuzzError::InvalidArg(format!("title pattern: {e}")))?;
        Ok(Self {
            pages,
            listing,
            title,
        })
    }
}

#[async_trait]
impl ArticleLocator for MoneycontrolConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "buzzlist_moneycontrol::locate_article",
            skip(self),
            fields(listing = %self.listing),
        )
    )]
    async fn locate_article(&self) -> Result<ArticleLink, BuzzError> {
        let body = self.pages.get(self.listing.as_str()).await?;
        let link = markup::find_article_link(&body, &self.title, &self.listing)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(href = %link.href, "article located");
        Ok(link)
    }
}

#[async_trait]
impl NameExtractor for MoneycontrolConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "buzzlist_moneycontrol::extract_names",
            skip(self, article),
            fields(href = %article.href),
        )
    )]
    async fn extract_names(&self, article: &ArticleLink) -> Result<Vec<CompanyName>, BuzzError> {
        let body = self.pages.get(&article.href).await?;
        let names = markup::extract_names(&body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(count = names.len(), "names extracted");
        Ok(names)
    }
}

impl BuzzConnector for MoneycontrolConnector {
    fn name(&self) -> &'static str {
        "buzzlist-moneycontrol"
    }

    fn vendor(&self) -> &'static str {
        "Moneycontrol"
    }

    fn as_article_locator(&self) -> Option<&dyn ArticleLocator> {
        Some(self as &dyn ArticleLocator)
    }

    fn as_name_extractor(&self) -> Option<&dyn NameExtractor> {
        Some(self as &dyn NameExtractor)
    }
}
