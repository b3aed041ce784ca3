use std::time::Duration;

use buzzlist_core::BuzzError;

/// Default quote-search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://query2.finance.yahoo.com/v1/finance/search";
/// Default chart endpoint; the symbol is appended as a path segment.
pub const DEFAULT_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
/// Desktop browser user agent. The search endpoint rejects bare library agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Endpoints and transport settings for [`crate::YahooConnector`].
///
/// Tests point both URLs at a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YahooConfig {
    pub(crate) search_url: String,
    pub(crate) chart_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            chart_url: DEFAULT_CHART_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl YahooConfig {
    /// Override the quote-search URL.
    #[must_use]
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Override the chart base URL (without the trailing symbol).
    #[must_use]
    pub fn chart_url(mut self, url: impl Into<String>) -> Self {
        self.chart_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Override the HTTP client timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured quote-search URL.
    #[must_use]
    pub fn search_endpoint(&self) -> &str {
        &self.search_url
    }

    /// Chart URL for `symbol`, with the symbol percent-encoded as a path segment.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the configured chart URL is not a valid base URL.
    pub fn chart_endpoint(&self, symbol: &str) -> Result<reqwest::Url, BuzzError> {
        let mut url = reqwest::Url::parse(&self.chart_url)
            .map_err(|e| BuzzError::InvalidArg(format!("chart url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| BuzzError::InvalidArg("chart url cannot be a base".into()))?
            .pop_if_empty()
            .push(symbol);
        Ok(url)
    }
}
