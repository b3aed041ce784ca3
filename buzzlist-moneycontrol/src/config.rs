use std::time::Duration;

/// Default news listing that links the daily "Buzzing Stocks" article.
pub const DEFAULT_LISTING_URL: &str = "https://www.moneycontrol.com/news/photos/business/stocks/";
/// Anchor `title` pattern identifying the article.
pub const DEFAULT_TITLE_PATTERN: &str = "^Buzzing Stocks";

/// Listing location and transport settings for [`crate::MoneycontrolConnector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneycontrolConfig {
    pub(crate) listing_url: String,
    pub(crate) title_pattern: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl Default for MoneycontrolConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            title_pattern: DEFAULT_TITLE_PATTERN.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl MoneycontrolConfig {
    /// Override the listing page URL. Relative article links resolve against it.
    #[must_use]
    pub fn listing_url(mut self, url: impl Into<String>) -> Self {
        self.listing_url = url.into();
        self
    }

    /// Override the regular expression matched against anchor titles.
    #[must_use]
    pub fn title_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.title_pattern = pattern.into();
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

    /// Configured listing page URL.
    #[must_use]
    pub fn listing(&self) -> &str {
        &self.listing_url
    }
}
