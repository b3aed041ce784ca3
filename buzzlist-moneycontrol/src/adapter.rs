#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use buzzlist_core::BuzzError;

use crate::config::MoneycontrolConfig;

/// Page download abstraction (so we can inject canned markup in tests).
#[async_trait]
pub trait McPages: Send + Sync {
    /// GET `url` and return the body text.
    async fn get(&self, url: &str) -> Result<String, BuzzError>;
}

/// Real adapter backed by a single `reqwest::Client`.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
}

impl RealAdapter {
    /// Build a client carrying the configured user agent and timeout.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the HTTP client cannot be constructed.
    pub fn new(cfg: &MoneycontrolConfig) -> Result<Self, BuzzError> {
        let http = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| BuzzError::InvalidArg(format!("http client: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl McPages for RealAdapter {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "buzzlist_moneycontrol::get", skip(self))
    )]
    async fn get(&self, url: &str) -> Result<String, BuzzError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BuzzError::fetch(url, e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(BuzzError::fetch(url, format!("status {status}")));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| BuzzError::fetch(url, e.to_string()))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = body.len(), "page downloaded");
        Ok(body)
    }
}

#[cfg(feature = "test-adapters")]
impl dyn McPages {
    /// Build a `McPages` from a closure mapping a URL to a body (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn McPages>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<String, BuzzError>,
    {
        struct FnPages<F>(F);

        #[async_trait]
        impl<F> McPages for FnPages<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<String, BuzzError>,
        {
            async fn get(&self, url: &str) -> Result<String, BuzzError> {
                (self.0)(url)
            }
        }

        Arc::new(FnPages(f))
    }
}
