use std::sync::Arc;
use std::time::Duration;

use buzzlist_core::{
    BuzzConfig, BuzzConnector, BuzzError, Capability, HistoryWindow, NaiveDate, ResolutionMemo,
};
use buzzlist_middleware::MemoCache;

/// Orchestrator that runs the scrape, resolve and filter pipeline across registered connectors.
pub struct Buzzlist {
    pub(crate) connectors: Vec<Arc<dyn BuzzConnector>>,
    pub(crate) cfg: BuzzConfig,
    pub(crate) memo: Option<Arc<dyn ResolutionMemo>>,
}

/// Builder for constructing a `Buzzlist` orchestrator with custom configuration.
pub struct BuzzlistBuilder {
    connectors: Vec<Arc<dyn BuzzConnector>>,
    cfg: BuzzConfig,
    memo: Option<Arc<dyn ResolutionMemo>>,
}

impl Default for BuzzlistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuzzlistBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: country "India", one quote per search, at least 50 daily
    /// observations between 2010-01-01 and 2023-12-31, sequential evaluation,
    /// 10s provider timeout, run-scoped resolution memo.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: BuzzConfig::default(),
            memo: None,
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is routing order: for each capability the first
    /// connector that advertises it is tried first, later ones are fallbacks.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn BuzzConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: BuzzConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Country restriction passed to quote search.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.cfg.country = country.into();
        self
    }

    /// Number of quotes requested per search. Only the first is used.
    #[must_use]
    pub const fn quotes_count(mut self, n: usize) -> Self {
        self.cfg.quotes_count = n;
        self
    }

    /// Minimum daily observations for a symbol to pass the history gate.
    #[must_use]
    pub const fn min_observations(mut self, n: usize) -> Self {
        self.cfg.min_observations = n;
        self
    }

    /// Window the history gate counts observations in.
    #[must_use]
    pub const fn history_window(mut self, window: HistoryWindow) -> Self {
        self.cfg.history_window = window;
        self
    }

    /// Number of candidates resolved and gated at once.
    ///
    /// Results are folded in extraction order whatever the value, so the
    /// watchlist is identical to a sequential run.
    #[must_use]
    pub const fn concurrency(mut self, n: usize) -> Self {
        self.cfg.concurrency = n;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Toggle coalescing of repeated resolutions within a run.
    #[must_use]
    pub const fn memoize_resolution(mut self, yes: bool) -> Self {
        self.cfg.memoize_resolution = yes;
        self
    }

    /// First day of the history fetched for a selected stock.
    #[must_use]
    pub const fn selection_start(mut self, date: NaiveDate) -> Self {
        self.cfg.selection_start = date;
        self
    }

    /// Share a memo across runs instead of starting each run empty.
    ///
    /// Ignored when resolution memoization is turned off.
    #[must_use]
    pub fn memo(mut self, memo: Arc<dyn ResolutionMemo>) -> Self {
        self.memo = Some(memo);
        self
    }

    /// Build the `Buzzlist` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors are registered, if concurrency or
    /// the quote count is zero, or if the history window is inverted.
    pub fn build(self) -> Result<Buzzlist, BuzzError> {
        if self.connectors.is_empty() {
            return Err(BuzzError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.concurrency == 0 {
            return Err(BuzzError::InvalidArg(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.cfg.quotes_count == 0 {
            return Err(BuzzError::InvalidArg(
                "quotes_count must be at least 1".to_string(),
            ));
        }
        // Deserialized configs bypass HistoryWindow::new.
        let w = self.cfg.history_window;
        HistoryWindow::new(w.start(), w.end())?;

        Ok(Buzzlist {
            connectors: self.connectors,
            cfg: self.cfg,
            memo: self.memo,
        })
    }
}

/// Attach the connector name to errors that do not carry one.
pub fn tag_err(connector: &str, e: BuzzError) -> BuzzError {
    match e {
        e @ (BuzzError::Fetch { .. }
        | BuzzError::Parse { .. }
        | BuzzError::NotFound { .. }
        | BuzzError::Unsupported { .. }
        | BuzzError::ProviderTimeout { .. }
        | BuzzError::Connector { .. }
        | BuzzError::AllProvidersFailed(_)
        | BuzzError::SourceUnavailable { .. }) => e,
        other => BuzzError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Buzzlist {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "buzzlist::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, BuzzError>
    where
        Fut: core::future::Future<Output = Result<T, BuzzError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(BuzzError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Start building a new `Buzzlist` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use buzzlist::Buzzlist;
    /// use buzzlist_moneycontrol::MoneycontrolConnector;
    /// use buzzlist_yahoo::YahooConnector;
    ///
    /// let buzz = Buzzlist::builder()
    ///     .with_connector(Arc::new(MoneycontrolConnector::new_default()))
    ///     .with_connector(YahooConnector::new().build())
    ///     .concurrency(4)
    ///     .build()?;
    /// let watchlist = buzz.watchlist().await?;
    /// ```
    #[must_use]
    pub fn builder() -> BuzzlistBuilder {
        BuzzlistBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BuzzConfig {
        &self.cfg
    }

    /// Connectors in routing order.
    pub(crate) fn ordered(&self) -> impl Iterator<Item = &Arc<dyn BuzzConnector>> {
        self.connectors.iter()
    }

    /// Memo for one pipeline run: the injected one, or a fresh empty one.
    pub(crate) fn run_memo(&self) -> Option<Arc<dyn ResolutionMemo>> {
        if !self.cfg.memoize_resolution {
            return None;
        }
        Some(self.memo.clone().unwrap_or_else(MemoCache::shared))
    }

    /// Try each connector that offers the capability until one succeeds.
    ///
    /// - `call` returns `None` for connectors lacking the capability.
    /// - Every attempt is bounded by the provider timeout.
    /// - Failures are collected and collapsed by [`crate::router::util::collapse_errors`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "buzzlist::core::first_success",
            skip(self, call),
            fields(capability = %capability),
        )
    )]
    pub(crate) async fn first_success<T, F, Fut>(
        &self,
        capability: Capability,
        not_found_what: Option<String>,
        call: F,
    ) -> Result<T, BuzzError>
    where
        F: Fn(Arc<dyn BuzzConnector>) -> Option<Fut>,
        Fut: core::future::Future<Output = Result<T, BuzzError>>,
    {
        let mut attempted_any = false;
        let mut errors: Vec<BuzzError> = Vec::new();

        for c in self.ordered() {
            let Some(fut) = call(Arc::clone(c)) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "provider attempt failed");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            not_found_what,
        ))
    }
}
