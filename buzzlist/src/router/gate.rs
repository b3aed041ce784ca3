use buzzlist_core::{
    BuzzError, Capability, HistoricalSeries, HistoryCheck, HistoryWindow, TickerSymbol,
};

use crate::Buzzlist;

impl Buzzlist {
    /// Daily history for `symbol` inside `window` from the first connector that has it.
    ///
    /// # Errors
    /// Returns `NotFound` when every connector reports the symbol unknown, or
    /// the provider failure otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "buzzlist::router", skip(self), fields(symbol = %symbol))
    )]
    pub async fn history(
        &self,
        symbol: &TickerSymbol,
        window: HistoryWindow,
    ) -> Result<HistoricalSeries, BuzzError> {
        self.first_success(
            Capability::History,
            Some(format!("history for {symbol}")),
            |c| {
                c.as_history_provider()?;
                let symbol = symbol.clone();
                Some(async move {
                    match c.as_history_provider() {
                        Some(p) => p.history(&symbol, window).await,
                        None => Err(BuzzError::unsupported(Capability::History.as_str())),
                    }
                })
            },
        )
        .await
    }

    /// Check whether `symbol` has enough daily observations in the configured window.
    ///
    /// Never fails: unknown symbols, provider errors and timeouts become
    /// [`HistoryCheck::LookupFailed`]. The result is not memoized.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "buzzlist::router", skip(self), fields(symbol = %symbol))
    )]
    pub async fn history_check(&self, symbol: &TickerSymbol) -> HistoryCheck {
        if !symbol.is_resolved() {
            return HistoryCheck::LookupFailed {
                reason: BuzzError::InvalidArg("history check requires a ticker".into()),
            };
        }
        let window = self.cfg.history_window;
        let required = self.cfg.min_observations;
        let counted = self
            .first_success(
                Capability::History,
                Some(format!("history for {symbol}")),
                |c| {
                    c.as_history_provider()?;
                    let symbol = symbol.clone();
                    Some(async move {
                        match c.as_history_provider() {
                            Some(p) => p.observation_count(&symbol, window).await,
                            None => Err(BuzzError::unsupported(Capability::History.as_str())),
                        }
                    })
                },
            )
            .await;
        let check = match counted {
            Ok(observations) if observations >= required => HistoryCheck::Sufficient { observations },
            Ok(observations) => HistoryCheck::Insufficient {
                observations,
                required,
            },
            Err(reason) => HistoryCheck::LookupFailed { reason },
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "buzzlist::router", passed = check.passed(), "history gate evaluated");
        check
    }

    /// Boolean projection of [`Buzzlist::history_check`].
    pub async fn has_sufficient_history(&self, symbol: &TickerSymbol) -> bool {
        self.history_check(symbol).await.passed()
    }
}
