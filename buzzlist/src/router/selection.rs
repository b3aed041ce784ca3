use buzzlist_core::{BuzzError, HistoricalSeries, HistoryWindow, NaiveDate, Selection};

use crate::Buzzlist;

impl Buzzlist {
    /// Daily history for a selected watchlist entry, from the configured
    /// selection start through `end`, ready for a forecasting collaborator.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `end` precedes the selection start, `NotFound`
    /// when no connector knows the ticker, or the provider failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "buzzlist::router",
            skip(self, selection),
            fields(company = %selection.company, ticker = %selection.ticker),
        )
    )]
    pub async fn selection_history(
        &self,
        selection: &Selection,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, BuzzError> {
        let window = HistoryWindow::new(self.cfg.selection_start, end)?;
        self.history(&selection.ticker, window).await
    }
}
