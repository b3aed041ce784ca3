use futures::stream::{self, StreamExt};

use buzzlist_core::{
    BuzzError, CompanyName, Exclusion, ExclusionReason, HistoryCheck, ResolutionMemo,
    TickerSymbol, Watchlist, WatchlistReport,
};

use crate::Buzzlist;

impl Buzzlist {
    /// Run the whole pipeline: locate the article, extract names, resolve
    /// each name and keep those whose ticker passes the history gate.
    ///
    /// Names are evaluated up to `concurrency` at a time but folded in
    /// extraction order. A repeated name keeps the position of its first
    /// qualifying occurrence and the ticker of its last one.
    ///
    /// # Errors
    /// Returns `SourceUnavailable` when the article or its names cannot be
    /// fetched. Per-name failures never fail the run; they are listed in
    /// [`WatchlistReport::exclusions`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "buzzlist::router",
            skip(self),
            fields(concurrency = self.cfg.concurrency),
        )
    )]
    pub async fn watchlist_report(&self) -> Result<WatchlistReport, BuzzError> {
        let (article, names) = self.candidates().await?;
        let memo = self.run_memo();
        let memo = memo.as_deref();

        let mut outcomes: Vec<(usize, Result<TickerSymbol, ExclusionReason>)> =
            stream::iter(names.iter().enumerate())
                .map(|(i, name)| async move { (i, self.evaluate(name, memo).await) })
                .buffer_unordered(self.cfg.concurrency)
                .collect()
                .await;
        outcomes.sort_by_key(|(i, _)| *i);

        let mut watchlist = Watchlist::new();
        let mut exclusions = Vec::new();
        for (index, outcome) in outcomes {
            let company = names[index].clone();
            match outcome {
                Ok(ticker) => {
                    watchlist.insert(company, ticker);
                }
                Err(reason) => exclusions.push(Exclusion {
                    index,
                    company,
                    reason,
                }),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            target: "buzzlist::router",
            kept = watchlist.len(),
            excluded = exclusions.len(),
            "watchlist built"
        );

        Ok(WatchlistReport {
            article,
            names,
            watchlist,
            exclusions,
        })
    }

    /// Ordered map of qualified company names to ticker symbols.
    ///
    /// # Errors
    /// Returns `SourceUnavailable` when the source article cannot be read.
    pub async fn watchlist(&self) -> Result<Watchlist, BuzzError> {
        self.watchlist_report().await.map(|r| r.watchlist)
    }

    async fn evaluate(
        &self,
        name: &CompanyName,
        memo: Option<&dyn ResolutionMemo>,
    ) -> Result<TickerSymbol, ExclusionReason> {
        let ticker = self
            .resolve_with(name, memo)
            .await
            .map_err(ExclusionReason::ResolveFailed)?;
        if !ticker.is_resolved() {
            return Err(ExclusionReason::Unresolved);
        }
        match self.history_check(&ticker).await {
            HistoryCheck::Sufficient { .. } => Ok(ticker),
            HistoryCheck::Insufficient {
                observations,
                required,
            } => Err(ExclusionReason::InsufficientHistory {
                ticker,
                observations,
                required,
            }),
            HistoryCheck::LookupFailed { reason } => {
                Err(ExclusionReason::HistoryLookupFailed { ticker, reason })
            }
        }
    }
}
