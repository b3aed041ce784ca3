use buzzlist_core::{
    BuzzError, Capability, CompanyName, MemoKey, ResolutionMemo, SearchRequest, SearchResponse,
    TickerSymbol,
};

use crate::Buzzlist;

impl Buzzlist {
    /// Search request sent for `name` under the active configuration.
    #[must_use]
    pub fn search_request(&self, name: &CompanyName) -> SearchRequest {
        SearchRequest::new(name.as_str())
            .country(self.cfg.country.as_str())
            .limit(self.cfg.quotes_count)
    }

    /// Run quote search on the first connector that answers.
    ///
    /// A connector reporting `NotFound` falls through to the next one.
    ///
    /// # Errors
    /// Returns the provider failure when no connector answers.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "buzzlist::router",
            skip(self, req),
            fields(query = %req.query()),
        )
    )]
    pub async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, BuzzError> {
        let res = self
            .first_success(
                Capability::Search,
                Some(format!("match for {}", req.query())),
                |c| {
                    c.as_search_provider()?;
                    let req = req.clone();
                    Some(async move {
                        match c.as_search_provider() {
                            Some(p) => p.search(&req).await,
                            None => Err(BuzzError::unsupported(Capability::Search.as_str())),
                        }
                    })
                },
            )
            .await;
        match res {
            Err(BuzzError::NotFound { .. }) => Ok(SearchResponse::default()),
            other => other,
        }
    }

    /// Resolve `name` to a ticker symbol.
    ///
    /// Returns the unresolved (empty) symbol when search finds no match; a
    /// blank name is unresolved without a request. Uses the memo injected via
    /// [`crate::BuzzlistBuilder::memo`] when present; otherwise every call
    /// searches.
    ///
    /// # Errors
    /// Returns `Fetch` or `Parse` (possibly inside an aggregate) when search fails.
    pub async fn resolve(&self, name: &CompanyName) -> Result<TickerSymbol, BuzzError> {
        let memo = if self.cfg.memoize_resolution {
            self.memo.as_deref()
        } else {
            None
        };
        self.resolve_with(name, memo).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "buzzlist::router",
            skip(self, memo),
            fields(name = %name, memoized = memo.is_some()),
        )
    )]
    pub(crate) async fn resolve_with(
        &self,
        name: &CompanyName,
        memo: Option<&dyn ResolutionMemo>,
    ) -> Result<TickerSymbol, BuzzError> {
        if name.is_blank() {
            return Ok(TickerSymbol::unresolved());
        }
        let req = self.search_request(name);
        let Some(memo) = memo else {
            return self.search(&req).await.map(|r| r.best_symbol());
        };
        let key = MemoKey::for_search(&req);
        memo.get_or_resolve(
            key,
            Box::pin(async move { self.search(&req).await.map(|r| r.best_symbol()) }),
        )
        .await
    }
}
