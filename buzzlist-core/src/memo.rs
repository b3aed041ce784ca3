use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::{BuzzError, SearchRequest, TickerSymbol};

/// Cache key: operation name, its argument and the settings that shape the answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoKey {
    /// Operation label, e.g. `"resolve"`.
    pub operation: &'static str,
    /// Argument the operation was called with.
    pub argument: String,
    /// Settings that change the result for the same argument (country, limit).
    pub scope: String,
}

impl MemoKey {
    /// Key for resolving `name` to a ticker with no further qualification.
    pub fn resolve(name: impl Into<String>) -> Self {
        Self {
            operation: "resolve",
            argument: name.into(),
            scope: String::new(),
        }
    }

    /// Key for resolving the query of `req`, scoped by its country and limit.
    #[must_use]
    pub fn for_search(req: &SearchRequest) -> Self {
        Self {
            operation: "resolve",
            argument: req.query().to_string(),
            scope: format!(
                "{}/{}",
                req.country_filter().unwrap_or_default(),
                req.max_results()
            ),
        }
    }
}

/// Swappable memo for ticker resolution.
///
/// Implementations must run at most one `init` per key at a time: a second
/// caller for an in-flight key awaits the first result. Successful results are
/// retained for the memo's lifetime; failures are returned to every waiter but
/// not retained.
#[async_trait]
pub trait ResolutionMemo: Send + Sync {
    /// Return the memoized symbol for `key`, running `init` if absent.
    async fn get_or_resolve<'a>(
        &'a self,
        key: MemoKey,
        init: BoxFuture<'a, Result<TickerSymbol, BuzzError>>,
    ) -> Result<TickerSymbol, BuzzError>;

    /// Number of retained entries.
    fn entry_count(&self) -> u64;

    /// Drop all retained entries.
    fn clear(&self);
}
