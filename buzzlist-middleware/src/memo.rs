use std::sync::Arc;

use async_trait::async_trait;
use buzzlist_core::{BuzzError, MemoKey, ResolutionMemo, TickerSymbol};
use futures::future::BoxFuture;
use moka::future::Cache;

/// In-memory [`ResolutionMemo`] backed by a `moka` future cache.
///
/// Unbounded and without expiry, so nothing is evicted for the life of the
/// value. Concurrent lookups of one key share a single resolution. Errors are
/// handed to every waiter and not retained, so a later call retries.
#[derive(Clone)]
pub struct MemoCache {
    inner: Cache<MemoKey, TickerSymbol>,
}

impl MemoCache {
    /// Empty, eviction-free memo.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Cache::builder().build(),
        }
    }

    /// Empty memo behind an `Arc`, ready to inject into the orchestrator.
    #[must_use]
    pub fn shared() -> Arc<dyn ResolutionMemo> {
        Arc::new(Self::new())
    }

    /// Previously memoized symbol, without resolving.
    pub async fn peek(&self, key: &MemoKey) -> Option<TickerSymbol> {
        self.inner.get(key).await
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

#[async_trait]
impl ResolutionMemo for MemoCache {
    async fn get_or_resolve<'a>(
        &'a self,
        key: MemoKey,
        init: BoxFuture<'a, Result<TickerSymbol, BuzzError>>,
    ) -> Result<TickerSymbol, BuzzError> {
        #[cfg(feature = "tracing")]
        let argument = key.argument.clone();
        let out = self
            .inner
            .try_get_with(key, init)
            .await
            .map_err(|e: Arc<BuzzError>| (*e).clone());
        #[cfg(feature = "tracing")]
        if let Err(e) = &out {
            tracing::debug!(name = %argument, error = %e, "resolution failed; not memoized");
        }
        out
    }

    fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    fn clear(&self) {
        self.inner.invalidate_all();
    }
}
