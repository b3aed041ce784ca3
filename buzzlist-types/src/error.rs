use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the buzzlist workspace.
///
/// The first three variants are the pipeline's own taxonomy (transport,
/// structure, absence). The remaining ones describe orchestration outcomes:
/// capability mismatches, provider-tagged failures, timeouts and the single
/// user-facing failure raised when the seed name list cannot be acquired.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuzzError {
    /// Network or HTTP failure while talking to an upstream service.
    #[error("fetch failed for {url}: {msg}")]
    Fetch {
        /// Requested URL (or a short label when no URL applies).
        url: String,
        /// Human-readable failure description, including the HTTP status when known.
        msg: String,
    },

    /// The upstream payload did not have the expected structure.
    #[error("parse error in {what}: {msg}")]
    Parse {
        /// What was being parsed, e.g. "search response".
        what: String,
        /// Parser message.
        msg: String,
    },

    /// An expected markup pattern, resource or symbol is absent.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "article link matching ^Buzzing Stocks".
        what: String,
    },

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label (e.g. "search", "history").
        capability: String,
    },

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error that is not otherwise classified.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label.
        capability: String,
    },

    /// All providers registered for a capability failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<BuzzError>),

    /// The list-acquisition stage failed, so no watchlist can be built.
    #[error("source unavailable during {stage}: {cause}")]
    SourceUnavailable {
        /// Pipeline stage that failed ("locate-article" or "extract-names").
        stage: String,
        /// Underlying failure.
        cause: Box<BuzzError>,
    },

    /// Serializing an export artifact failed.
    #[error("export failed: {0}")]
    Export(String),
}

impl BuzzError {
    /// Helper: build a `Fetch` error for a URL and message.
    pub fn fetch(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Parse` error describing what failed to parse.
    pub fn parse(what: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Parse {
            what: what.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: wrap a list-acquisition failure into `SourceUnavailable`.
    pub fn source_unavailable(stage: impl Into<String>, cause: Self) -> Self {
        Self::SourceUnavailable {
            stage: stage.into(),
            cause: Box::new(cause),
        }
    }

    /// Returns true for transport-level failures, including ones nested in aggregates.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        match self {
            Self::Fetch { .. } | Self::ProviderTimeout { .. } => true,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_fetch),
            Self::SourceUnavailable { cause, .. } => cause.is_fetch(),
            _ => false,
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Non-actionable errors are those indicating capability absence or a benign
    /// not-found condition. Aggregates are classified based on their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
