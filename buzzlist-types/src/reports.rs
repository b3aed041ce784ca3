//! Outcome types and report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::domain::{ArticleLink, CompanyName, TickerSymbol};
use crate::error::BuzzError;
use crate::watchlist::Watchlist;

/// Result of the history gate for one symbol.
///
/// The gate never fails; lookup problems are folded into `LookupFailed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryCheck {
    /// At least the required number of observations.
    Sufficient {
        /// Observations found in the window.
        observations: usize,
    },
    /// Fewer observations than required.
    Insufficient {
        /// Observations found in the window.
        observations: usize,
        /// Configured minimum.
        required: usize,
    },
    /// The provider failed (unknown symbol, transport error, timeout).
    LookupFailed {
        /// Underlying failure.
        reason: BuzzError,
    },
}

impl HistoryCheck {
    /// Whether the symbol qualifies for the watchlist.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Sufficient { .. })
    }
}

/// Why a candidate name did not make it into the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusionReason {
    /// Search returned no match.
    Unresolved,
    /// Search failed.
    ResolveFailed(BuzzError),
    /// Not enough daily observations.
    InsufficientHistory {
        /// Ticker that was checked.
        ticker: TickerSymbol,
        /// Observations found.
        observations: usize,
        /// Configured minimum.
        required: usize,
    },
    /// History lookup failed.
    HistoryLookupFailed {
        /// Ticker that was checked.
        ticker: TickerSymbol,
        /// Underlying failure.
        reason: BuzzError,
    },
}

/// A dropped candidate, by extraction position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    /// Position in the extracted name list.
    pub index: usize,
    /// Candidate label.
    pub company: CompanyName,
    /// Why it was dropped.
    pub reason: ExclusionReason,
}

/// Full outcome of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistReport {
    /// Article the names were extracted from.
    pub article: ArticleLink,
    /// Names in extraction order, duplicates and blanks included.
    pub names: Vec<CompanyName>,
    /// Qualified entries.
    pub watchlist: Watchlist,
    /// One entry per dropped occurrence, in extraction order.
    pub exclusions: Vec<Exclusion>,
}
