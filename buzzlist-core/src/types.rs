//! Re-export of foundational types from `buzzlist-types`.
// Consolidated so downstream crates can depend on `buzzlist-core` only

pub use buzzlist_types::{BuzzConfig, BuzzError, CacheConfig, Capability, ConnectorKey};
pub use buzzlist_types::{
    ArticleLink, Candle, CompanyName, HistoricalSeries, HistoryWindow, SearchHit, SearchRequest,
    SearchResponse, SeriesSummary, TickerSymbol,
};
pub use buzzlist_types::{Exclusion, ExclusionReason, HistoryCheck, WatchlistReport};
pub use buzzlist_types::{MiddlewareLayer, MiddlewareStack};
pub use buzzlist_types::{Selection, WatchEntry, Watchlist};

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
