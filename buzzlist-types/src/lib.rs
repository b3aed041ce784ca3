//! Buzzlist data transfer objects, configuration and the shared error type.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod domain;
mod error;
mod middleware;
mod reports;
mod watchlist;

pub use capability::Capability;
pub use config::{BuzzConfig, CacheConfig};
pub use connector::ConnectorKey;
pub use domain::{
    ArticleLink, Candle, CompanyName, HistoricalSeries, HistoryWindow, SearchHit, SearchRequest,
    SearchResponse, SeriesSummary, TickerSymbol,
};
pub use error::BuzzError;
pub use middleware::{MiddlewareLayer, MiddlewareStack};
pub use reports::{Exclusion, ExclusionReason, HistoryCheck, WatchlistReport};
pub use watchlist::{Selection, WatchEntry, Watchlist};
