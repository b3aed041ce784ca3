//! Buzzlist builds a tradable watchlist from a news site's trending-stocks article.
//!
//! Overview
//! - Locates the "Buzzing Stocks" article and extracts the emphasized company names.
//! - Resolves each name to a ticker through quote search, restricted to one country.
//! - Keeps only tickers with enough daily price history in a fixed window.
//! - Routes every step across registered connectors in registration order,
//!   with a per-provider timeout and fallback to later connectors.
//!
//! Key behaviors
//! - The watchlist is ordered by first qualifying occurrence. A repeated name
//!   keeps its position and takes the ticker of its last qualifying occurrence.
//! - Failing to read the article is fatal (`SourceUnavailable`); any per-name
//!   failure only drops that name and is recorded in the exclusion report.
//! - Resolutions are coalesced per run: a name searched twice, or twice at the
//!   same time, hits the provider once. Failures are not remembered.
//! - With `concurrency > 1` names are evaluated in parallel, yet the result is
//!   identical to a sequential run.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use buzzlist::{Buzzlist, export};
//! use buzzlist_moneycontrol::MoneycontrolConnector;
//! use buzzlist_yahoo::YahooConnector;
//!
//! let buzz = Buzzlist::builder()
//!     .with_connector(Arc::new(MoneycontrolConnector::new_default()))
//!     .with_connector(YahooConnector::new().build())
//!     .build()?;
//! let report = buzz.watchlist_report().await?;
//! for entry in &report.watchlist {
//!     println!("{} -> {}", entry.company, entry.ticker);
//! }
//! let csv = export::to_csv(&report.watchlist)?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
/// CSV export helpers.
pub mod export;
mod router;

pub use buzzlist_core::{BuzzConfig, CacheConfig, HistoryCheck, WatchlistReport};
pub use core::{Buzzlist, BuzzlistBuilder, tag_err};
pub use router::util::collapse_errors;

pub use buzzlist_middleware::{CacheMiddleware, MemoCache};

// Re-export core types for convenience
pub use buzzlist_core::{
    ArticleLink, BuzzError, Candle, Capability, CompanyName, Exclusion, ExclusionReason,
    HistoricalSeries, HistoryWindow, NaiveDate, SearchRequest, SearchResponse, Selection,
    TickerSymbol, WatchEntry, Watchlist,
};
