//! Domain values flowing through the scrape, resolve and filter pipeline.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::BuzzError;

/// Free-text company label extracted from article markup.
///
/// Used as the display label and as the resolver's query key. No normalization
/// is applied beyond the cleaning done by the name extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    /// Wrap a cleaned name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the label has no non-whitespace characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompanyName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CompanyName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Opaque instrument identifier in the market-data provider's namespace.
///
/// The empty symbol means "unresolved". It is a valid resolver outcome and never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Wrap a provider symbol (e.g. `RELIANCE.NS`).
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The empty, unresolved symbol.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self(String::new())
    }

    /// True when the symbol is non-empty.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.0.is_empty()
    }

    /// Borrow the raw symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TickerSymbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Anchor discovered on the news listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleLink {
    /// Value of the anchor's `title` attribute.
    pub title: String,
    /// Absolute article URL.
    pub href: String,
}

/// Inclusive calendar window for daily history requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryWindow {
    start: NaiveDate,
    end: NaiveDate,
}

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl HistoryWindow {
    /// Build a window, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `BuzzError::InvalidArg` when the window is inverted.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, BuzzError> {
        if start > end {
            return Err(BuzzError::InvalidArg(format!(
                "history window start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for HistoryWindow {
    /// 2010-01-01 through 2023-12-31.
    fn default() -> Self {
        Self {
            start: ymd(2010, 1, 1),
            end: ymd(2023, 12, 31),
        }
    }
}

/// One daily price observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Trading day in the exchange's local calendar.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Session high.
    pub high: Decimal,
    /// Session low.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume when reported.
    pub volume: Option<u64>,
}

/// Ordered daily observations for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    /// Symbol the series belongs to.
    pub symbol: TickerSymbol,
    /// Observations in ascending date order.
    pub candles: Vec<Candle>,
}

/// Descriptive statistics over a series' closing prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Number of observations.
    pub observations: usize,
    /// Earliest date.
    pub first: NaiveDate,
    /// Latest date.
    pub last: NaiveDate,
    /// Lowest close.
    pub min_close: Decimal,
    /// Highest close.
    pub max_close: Decimal,
    /// Arithmetic mean of closes.
    pub mean_close: Decimal,
}

impl HistoricalSeries {
    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// True when the provider returned no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Summarize the closes, or `None` for an empty series.
    #[must_use]
    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = self.candles.first()?;
        let last = self.candles.last()?;
        let mut min_close = first.close;
        let mut max_close = first.close;
        let mut total = Decimal::ZERO;
        for c in &self.candles {
            min_close = min_close.min(c.close);
            max_close = max_close.max(c.close);
            total += c.close;
        }
        let observations = self.candles.len();
        Some(SeriesSummary {
            observations,
            first: first.date,
            last: last.date,
            min_close,
            max_close,
            mean_close: total / Decimal::from(observations),
        })
    }
}

/// Free-text quote search request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRequest {
    query: String,
    country: Option<String>,
    limit: usize,
}

impl SearchRequest {
    /// New request for `query` with a single result and no country restriction.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            country: None,
            limit: 1,
        }
    }

    /// Restrict matches to a country (e.g. "India").
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Maximum number of quote results requested.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Country restriction, if any.
    #[must_use]
    pub fn country_filter(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Requested result count.
    #[must_use]
    pub const fn max_results(&self) -> usize {
        self.limit
    }
}

/// One quote match returned by a search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Provider symbol.
    pub symbol: TickerSymbol,
    /// Display name when provided.
    pub name: Option<String>,
    /// Exchange code when provided.
    pub exchange: Option<String>,
    /// Instrument type label (e.g. "EQUITY").
    pub kind: Option<String>,
}

/// Ordered search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches, best first.
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// Symbol of the best match, or the unresolved symbol when there are no matches.
    #[must_use]
    pub fn best_symbol(&self) -> TickerSymbol {
        self.hits
            .first()
            .map_or_else(TickerSymbol::unresolved, |h| h.symbol.clone())
    }
}
