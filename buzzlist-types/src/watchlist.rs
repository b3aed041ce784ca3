//! The ordered name to ticker mapping produced by a pipeline run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CompanyName, TickerSymbol};

/// One watchlist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchEntry {
    /// Company label as extracted.
    pub company: CompanyName,
    /// Resolved, history-qualified symbol.
    pub ticker: TickerSymbol,
}

/// Ordered mapping from company name to ticker.
///
/// Iteration follows first-insertion order. Re-inserting an existing name
/// replaces its ticker but keeps its position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<WatchEntry>", into = "Vec<WatchEntry>")]
pub struct Watchlist {
    entries: Vec<WatchEntry>,
    index: HashMap<CompanyName, usize>,
}

impl Watchlist {
    /// Empty watchlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous ticker for `company`, if any.
    pub fn insert(&mut self, company: CompanyName, ticker: TickerSymbol) -> Option<TickerSymbol> {
        if let Some(&pos) = self.index.get(&company) {
            return Some(std::mem::replace(&mut self.entries[pos].ticker, ticker));
        }
        self.index.insert(company.clone(), self.entries.len());
        self.entries.push(WatchEntry { company, ticker });
        None
    }

    /// Ticker for `company`.
    #[must_use]
    pub fn get(&self, company: &CompanyName) -> Option<&TickerSymbol> {
        self.index.get(company).map(|&i| &self.entries[i].ticker)
    }

    /// Whether `company` is present.
    #[must_use]
    pub fn contains(&self, company: &CompanyName) -> bool {
        self.index.contains_key(company)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no candidate qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WatchEntry> {
        self.entries.iter()
    }

    /// Company names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &CompanyName> {
        self.entries.iter().map(|e| &e.company)
    }

    /// Pick one entry for downstream consumers (history display, forecasting).
    #[must_use]
    pub fn select(&self, company: &CompanyName) -> Option<Selection> {
        self.get(company).map(|ticker| Selection {
            company: company.clone(),
            ticker: ticker.clone(),
        })
    }
}

impl PartialEq for Watchlist {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Watchlist {}

impl From<Vec<WatchEntry>> for Watchlist {
    fn from(entries: Vec<WatchEntry>) -> Self {
        entries
            .into_iter()
            .map(|e| (e.company, e.ticker))
            .collect()
    }
}

impl From<Watchlist> for Vec<WatchEntry> {
    fn from(w: Watchlist) -> Self {
        w.entries
    }
}

impl FromIterator<(CompanyName, TickerSymbol)> for Watchlist {
    fn from_iter<T: IntoIterator<Item = (CompanyName, TickerSymbol)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (company, ticker) in iter {
            out.insert(company, ticker);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a WatchEntry;
    type IntoIter = std::slice::Iter<'a, WatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The entry a user picked from the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected company.
    pub company: CompanyName,
    /// Its ticker.
    pub ticker: TickerSymbol,
}
