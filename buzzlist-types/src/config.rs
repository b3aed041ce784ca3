//! Configuration types shared across the orchestrator and middleware.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{HistoryWindow, ymd};

/// Global configuration for the `Buzzlist` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuzzConfig {
    /// Country restriction passed to quote search.
    pub country: String,
    /// Number of quote results requested per search.
    pub quotes_count: usize,
    /// Minimum daily observations in `history_window` for a symbol to qualify.
    pub min_observations: usize,
    /// Window the history gate counts observations in.
    pub history_window: HistoryWindow,
    /// Candidates resolved and gated concurrently. `1` runs sequentially.
    pub concurrency: usize,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Coalesce repeated resolutions of the same name within a run.
    pub memoize_resolution: bool,
    /// First day of the history fetched for a selected stock.
    pub selection_start: NaiveDate,
}

impl Default for BuzzConfig {
    fn default() -> Self {
        Self {
            country: "India".to_string(),
            quotes_count: 1,
            min_observations: 50,
            history_window: HistoryWindow::default(),
            concurrency: 1,
            provider_timeout: Duration::from_secs(10),
            memoize_resolution: true,
            selection_start: ymd(2015, 1, 1),
        }
    }
}

/// Settings for the process-lifetime caching middleware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache search responses.
    pub search: bool,
    /// Cache history series.
    pub history: bool,
    /// Maximum entries per capability. `None` never evicts.
    pub max_capacity: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            search: true,
            history: true,
            max_capacity: None,
        }
    }
}
