use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with the pipeline stages a connector can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Locate the trending-stocks article on the news listing page.
    LocateArticle,
    /// Extract candidate company names from an article.
    ExtractNames,
    /// Free-text quote search used for ticker resolution.
    Search,
    /// Daily price history.
    History,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LocateArticle => "locate-article",
            Self::ExtractNames => "extract-names",
            Self::Search => "search",
            Self::History => "history",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
