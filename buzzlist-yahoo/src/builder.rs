use std::sync::Arc;

use buzzlist_core::CacheConfig;
use buzzlist_core::connector::BuzzConnector;
use buzzlist_middleware::ConnectorBuilder as GenericConnectorBuilder;

use crate::YahooConnector;

/// Builder type alias specialized for Yahoo connectors.
pub type YahooConnectorBuilder = GenericConnectorBuilder;

impl YahooConnector {
    /// Returns an unconfigured builder with the default connector.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    pub fn new() -> YahooConnectorBuilder {
        let raw: Arc<dyn BuzzConnector> = Arc::new(Self::new_default());
        GenericConnectorBuilder::new(raw)
    }

    /// Returns a builder that caches search and history responses for the
    /// lifetime of the built connector.
    ///
    /// Useful when one process runs the pipeline repeatedly.
    #[must_use]
    pub fn cached() -> YahooConnectorBuilder {
        let raw: Arc<dyn BuzzConnector> = Arc::new(Self::new_default());
        GenericConnectorBuilder::new(raw).with_cache(&CacheConfig::default())
    }

    /// Expert-only: construct an unwrapped connector for manual composition.
    #[must_use]
    pub fn new_raw() -> Self {
        Self::new_default()
    }
}
