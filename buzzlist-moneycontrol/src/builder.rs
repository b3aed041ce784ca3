use std::sync::Arc;

use buzzlist_core::connector::BuzzConnector;
use buzzlist_middleware::ConnectorBuilder as GenericConnectorBuilder;

use crate::MoneycontrolConnector;

/// Builder type alias specialized for moneycontrol connectors.
pub type MoneycontrolConnectorBuilder = GenericConnectorBuilder;

impl MoneycontrolConnector {
    /// Returns an unconfigured builder with the default connector.
    ///
    /// Article discovery and extraction are never cached, so a cache layer
    /// added here only forwards.
    #[must_use]
    pub fn new() -> MoneycontrolConnectorBuilder {
        let raw: Arc<dyn BuzzConnector> = Arc::new(Self::new_default());
        GenericConnectorBuilder::new(raw)
    }

    /// Expert-only: construct an unwrapped connector for manual composition.
    #[must_use]
    pub fn new_raw() -> Self {
        Self::new_default()
    }
}
