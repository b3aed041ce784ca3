//! Middleware trait for wrapping `BuzzConnector` implementations.

use std::sync::Arc;

use crate::connector::BuzzConnector;

/// Trait implemented by connector middleware layers.
///
/// A middleware consumes an inner `BuzzConnector` and returns a wrapped connector
/// that augments its behavior (e.g., caching search and history responses).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner connector and return the wrapped connector.
    fn apply(self: Box<Self>, inner: Arc<dyn BuzzConnector>) -> Arc<dyn BuzzConnector>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
