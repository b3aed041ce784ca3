//! Builder for composing connectors with middleware layers.
//!
//! # Middleware Ordering Convention
//!
//! Middleware layers form an "onion" around the raw connector:
//!
//! ```text
//! Orchestrator call
//!     ↓
//! Outermost Middleware (added last)
//!     ↓
//! Cache (answers repeated search/history calls)
//!     ↓
//! Raw Connector (e.g., Yahoo - makes actual HTTP calls)
//! ```
//!
//! The `layers` vector stores middleware in **outermost-first** order (last
//! added = outermost) and they are **applied in reverse** during `build()`.
//! This matches [`MiddlewareStack`](buzzlist_types::MiddlewareStack) where
//! `layers[0]` is the outermost layer.

use std::sync::Arc;

use buzzlist_core::Middleware;
use buzzlist_core::connector::BuzzConnector;
use buzzlist_types::{CacheConfig, MiddlewareLayer, MiddlewareStack};
use serde_json::json;

use crate::cache::CacheMiddleware;

const CACHE_LAYER: &str = "CacheMiddleware";

/// Generic middleware builder for composing a connector with layered wrappers.
///
/// See [module-level documentation](self) for details on middleware ordering.
pub struct ConnectorBuilder {
    raw: Arc<dyn BuzzConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn BuzzConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the caching layer.
    ///
    /// The cache is placed at the outermost position so repeated calls never
    /// reach inner layers. An existing cache layer is removed first.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self.layers
            .insert(0, Box::new(CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove the caching layer if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Export the current middleware stack configuration for inspection.
    ///
    /// The raw connector is appended as the innermost "layer" for observability.
    #[must_use]
    pub fn to_stack(&self) -> MiddlewareStack {
        let mut stack = MiddlewareStack::new();
        for layer in &self.layers {
            stack.push_inner(MiddlewareLayer::new(layer.name(), layer.config_json()));
        }
        stack.push_inner(MiddlewareLayer::new(
            "RawConnector",
            json!({ "name": self.raw.name() }),
        ));
        stack
    }

    /// Construct a builder from a raw connector and an explicit stack.
    ///
    /// Inverse of [`to_stack`](Self::to_stack). Unknown layer names are ignored.
    #[must_use]
    pub fn from_stack(raw: Arc<dyn BuzzConnector>, stack: &MiddlewareStack) -> Self {
        let mut layers: Vec<Box<dyn Middleware>> = Vec::new();
        for l in &stack.layers {
            if l.name == CACHE_LAYER {
                let defaults = CacheConfig::default();
                let flag = |k: &str, d: bool| {
                    l.config
                        .get(k)
                        .and_then(serde_json::Value::as_bool)
                        .unwrap_or(d)
                };
                let cfg = CacheConfig {
                    search: flag("search", defaults.search),
                    history: flag("history", defaults.history),
                    max_capacity: l
                        .config
                        .get("max_capacity")
                        .and_then(serde_json::Value::as_u64),
                };
                layers.push(Box::new(CacheMiddleware::new(cfg)));
            }
        }
        Self { raw, layers }
    }

    /// Build the wrapped connector according to the captured stack.
    ///
    /// Layers are applied innermost first, so `layers = [A, B]` yields `A(B(raw))`.
    #[must_use]
    pub fn build(self) -> Arc<dyn BuzzConnector> {
        let mut acc: Arc<dyn BuzzConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
