//! buzzlist-core
//!
//! Core types and traits shared across the buzzlist workspace.
//!
//! - `types`: domain values, configuration and reports (re-exported from `buzzlist-types`).
//! - `connector`: the `BuzzConnector` trait and capability provider traits.
//! - `memo`: the `ResolutionMemo` interface used to coalesce ticker lookups.
//! - `middleware`: the `Middleware` trait implemented by connector wrappers.
//!
//! Async runtime
//! -------------
//! Traits are runtime-agnostic `async_trait` interfaces. Concrete connectors
//! and the orchestrator run on Tokio 1.x.
#![warn(missing_docs)]

/// Connector capability traits and the primary `BuzzConnector` interface.
pub mod connector;
/// Memoization interface for run-scoped ticker resolution.
pub mod memo;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
pub mod types;

pub use connector::BuzzConnector;
pub use memo::{MemoKey, ResolutionMemo};
pub use middleware::Middleware;
pub use types::*;
