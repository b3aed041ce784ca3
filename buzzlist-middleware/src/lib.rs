//! buzzlist-middleware
//!
//! Connector wrappers and the moka-backed resolution memo.

mod builder;
mod cache;
mod memo;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
pub use crate::memo::MemoCache;
