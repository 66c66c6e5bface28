//! Upstream data subsystem.
//!
//! # Data Flow
//! ```text
//! Route loader (routing::Loader)
//!     → DataSource::fetch_items
//!     → client.rs (HTTP GET, JSON decode)
//!     → Vec<Item> → serialized payload for rendering and hydration
//! ```
//!
//! # Design Decisions
//! - Loaders see the source as a trait object so tests can count fetches
//! - Read-only: the upstream is never written to
//! - No caching and no retries; each render performs its own fetch

pub mod client;
pub mod types;

use futures_util::future::BoxFuture;

pub use client::HttpItemSource;
pub use types::{FetchError, FetchResult, Item};

/// Something that can produce the item list a route loader needs.
pub trait DataSource: Send + Sync {
    fn fetch_items(&self) -> BoxFuture<'_, FetchResult<Vec<Item>>>;
}
