//! Client bootstrap.
//!
//! # Data Flow
//! ```text
//! Server HTML document
//!     → DocumentShell::extract_root / extract_state_text
//!     → HydrationState (parsed once, passed explicitly)
//!     → hydrate(): same RouteTable, same components
//!         state present for route → reuse payload, no fetch
//!         state absent             → run the route loader
//!     → rendered markup compared with server markup
//!     → listeners collected; dispatch() routes events to component actions
//! ```
//!
//! # Design Decisions
//! - State is a parameter, never read from global scope
//! - A markup mismatch is an error rather than a silent re-render

pub mod hydrate;

pub use hydrate::{Hydrated, HydrationError, Hydrator};
