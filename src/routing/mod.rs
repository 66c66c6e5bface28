//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → router.rs (ordered table scan)
//!     → matcher.rs (exact / segment-prefix comparison)
//!     → Return: matched RouteDescriptor or None
//!
//! Table construction (once, at startup):
//!     routes.rs descriptors
//!     → reject duplicate keys / paths
//!     → freeze as immutable RouteTable, shared via Arc
//! ```
//!
//! # Design Decisions
//! - The same table drives server rendering and client hydration
//! - Deterministic: same path always matches same route
//! - First match wins (table order)

pub mod matcher;
pub mod router;

pub use matcher::PathMatcher;
pub use router::{Loader, RouteDescriptor, RouteError, RouteTable};
