//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → static assets (ServeDir)  or  render handler
//!     → routing → loader → render → document
//!     → response.rs (error pages for failed renders)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{render_page, AppState, HttpServer, RenderedPage};
