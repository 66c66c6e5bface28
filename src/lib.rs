//! Server-side rendering with route-based data prefetching.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod render;
pub mod routes;
pub mod routing;
pub mod upstream;
pub mod view;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
