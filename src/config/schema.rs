//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the render server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the render server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream data endpoint used by route loaders.
    pub upstream: UpstreamConfig,

    /// Static asset serving for the client bundle.
    pub assets: AssetsConfig,

    /// HTML document shell settings.
    pub document: DocumentConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Upstream JSON endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// URL returning the item list consumed by the home page.
    pub items_url: String,

    /// Deadline for a single upstream fetch in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// User-Agent sent with upstream requests.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            items_url: "https://jsonplaceholder.typicode.com/todos".to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
            user_agent: concat!("ssr-server/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the compiled client bundle.
    pub dir: String,

    /// URL prefix the directory is mounted under.
    pub mount: String,

    /// Bundle file name inside `dir`.
    pub bundle: String,
}

impl AssetsConfig {
    /// Public URL of the client bundle.
    pub fn bundle_src(&self) -> String {
        format!("{}/{}", self.mount.trim_end_matches('/'), self.bundle)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
            mount: "/public".to_string(),
            bundle: "index.js".to_string(),
        }
    }
}

/// HTML shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Document title.
    pub title: String,

    /// Id of the element the application mounts into.
    pub root_id: String,

    /// Id of the script element carrying hydration state.
    pub state_id: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "React Server Side Render".to_string(),
            root_id: "root".to_string(),
            state_id: "__SSR_STATE__".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
