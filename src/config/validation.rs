//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, URLs and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid upstream url '{url}': {reason}")]
    UpstreamUrl { url: String, reason: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("timeouts.request_secs ({request_secs}) must exceed upstream.timeout_secs ({upstream_secs})")]
    RequestTimeoutNotAboveUpstream { request_secs: u64, upstream_secs: u64 },

    #[error("asset mount '{0}' must be a literal path starting with '/' and must not be '/'")]
    AssetMount(String),

    #[error("bundle name must not be empty")]
    EmptyBundle,

    #[error("document {field} must not be empty")]
    EmptyDocumentId { field: &'static str },

    #[error("unknown log level '{0}'")]
    LogLevel(String),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),
}

/// A mount must be a plain path: no captures or wildcards the router would interpret.
fn is_literal_mount(mount: &str) -> bool {
    let trimmed = mount.trim_end_matches('/');
    if !mount.starts_with('/') || trimmed.is_empty() {
        return false;
    }
    trimmed.split('/').skip(1).all(|segment| {
        !segment.is_empty()
            && !segment.starts_with(':')
            && !segment.starts_with('*')
            && !segment.contains(['{', '}'])
    })
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    match url::Url::parse(&config.upstream.items_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.items_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.items_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "upstream.timeout_secs" });
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "upstream.connect_timeout_secs" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.request_secs" });
    }

    // The request deadline must leave room for the upstream deadline to report 504.
    if config.timeouts.request_secs != 0
        && config.upstream.timeout_secs != 0
        && config.timeouts.request_secs <= config.upstream.timeout_secs
    {
        errors.push(ValidationError::RequestTimeoutNotAboveUpstream {
            request_secs: config.timeouts.request_secs,
            upstream_secs: config.upstream.timeout_secs,
        });
    }

    if !is_literal_mount(&config.assets.mount) {
        errors.push(ValidationError::AssetMount(config.assets.mount.clone()));
    }
    if config.assets.bundle.trim().is_empty() {
        errors.push(ValidationError::EmptyBundle);
    }

    if config.document.root_id.trim().is_empty() {
        errors.push(ValidationError::EmptyDocumentId { field: "root_id" });
    }
    if config.document.state_id.trim().is_empty() {
        errors.push(ValidationError::EmptyDocumentId { field: "state_id" });
    }

    let level = config.observability.log_level.to_lowercase();
    if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.upstream.items_url = "ftp://example.com/items".into();
        config.upstream.timeout_secs = 0;
        config.assets.mount = "/".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::BindAddress("not-an-address".into())));
        assert!(errors.contains(&ValidationError::ZeroTimeout { field: "upstream.timeout_secs" }));
        assert!(errors.contains(&ValidationError::AssetMount("/".into())));
    }

    #[test]
    fn test_request_timeout_must_exceed_upstream_timeout() {
        let mut config = ServerConfig::default();
        config.timeouts.request_secs = 1;
        config.upstream.timeout_secs = 2;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::RequestTimeoutNotAboveUpstream {
                request_secs: 1,
                upstream_secs: 2,
            }])
        );

        config.timeouts.request_secs = 2;
        assert!(validate_config(&config).is_err());

        config.timeouts.request_secs = 3;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_asset_mount_must_be_literal() {
        for mount in ["/:assets", "/*assets", "/{assets}", "/static/{*rest}", "/a//b", "public", "/"] {
            let mut config = ServerConfig::default();
            config.assets.mount = mount.into();
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::AssetMount(mount.into())]),
                "{mount} should be rejected"
            );
        }

        for mount in ["/public", "/static/", "/assets/v1"] {
            let mut config = ServerConfig::default();
            config.assets.mount = mount.into();
            assert!(validate_config(&config).is_ok(), "{mount} should be accepted");
        }
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MetricsAddress("nope".into())])
        );
    }
}
