//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table and upstream client from configuration
//! - Assemble the HTTP server
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners are bound by the caller, after everything else is ready

use std::sync::Arc;

use thiserror::Error;

use crate::config::validation::{validate_config, ValidationError};
use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::routes::app_routes;
use crate::routing::{PathMatcher, RouteError, RouteTable};
use crate::upstream::{FetchError, HttpItemSource};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid route table: {0}")]
    Routes(#[from] RouteError),

    #[error("failed to build upstream client: {0}")]
    Upstream(#[from] FetchError),

    #[error("invalid configuration: {0:?}")]
    Config(Vec<ValidationError>),

    #[error("asset mount '{mount}' would shadow route '{route}' ({path})")]
    MountShadowsRoute {
        mount: String,
        route: &'static str,
        path: String,
    },
}

/// Reject an asset mount that would claim a page path, or a path below it.
pub fn check_asset_mount(mount: &str, routes: &RouteTable) -> Result<(), StartupError> {
    let mount_matcher = PathMatcher::new(mount, false);
    match routes.iter().find(|route| mount_matcher.matches(route.path())) {
        Some(route) => Err(StartupError::MountShadowsRoute {
            mount: mount_matcher.path().to_string(),
            route: route.key,
            path: route.path().to_string(),
        }),
        None => Ok(()),
    }
}

/// Build the server with the application routes and the HTTP upstream.
pub fn build_server(config: ServerConfig) -> Result<HttpServer, StartupError> {
    validate_config(&config).map_err(StartupError::Config)?;
    let routes = app_routes()?;
    check_asset_mount(&config.assets.mount, &routes)?;
    let source = HttpItemSource::new(&config.upstream)?;

    tracing::info!(
        routes = routes.len(),
        upstream = %source.items_url(),
        "Subsystems initialized"
    );

    Ok(HttpServer::new(config, routes, Arc::new(source)))
}
