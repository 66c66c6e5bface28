//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the render handler and static assets
//! - Wire up middleware (tracing, request timeout, request ID)
//! - Bind server to listener with graceful shutdown
//! - Match the path, load route data, render, and embed hydration state

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;
use crate::pages::NOT_FOUND;
use crate::render::{load_route_data, render_component, DocumentShell, HydrationState, RenderError};
use crate::routing::RouteTable;
use crate::upstream::DataSource;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub source: Arc<dyn DataSource>,
    pub shell: Arc<DocumentShell>,
    pub upstream_deadline: Duration,
}

/// A rendered page ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    /// Key of the matched route, `None` for the not-found page.
    pub route: Option<&'static str>,
    pub html: String,
}

/// HTTP server for the render service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server from configuration, a route table and a data source.
    pub fn new(config: ServerConfig, routes: RouteTable, source: Arc<dyn DataSource>) -> Self {
        let state = AppState {
            routes: Arc::new(routes),
            source,
            shell: Arc::new(DocumentShell::new(&config.document, &config.assets)),
            upstream_deadline: Duration::from_secs(config.upstream.timeout_secs),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let mount = config.assets.mount.trim_end_matches('/');

        Router::new()
            .route("/", any(render_handler))
            .nest_service(mount, ServeDir::new(&config.assets.dir))
            .fallback(render_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C, SIGTERM or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            assets = %self.config.assets.dir,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Render the page for `path`: match, load, render, wrap in the document shell.
pub async fn render_page(state: &AppState, path: &str) -> Result<RenderedPage, RenderError> {
    let Some(route) = state.routes.match_path(path) else {
        let markup = render_component(&NOT_FOUND, None)?;
        return Ok(RenderedPage {
            status: StatusCode::NOT_FOUND,
            route: None,
            html: state.shell.render(&markup, None)?,
        });
    };

    let data = load_route_data(route, state.source.as_ref(), state.upstream_deadline).await?;
    let markup = render_component(route.component, data.as_ref())?;
    let hydration = HydrationState::new(route.key, data);

    Ok(RenderedPage {
        status: StatusCode::OK,
        route: Some(route.key),
        html: state.shell.render(&markup, Some(&hydration))?,
    })
}

/// Page handler for `/` and every path not claimed by static assets.
async fn render_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);
    let path = uri.path();

    if method != Method::GET && method != Method::HEAD {
        tracing::debug!(request_id = %request_id, method = %method, path = %path, "Method not allowed");
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, HeaderValue::from_static("GET, HEAD"))],
        )
            .into_response();
    }

    tracing::debug!(request_id = %request_id, path = %path, "Rendering page");

    let response = match render_page(&state, path).await {
        Ok(page) => {
            let route = page.route.unwrap_or("none");
            if page.route.is_none() {
                tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            }
            tracing::info!(
                request_id = %request_id,
                path = %path,
                route = route,
                status = page.status.as_u16(),
                elapsed = ?start_time.elapsed(),
                "Page rendered"
            );
            metrics::record_request(route, page.status.as_u16(), start_time);
            (page.status, Html(page.html)).into_response()
        }
        Err(e) => {
            let route = state.routes.match_path(path).map_or("none", |r| r.key);
            tracing::error!(request_id = %request_id, path = %path, route = route, error = %e, "Render failed");
            metrics::record_request(route, e.status().as_u16(), start_time);
            e.into_response()
        }
    };

    // HEAD gets the status and headers a GET would, without the document.
    if method == Method::HEAD {
        let (parts, _) = response.into_parts();
        return Response::from_parts(parts, Body::empty());
    }
    response
}
