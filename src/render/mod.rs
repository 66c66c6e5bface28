//! Server-side rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Matched RouteDescriptor
//!     → loader (optional, via upstream::DataSource)
//!     → Component::render → view::render_to_string
//!     → document.rs (HTML shell + state.rs hydration script)
//! ```

pub mod document;
pub mod state;

use std::time::Duration;

use thiserror::Error;

use crate::pages::{Component, ViewError};
use crate::routing::RouteDescriptor;
use crate::upstream::{DataSource, FetchError};
use crate::view::render_to_string;

pub use document::DocumentShell;
pub use state::HydrationState;

/// Failures while producing a page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Upstream(#[from] FetchError),

    #[error("upstream did not answer within {0} seconds")]
    UpstreamTimeout(u64),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("hydration state could not be serialized: {0}")]
    State(#[from] serde_json::Error),
}

/// Run the route's loader, bounded by `deadline`. Routes without a loader yield `None`.
pub async fn load_route_data(
    route: &RouteDescriptor,
    source: &dyn DataSource,
    deadline: Duration,
) -> Result<Option<serde_json::Value>, RenderError> {
    let Some(loader) = route.loader else {
        return Ok(None);
    };

    match tokio::time::timeout(deadline, loader(source)).await {
        Ok(result) => Ok(Some(result?)),
        Err(_) => Err(RenderError::UpstreamTimeout(deadline.as_secs())),
    }
}

/// Render a component to markup.
pub fn render_component(
    component: &dyn Component,
    data: Option<&serde_json::Value>,
) -> Result<String, ViewError> {
    Ok(render_to_string(&component.render(data)?))
}
