//! Attaching the component tree to server-rendered markup.

use thiserror::Error;

use crate::pages::{Component, ViewError, NOT_FOUND};
use crate::render::{DocumentShell, HydrationState};
use crate::routing::RouteTable;
use crate::upstream::{DataSource, FetchError};
use crate::view::{collect_listeners, render_to_string, BoundListener};

/// Errors raised while hydrating a document.
#[derive(Debug, Error)]
pub enum HydrationError {
    #[error("document has no root element")]
    MissingRoot,

    #[error("hydration state is malformed: {0}")]
    MalformedState(#[from] serde_json::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("client markup for '{route}' does not match server markup")]
    Mismatch {
        route: String,
        server: String,
        client: String,
    },
}

/// Outcome of a successful hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hydrated {
    /// Key of the hydrated route, `None` for the not-found page.
    pub route: Option<String>,
    /// Markup the client produced (identical to the server's).
    pub markup: String,
    /// Whether the client had to run the route loader itself.
    pub fetched: bool,
    /// Event listeners attached to the hydrated tree, in document order.
    pub listeners: Vec<BoundListener>,
}

/// Client entry point: hydrates server markup using the shared route table.
pub struct Hydrator<'a> {
    routes: &'a RouteTable,
    source: &'a dyn DataSource,
}

impl<'a> Hydrator<'a> {
    pub fn new(routes: &'a RouteTable, source: &'a dyn DataSource) -> Self {
        Self { routes, source }
    }

    /// Hydrate `server_markup` for `path`.
    ///
    /// State is only reused when it was produced for the route that matches
    /// `path`; otherwise the loader runs as on a client-only render.
    pub async fn hydrate(
        &self,
        path: &str,
        server_markup: &str,
        state: Option<HydrationState>,
    ) -> Result<Hydrated, HydrationError> {
        let route = self.routes.match_path(path);

        let (key, component, data, fetched): (Option<&str>, &dyn Component, _, bool) = match route {
            None => (None, &NOT_FOUND, None, false),
            Some(route) => match state {
                Some(state) if state.route == route.key => {
                    (Some(route.key), route.component, state.data, false)
                }
                _ => match route.loader {
                    Some(loader) => {
                        tracing::debug!(route = route.key, "No hydration state, running loader");
                        (Some(route.key), route.component, Some(loader(self.source).await?), true)
                    }
                    None => (Some(route.key), route.component, None, false),
                },
            },
        };

        let tree = component.render(data.as_ref())?;
        let markup = render_to_string(&tree);
        if markup != server_markup {
            return Err(HydrationError::Mismatch {
                route: key.unwrap_or(component.name()).to_string(),
                server: server_markup.to_string(),
                client: markup,
            });
        }

        let listeners = collect_listeners(&tree);
        tracing::debug!(route = ?key, fetched, listeners = listeners.len(), "Hydrated");
        Ok(Hydrated {
            route: key.map(str::to_string),
            markup,
            fetched,
            listeners,
        })
    }

    /// Deliver `event` on the first hydrated `tag` element listening for it.
    /// Returns whether a component action ran.
    pub fn dispatch(&self, hydrated: &Hydrated, tag: &str, event: &str) -> bool {
        let Some(listener) = hydrated
            .listeners
            .iter()
            .find(|l| l.tag == tag && l.event == event)
        else {
            return false;
        };

        let component: &dyn Component = match hydrated.route.as_deref() {
            Some(key) => match self.routes.get(key) {
                Some(route) => route.component,
                None => return false,
            },
            None => &NOT_FOUND,
        };
        component.handle(listener.action)
    }

    /// Hydrate a complete server HTML document.
    pub async fn hydrate_document(
        &self,
        shell: &DocumentShell,
        path: &str,
        html: &str,
    ) -> Result<Hydrated, HydrationError> {
        let markup = shell.extract_root(html).ok_or(HydrationError::MissingRoot)?;
        let state = shell
            .extract_state_text(html)
            .map(HydrationState::from_script_json)
            .transpose()?;
        self.hydrate(path, markup, state).await
    }
}
