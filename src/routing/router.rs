//! Route table and lookup.
//!
//! # Responsibilities
//! - Store route descriptors in declaration order
//! - Look up the matching descriptor for a path
//! - Return the matched descriptor or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in table order; first match wins
//! - Duplicate keys or paths are rejected up front

use std::collections::HashSet;
use std::fmt;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::pages::Component;
use crate::routing::matcher::PathMatcher;
use crate::upstream::{DataSource, FetchResult};

/// Async data dependency of a route. The payload is what gets rendered
/// and embedded for hydration.
pub type Loader = for<'a> fn(&'a dyn DataSource) -> BoxFuture<'a, FetchResult<serde_json::Value>>;

/// Static record binding a path to a component and optional data dependency.
pub struct RouteDescriptor {
    /// Stable identifier, also written into hydration state.
    pub key: &'static str,
    /// Path matcher (carries the path and the `exact` flag).
    pub matcher: PathMatcher,
    /// Component rendered for this route.
    pub component: &'static dyn Component,
    /// Data loaded before rendering, if any.
    pub loader: Option<Loader>,
}

impl RouteDescriptor {
    pub fn new(key: &'static str, path: &str, exact: bool, component: &'static dyn Component) -> Self {
        Self {
            key,
            matcher: PathMatcher::new(path, exact),
            component,
            loader: None,
        }
    }

    pub fn with_loader(mut self, loader: Loader) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn path(&self) -> &str {
        self.matcher.path()
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("key", &self.key)
            .field("matcher", &self.matcher)
            .field("component", &self.component.name())
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}

/// Errors building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("duplicate route key '{0}'")]
    DuplicateKey(&'static str),

    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate keys and paths.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteError> {
        let mut keys = HashSet::new();
        let mut paths = HashSet::new();
        for route in &routes {
            if !keys.insert(route.key) {
                return Err(RouteError::DuplicateKey(route.key));
            }
            if !paths.insert(route.path().to_string()) {
                return Err(RouteError::DuplicatePath(route.path().to_string()));
            }
        }
        Ok(Self { routes })
    }

    /// First route whose matcher accepts the path, in table order.
    pub fn match_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.matcher.matches(path))
    }

    /// Look up a route by its key.
    pub fn get(&self, key: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
