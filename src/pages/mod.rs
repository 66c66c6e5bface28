//! Page components.
//!
//! A component turns an optional route payload into a view tree. The same
//! component values are used by the render server and the client bootstrap,
//! so both sides produce identical markup for identical data.

pub mod home;
pub mod not_found;
pub mod park;

use thiserror::Error;

use crate::view::{el, Element, Node};

pub use home::{load_items, HomePage, CLICK_ACTION};
pub use not_found::NotFoundPage;
pub use park::ParkPage;

pub static HOME: HomePage = HomePage;
pub static PARK: ParkPage = ParkPage;
pub static NOT_FOUND: NotFoundPage = NotFoundPage;

/// Errors raised while rendering a component.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The route payload did not have the shape the component expects.
    #[error("{component} received invalid data: {reason}")]
    InvalidData {
        component: &'static str,
        reason: String,
    },
}

/// A presentational unit rendered for a route.
pub trait Component: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Build the view tree for the given payload.
    fn render(&self, data: Option<&serde_json::Value>) -> Result<Node, ViewError>;

    /// Run a named action bound by one of the component's listeners.
    /// Returns false for actions the component does not know.
    fn handle(&self, _action: &str) -> bool {
        false
    }
}

/// In-app navigation link.
pub fn link(to: &str, label: &str) -> Element {
    el("a").attr("href", to).child(label)
}
