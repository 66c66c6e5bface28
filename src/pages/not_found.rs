use crate::pages::{link, Component, ViewError};
use crate::view::{el, Node};

/// Rendered for paths that match no route.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundPage;

impl Component for NotFoundPage {
    fn name(&self) -> &'static str {
        "NotFound"
    }

    fn render(&self, _data: Option<&serde_json::Value>) -> Result<Node, ViewError> {
        Ok(el("div")
            .child(el("h2").child("Page not found"))
            .child(el("div").child(link("/", "Back to Home")))
            .into())
    }
}
