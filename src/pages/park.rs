use crate::pages::{link, Component, ViewError};
use crate::view::{el, Node};

/// Static page with no data dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParkPage;

impl Component for ParkPage {
    fn name(&self) -> &'static str {
        "Park"
    }

    fn render(&self, _data: Option<&serde_json::Value>) -> Result<Node, ViewError> {
        Ok(el("div")
            .child(el("h2").child("Park"))
            .child(el("div").child(link("/", "Back to Home")))
            .into())
    }
}
