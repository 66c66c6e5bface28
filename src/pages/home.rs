use futures_util::future::BoxFuture;

use crate::pages::{link, Component, ViewError};
use crate::upstream::{DataSource, FetchResult, Item};
use crate::view::{el, Node};

/// Action bound to the home page button.
pub const CLICK_ACTION: &str = "log-click";

/// Landing page listing the upstream items.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

/// Loader for the home route: the full upstream item list.
pub fn load_items(source: &dyn DataSource) -> BoxFuture<'_, FetchResult<serde_json::Value>> {
    Box::pin(async move {
        let items = source.fetch_items().await?;
        Ok(serde_json::to_value(items)?)
    })
}

impl Component for HomePage {
    fn name(&self) -> &'static str {
        "HomePage"
    }

    fn render(&self, data: Option<&serde_json::Value>) -> Result<Node, ViewError> {
        // Without data the list starts empty, as it does before a client fetch completes.
        let items: Vec<Item> = match data {
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| ViewError::InvalidData {
                component: self.name(),
                reason: e.to_string(),
            })?,
            None => Vec::new(),
        };

        let list = el("ul").children(
            items
                .iter()
                .map(|item| el("li").attr("data-id", item.id.to_string()).child(item.title.as_str())),
        );

        Ok(el("div")
            .child(el("h2").child("HomePage"))
            .child(el("button").attr("type", "button").on("click", CLICK_ACTION).child("click me"))
            .child(el("div").child(link("/park", "Go to Park")))
            .child(list)
            .into())
    }

    fn handle(&self, action: &str) -> bool {
        match action {
            CLICK_ACTION => {
                tracing::info!(component = self.name(), "oh, you clicked me");
                true
            }
            _ => false,
        }
    }
}
