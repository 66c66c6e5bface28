//! Hydration state handed from the render server to the client.

use serde::{Deserialize, Serialize};

use crate::view::escape_script_json;

/// What the server rendered, and with which data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationState {
    /// Key of the route the server rendered.
    pub route: String,
    /// Loader payload, absent for routes without a loader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl HydrationState {
    pub fn new(route: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            route: route.into(),
            data,
        }
    }

    /// JSON text safe to place inside a `<script>` element.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(escape_script_json(&serde_json::to_string(self)?))
    }

    /// Parse state previously produced by [`HydrationState::to_script_json`].
    pub fn from_script_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text.trim())
    }
}
