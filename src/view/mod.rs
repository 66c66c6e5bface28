//! Minimal component tree used by page components.
//!
//! Pages build a [`Node`] tree; the server renders it to a string and the
//! client bootstrap renders the same tree to compare against server markup.

pub mod escape;
pub mod node;

pub use escape::{escape_html, escape_script_json};
pub use node::{collect_listeners, el, render_to_string, BoundListener, Element, Listener, Node};
