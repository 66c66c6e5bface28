//! Component tree nodes and string rendering.

use std::fmt::Write;

use crate::view::escape::escape_html;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node in a rendered component tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

/// An HTML element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    /// Event bindings; only attached on the client, never written to markup.
    pub listeners: Vec<Listener>,
}

/// Binds a DOM event to a named component action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub event: &'static str,
    pub action: &'static str,
}

/// A listener together with the element it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundListener {
    pub tag: &'static str,
    pub event: &'static str,
    pub action: &'static str,
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn on(mut self, event: &'static str, action: &'static str) -> Self {
        self.listeners.push(Listener { event, action });
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Start building an element.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
        listeners: Vec::new(),
    }
}

/// Every listener in the tree, in document order.
pub fn collect_listeners(node: &Node) -> Vec<BoundListener> {
    let mut out = Vec::new();
    push_listeners(&mut out, node);
    out
}

fn push_listeners(out: &mut Vec<BoundListener>, node: &Node) {
    match node {
        Node::Text(_) => {}
        Node::Fragment(nodes) => nodes.iter().for_each(|node| push_listeners(out, node)),
        Node::Element(element) => {
            out.extend(element.listeners.iter().map(|l| BoundListener {
                tag: element.tag,
                event: l.event,
                action: l.action,
            }));
            for child in &element.children {
                push_listeners(out, child);
            }
        }
    }
}

/// Render a tree to an HTML string.
pub fn render_to_string(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape_html(text)),
        Node::Fragment(nodes) => {
            for node in nodes {
                write_node(out, node);
            }
        }
        Node::Element(element) => {
            out.push('<');
            out.push_str(element.tag);
            for (name, value) in &element.attrs {
                // Writing to a String cannot fail.
                let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&element.tag) {
                return;
            }
            for child in &element.children {
                write_node(out, child);
            }
            let _ = write!(out, "</{}>", element.tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let tree: Node = el("div")
            .attr("class", "box")
            .child(el("h2").child("Title"))
            .child(el("p").child("a < b"))
            .into();

        assert_eq!(
            render_to_string(&tree),
            r#"<div class="box"><h2>Title</h2><p>a &lt; b</p></div>"#
        );
    }

    #[test]
    fn test_attribute_values_escaped() {
        let tree: Node = el("a").attr("href", "/?q=\"x\"&y").child("go").into();
        assert_eq!(
            render_to_string(&tree),
            r#"<a href="/?q=&quot;x&quot;&amp;y">go</a>"#
        );
    }

    #[test]
    fn test_listeners_not_rendered() {
        let tree: Node = el("div")
            .child(el("button").on("click", "save").child("save"))
            .child(Node::Fragment(vec![el("a").on("mouseover", "hint").into()]))
            .into();

        assert_eq!(render_to_string(&tree), "<div><button>save</button><a></a></div>");
        assert_eq!(
            collect_listeners(&tree),
            vec![
                BoundListener { tag: "button", event: "click", action: "save" },
                BoundListener { tag: "a", event: "mouseover", action: "hint" },
            ]
        );
    }

    #[test]
    fn test_void_and_fragment() {
        let tree = Node::Fragment(vec![
            el("br").into(),
            "text".into(),
            el("ul").children(Vec::<Node>::new()).into(),
        ]);
        assert_eq!(render_to_string(&tree), "<br>text<ul></ul>");
    }
}
