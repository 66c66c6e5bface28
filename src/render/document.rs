//! HTML document shell.
//!
//! # Layout
//! ```text
//! <!DOCTYPE html>
//! <html>
//! <head> charset, title </head>
//! <body>
//! <div id="{root_id}">{server markup}</div>
//! <script id="{state_id}" type="application/json">{state}</script>
//! <script src="{bundle}"></script>
//! </body>
//! </html>
//! ```
//!
//! The extractors below read the same layout back on the client side.

use crate::config::{AssetsConfig, DocumentConfig};
use crate::render::state::HydrationState;
use crate::view::escape_html;

/// Renders pages into the HTML document and reads them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentShell {
    title: String,
    root_id: String,
    state_id: String,
    bundle_src: String,
}

impl DocumentShell {
    pub fn new(document: &DocumentConfig, assets: &AssetsConfig) -> Self {
        Self {
            title: document.title.clone(),
            root_id: document.root_id.clone(),
            state_id: document.state_id.clone(),
            bundle_src: assets.bundle_src(),
        }
    }

    /// Wrap rendered markup and optional state into a full document.
    pub fn render(&self, markup: &str, state: Option<&HydrationState>) -> Result<String, serde_json::Error> {
        let state_script = match state {
            Some(state) => format!(
                "<script id=\"{}\" type=\"application/json\">{}</script>\n",
                escape_html(&self.state_id),
                state.to_script_json()?
            ),
            None => String::new(),
        };

        Ok(format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             {root_open}{markup}</div>\n\
             {state_script}\
             <script src=\"{bundle}\"></script>\n\
             </body>\n\
             </html>\n",
            title = escape_html(&self.title),
            root_open = self.root_open_tag(),
            bundle = escape_html(&self.bundle_src),
        ))
    }

    /// Server markup inside the root element, if present.
    pub fn extract_root<'a>(&self, html: &'a str) -> Option<&'a str> {
        let open = self.root_open_tag();
        let start = html.find(&open)? + open.len();
        let end_of_body = html[start..].find("</body>").map_or(html.len(), |i| start + i);
        // Nothing after the root element contains a raw closing div.
        let end = html[start..end_of_body].rfind("</div>")? + start;
        Some(&html[start..end])
    }

    /// Raw hydration state text, if the document carries any.
    pub fn extract_state_text<'a>(&self, html: &'a str) -> Option<&'a str> {
        let open = format!(
            "<script id=\"{}\" type=\"application/json\">",
            escape_html(&self.state_id)
        );
        let start = html.find(&open)? + open.len();
        let end = html[start..].find("</script>")? + start;
        Some(&html[start..end])
    }

    fn root_open_tag(&self) -> String {
        format!("<div id=\"{}\">", escape_html(&self.root_id))
    }
}

impl Default for DocumentShell {
    fn default() -> Self {
        Self::new(&DocumentConfig::default(), &AssetsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_state() {
        let shell = DocumentShell::default();
        let state = HydrationState::new("homepage", Some(serde_json::json!([1, 2])));
        let html = shell.render("<div>hi</div>", Some(&state)).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(html.contains("<title>React Server Side Render</title>"));
        assert!(html.contains("<div id=\"root\"><div>hi</div></div>\n"));
        assert!(html.contains(
            r#"<script id="__SSR_STATE__" type="application/json">{"route":"homepage","data":[1,2]}</script>"#
        ));
        assert!(html.contains(r#"<script src="/public/index.js"></script>"#));
    }

    #[test]
    fn test_render_without_state() {
        let shell = DocumentShell::default();
        let html = shell.render("<p>x</p>", None).unwrap();
        assert!(!html.contains("application/json"));
        assert_eq!(shell.extract_state_text(&html), None);
    }

    #[test]
    fn test_extract_round_trip() {
        let shell = DocumentShell::default();
        let markup = "<div><ul><li>a\nb</li></ul></div>";
        let state = HydrationState::new("homepage", Some(serde_json::json!(["</div></script>"])));
        let html = shell.render(markup, Some(&state)).unwrap();

        assert_eq!(shell.extract_root(&html), Some(markup));
        let text = shell.extract_state_text(&html).unwrap();
        assert_eq!(HydrationState::from_script_json(text).unwrap(), state);
    }

    #[test]
    fn test_extract_missing_root() {
        let shell = DocumentShell::default();
        assert_eq!(shell.extract_root("<html><body></body></html>"), None);
    }

    #[test]
    fn test_title_escaped() {
        let document = DocumentConfig {
            title: "A <b> title".into(),
            ..DocumentConfig::default()
        };
        let shell = DocumentShell::new(&document, &AssetsConfig::default());
        let html = shell.render("", None).unwrap();
        assert!(html.contains("<title>A &lt;b&gt; title</title>"));
    }
}
