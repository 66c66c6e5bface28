//! Error responses.
//!
//! # Design Decisions
//! - Upstream failures map to 502, upstream deadlines to 504
//! - Component and serialization failures map to 500
//! - Error bodies are small HTML pages, never internal error text

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::render::RenderError;
use crate::view::escape_html;

impl RenderError {
    /// Status code returned to the browser.
    pub fn status(&self) -> StatusCode {
        match self {
            RenderError::Upstream(_) => StatusCode::BAD_GATEWAY,
            RenderError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RenderError::View(_) | RenderError::State(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, error_page(status)).into_response()
    }
}

/// Minimal standalone error document.
pub fn error_page(status: StatusCode) -> Html<String> {
    let reason = escape_html(status.canonical_reason().unwrap_or("Error"));
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{code} {reason}</title>\n</head>\n<body>\n<h1>{code} {reason}</h1>\n</body>\n</html>\n",
        code = status.as_u16(),
    ))
}
