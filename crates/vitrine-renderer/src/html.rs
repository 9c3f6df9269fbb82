//! HTML renderer backend.
//!
//! Produces a minimal HTML document: fragments are plain markup strings
//! joined with newlines, framed by `<html><body>` and `</body></html>`.

use crate::renderer::Renderer;

/// HTML render backend.
///
/// Attribute values use single quotes and content is embedded verbatim,
/// matching the output contract exactly; there is no escaping.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_title(&self, title: &str) -> String {
        format!("<h1>{title}</h1>")
    }

    fn render_text_block(&self, text: &str) -> String {
        format!("<div class='text'>{text}</div>")
    }

    fn render_image(&self, url: &str) -> String {
        format!("<img src='{url}'>")
    }

    fn render_link(&self, url: &str, title: &str) -> String {
        format!("<a href='{url}'>{title}</a>")
    }

    fn render_header(&self) -> String {
        "<html><body>".to_owned()
    }

    fn render_footer(&self) -> String {
        "</body></html>".to_owned()
    }

    /// Join all fragments with newlines, keeping order and count.
    ///
    /// Empty fragments are kept; HTML framing is never empty so in practice
    /// this only matters for empty titles or text blocks.
    fn render_parts(&self, parts: &[String]) -> String {
        parts.join("\n")
    }
}
