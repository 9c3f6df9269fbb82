//! JSON renderer backend.
//!
//! Produces JSON key/value fragments composed into a single object. The
//! format has no document framing, so header and footer render to empty
//! strings and are filtered out during composition.

use crate::renderer::Renderer;

/// JSON render backend.
///
/// Values are embedded verbatim between double quotes; no JSON string
/// escaping is applied.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_title(&self, title: &str) -> String {
        format!("\"title\": \"{title}\"")
    }

    fn render_text_block(&self, text: &str) -> String {
        format!("\"text\": \"{text}\"")
    }

    fn render_image(&self, url: &str) -> String {
        format!("\"img\": \"{url}\"")
    }

    fn render_link(&self, url: &str, title: &str) -> String {
        format!("\"link\": {{\"href\": \"{url}\", \"title\": \"{title}\"}}")
    }

    fn render_header(&self) -> String {
        String::new()
    }

    fn render_footer(&self) -> String {
        String::new()
    }

    /// Wrap the non-empty fragments in a JSON object.
    ///
    /// Empty fragments (header/footer) are dropped; the rest keep their
    /// relative order and are joined with `,\n`. An all-empty sequence
    /// yields `{\n\n}`.
    fn render_parts(&self, parts: &[String]) -> String {
        let body = parts
            .iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{{\n{body}\n}}")
    }
}
