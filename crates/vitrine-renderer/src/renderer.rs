//! Renderer trait for format-specific fragment rendering.
//!
//! This trait abstracts the differences between output formats, allowing a
//! page to describe its content as a sequence of fragment calls without
//! knowing what format those fragments take.

/// Backend trait for format-specific rendering operations.
///
/// Every method is a pure transformation of its inputs; implementations hold
/// no state and are shared freely across pages and threads. Inputs are
/// embedded verbatim — no escaping or validation is applied, so a title
/// containing quote characters can corrupt the output format. Callers that
/// need well-formed output must sanitize their data first.
pub trait Renderer: Send + Sync {
    /// Render a page title fragment.
    fn render_title(&self, title: &str) -> String;

    /// Render a block of body text.
    fn render_text_block(&self, text: &str) -> String;

    /// Render an image reference.
    ///
    /// `url` may be an absolute URL or a site-relative path; it is not
    /// resolved or validated here.
    fn render_image(&self, url: &str) -> String;

    /// Render a link with the given destination and label.
    fn render_link(&self, url: &str, title: &str) -> String;

    /// Render the document opening, if the format has one.
    ///
    /// Formats without framing (e.g., JSON) return an empty string, which
    /// [`render_parts`](Self::render_parts) is free to drop.
    fn render_header(&self) -> String;

    /// Render the document closing, if the format has one.
    fn render_footer(&self) -> String;

    /// Compose an ordered sequence of rendered fragments into one document.
    ///
    /// Relative order of fragments is always preserved. Whether empty
    /// fragments are kept is format-specific.
    fn render_parts(&self, parts: &[String]) -> String;
}
