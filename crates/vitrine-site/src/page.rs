//! Page trait and the simple text page.

use std::sync::Arc;

use vitrine_renderer::Renderer;

/// A renderable page.
///
/// Each page owns exactly one renderer association at all times. The
/// renderer is shared (`Arc`), so one renderer instance may back any number
/// of pages; [`change_renderer`](Self::change_renderer) is the only way the
/// association changes.
pub trait Page {
    /// Replace the attached renderer.
    ///
    /// Takes effect for all subsequent [`view`](Self::view) calls. The
    /// replacement is unconditional; no validation is performed.
    fn change_renderer(&mut self, renderer: Arc<dyn Renderer>);

    /// Render the page to its output string.
    ///
    /// Pure with respect to page content: calling `view` repeatedly without
    /// an intervening `change_renderer` yields identical output.
    fn view(&self) -> String;
}

/// A page with a title and one block of body text.
pub struct SimplePage {
    renderer: Arc<dyn Renderer>,
    title: String,
    content: String,
}

impl SimplePage {
    /// Create a page with the given renderer, title and content.
    #[must_use]
    pub fn new(
        renderer: Arc<dyn Renderer>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            renderer,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Page title as supplied at construction.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text as supplied at construction.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Page for SimplePage {
    fn change_renderer(&mut self, renderer: Arc<dyn Renderer>) {
        tracing::debug!(title = %self.title, "changing renderer");
        self.renderer = renderer;
    }

    fn view(&self) -> String {
        let parts = vec![
            self.renderer.render_header(),
            self.renderer.render_title(&self.title),
            self.renderer.render_text_block(&self.content),
            self.renderer.render_footer(),
        ];
        self.renderer.render_parts(&parts)
    }
}
