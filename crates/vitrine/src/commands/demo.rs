//! `vitrine demo` command implementation.

use std::sync::Arc;

use clap::Args;
use vitrine_renderer::{HtmlRenderer, JsonRenderer, Renderer};
use vitrine_site::{Page, Product, ProductPage, SimplePage};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the demo command.
#[derive(Args)]
pub(crate) struct DemoArgs {
    /// Enable verbose output (show renderer swap logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl DemoArgs {
    /// Execute the demo command.
    ///
    /// Renders a simple page and a product page as HTML, then swaps the
    /// product page's renderer to JSON and renders it again, showing that
    /// the output format changes without rebuilding the page.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        tracing::debug!(verbose = self.verbose, "running demo");

        let html: Arc<dyn Renderer> = Arc::new(HtmlRenderer);
        let json: Arc<dyn Renderer> = Arc::new(JsonRenderer);

        let simple = SimplePage::new(Arc::clone(&html), "Daftar Menu", "Selamat Datang!");
        output.highlight("Simple page (HTML):");
        output.page(&simple.view())?;

        let product = Arc::new(Product::new(
            "123",
            "Soto Betawi",
            "Soto Betawi adalah salah satu kuliner tradisional Betawi yang sangat terkenal ...",
            "/images/sotobetawi.jpeg",
            39.95,
        ));
        let mut page = ProductPage::new(html, product);
        output.highlight("Product page (HTML):");
        output.page(&page.view())?;

        page.change_renderer(json);
        output.highlight("Product page (JSON, same page instance):");
        output.page(&page.view())?;

        Ok(())
    }
}
