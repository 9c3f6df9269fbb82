//! Product data and the product detail page.

use std::sync::Arc;

use vitrine_renderer::Renderer;

use crate::page::Page;

/// Call-to-action label on the add-to-cart link.
const CART_LINK_LABEL: &str = "Pesan!";

/// An immutable product record.
///
/// Plain value holder; no field is validated at construction. The id is
/// embedded verbatim into cart URLs and the price may be any float,
/// negative included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    id: String,
    title: String,
    description: String,
    image: String,
    price: f64,
}

impl Product {
    /// Create a product from its five fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            image: image.into(),
            price,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Image URL or site-relative path.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// A detail page for one product.
///
/// Holds a shared reference to the product, so the same record can back
/// multiple pages (e.g., a listing and a detail view).
pub struct ProductPage {
    renderer: Arc<dyn Renderer>,
    product: Arc<Product>,
}

impl ProductPage {
    /// Create a product page with the given renderer and product.
    #[must_use]
    pub fn new(renderer: Arc<dyn Renderer>, product: Arc<Product>) -> Self {
        Self { renderer, product }
    }

    /// The product backing this page.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }
}

impl Page for ProductPage {
    fn change_renderer(&mut self, renderer: Arc<dyn Renderer>) {
        tracing::debug!(product_id = %self.product.id(), "changing renderer");
        self.renderer = renderer;
    }

    fn view(&self) -> String {
        let cart_url = format!("/cart/add/{}", self.product.id());
        let parts = vec![
            self.renderer.render_header(),
            self.renderer.render_title(self.product.title()),
            self.renderer.render_text_block(self.product.description()),
            self.renderer.render_image(self.product.image()),
            self.renderer.render_link(&cart_url, CART_LINK_LABEL),
            self.renderer.render_footer(),
        ];
        self.renderer.render_parts(&parts)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vitrine_renderer::{HtmlRenderer, JsonRenderer};

    use super::*;

    fn soto_betawi() -> Arc<Product> {
        Arc::new(Product::new(
            "123",
            "Soto Betawi",
            "Soto Betawi adalah salah satu kuliner tradisional Betawi yang sangat terkenal ...",
            "/images/sotobetawi.jpeg",
            39.95,
        ))
    }

    #[test]
    fn test_product_accessors() {
        let product = Product::new("p-1", "Widget", "A widget.", "/img/widget.png", 9.5);
        assert_eq!(product.id(), "p-1");
        assert_eq!(product.title(), "Widget");
        assert_eq!(product.description(), "A widget.");
        assert_eq!(product.image(), "/img/widget.png");
        assert_eq!(product.price(), 9.5);
    }

    #[test]
    fn test_product_accepts_negative_price() {
        let product = Product::new("p-2", "Refund", "", "", -1.0);
        assert_eq!(product.price(), -1.0);
    }

    #[test]
    fn test_html_view_orders_fragments() {
        let page = ProductPage::new(Arc::new(HtmlRenderer), soto_betawi());
        let view = page.view();

        let expected_order = [
            "<html><body>",
            "<h1>Soto Betawi</h1>",
            "<div class='text'>Soto Betawi adalah",
            "<img src='/images/sotobetawi.jpeg'>",
            "<a href='/cart/add/123'>Pesan!</a>",
            "</body></html>",
        ];
        let mut last = 0;
        for fragment in expected_order {
            let pos = view[last..]
                .find(fragment)
                .unwrap_or_else(|| panic!("missing or out of order: {fragment}"));
            last += pos + fragment.len();
        }
    }

    #[test]
    fn test_json_view_has_exactly_the_content_keys() {
        let page = ProductPage::new(Arc::new(JsonRenderer), soto_betawi());
        let view = page.view();

        // The demo data contains no quote characters, so the output is
        // well-formed JSON and can be checked structurally.
        let value: serde_json::Value = serde_json::from_str(&view).expect("valid JSON");
        let object = value.as_object().expect("JSON object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["img", "link", "text", "title"]);

        assert_eq!(object["title"], "Soto Betawi");
        assert_eq!(object["img"], "/images/sotobetawi.jpeg");
        assert_eq!(object["link"]["href"], "/cart/add/123");
        assert_eq!(object["link"]["title"], "Pesan!");
    }

    #[test]
    fn test_change_renderer_matches_directly_constructed_page() {
        let product = soto_betawi();
        let mut page = ProductPage::new(Arc::new(HtmlRenderer), Arc::clone(&product));
        page.change_renderer(Arc::new(JsonRenderer));

        let direct = ProductPage::new(Arc::new(JsonRenderer), product);
        assert_eq!(page.view(), direct.view());
    }

    #[test]
    fn test_cart_url_embeds_raw_id() {
        // Ids are concatenated into the URL verbatim, spaces and all.
        let product = Arc::new(Product::new("a b", "T", "D", "/i.png", 1.0));
        let page = ProductPage::new(Arc::new(HtmlRenderer), product);
        assert!(page.view().contains("<a href='/cart/add/a b'>Pesan!</a>"));
    }

    #[test]
    fn test_page_is_send_sync() {
        static_assertions::assert_impl_all!(ProductPage: Send, Sync);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_product_serde_round_trip() {
        let product = Product::new("p-1", "Widget", "A widget.", "/img/widget.png", 9.5);
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, product);
    }
}
