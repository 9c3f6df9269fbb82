//! Page abstractions rendered through pluggable renderer backends.
//!
//! This crate provides the abstraction side of the page/renderer split: a
//! [`Page`] knows *what* content it represents and delegates *how* that
//! content is formatted to an attached [`Renderer`](vitrine_renderer::Renderer).
//! The attached renderer can be replaced at any time with
//! [`Page::change_renderer`], so the same page instance can produce output
//! in different formats without being rebuilt.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use vitrine_renderer::{HtmlRenderer, JsonRenderer, Renderer};
//! use vitrine_site::{Page, SimplePage};
//!
//! let html: Arc<dyn Renderer> = Arc::new(HtmlRenderer);
//! let mut page = SimplePage::new(html, "Hello", "World");
//! assert!(page.view().starts_with("<html><body>"));
//!
//! page.change_renderer(Arc::new(JsonRenderer));
//! assert!(page.view().starts_with("{\n"));
//! ```
//!
//! # Concurrency
//!
//! Renderers are stateless and shared freely. A page itself is a plain value;
//! if one page instance is shared across threads, the caller must serialize
//! `change_renderer`/`view` pairs to avoid observing a half-swapped renderer.

mod page;
mod product;

pub use page::{Page, SimplePage};
pub use product::{Product, ProductPage};
