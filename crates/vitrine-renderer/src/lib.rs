//! Trait-based page renderer with pluggable output formats.
//!
//! This crate provides the implementation side of the page/renderer split:
//! the [`Renderer`] trait defines the atomic fragment operations a page can
//! ask for, and each backend decides how those fragments look and how a
//! sequence of fragments is composed into one document.
//!
//! # Architecture
//!
//! - [`HtmlRenderer`]: produces HTML markup, composed by joining fragments
//!   with newlines.
//! - [`JsonRenderer`]: produces JSON key/value fragments, composed by
//!   wrapping the non-empty fragments in a JSON object.
//!
//! Renderers are stateless and `Send + Sync`, so a single instance can back
//! any number of pages at once.
//!
//! # Example
//!
//! ```
//! use vitrine_renderer::{HtmlRenderer, Renderer};
//!
//! let renderer = HtmlRenderer;
//! let parts = vec![
//!     renderer.render_header(),
//!     renderer.render_title("Hello"),
//!     renderer.render_footer(),
//! ];
//! let html = renderer.render_parts(&parts);
//! assert!(html.starts_with("<html><body>"));
//! ```

mod html;
mod json;
mod renderer;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use renderer::Renderer;
