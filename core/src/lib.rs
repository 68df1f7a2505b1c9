//! Product catalog viewer core.
//!
//! # Overview
//! Fetches the product catalog once, maps the raw records into a display
//! model, and renders a list of cards plus a detail overlay for one selected
//! product. The core builds `HttpRequest` values and parses `HttpResponse`
//! values; the actual round-trip goes through a host-supplied [`Transport`].
//!
//! # Design
//! - `CatalogClient` is stateless: it holds only `base_url`.
//! - `ViewState` is a tagged union of loading / failed / ready, so the list
//!   never sees an inconsistent combination of flags.
//! - `ProductList` owns the pending fetch; dropping it cancels the write.
//! - Rendering is a pure function from `ViewState` to view models.

pub mod client;
pub mod component;
pub mod error;
pub mod http;
pub mod render;
pub mod state;
pub mod transport;
pub mod types;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use component::ProductList;
pub use error::{CatalogError, GENERIC_ERROR_MESSAGE};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{render_detail, render_list, Card, DetailView, ListView, Tint};
pub use state::ViewState;
pub use transport::{fetch_products, Transport};
pub use types::{CatalogEnvelope, Product, RawProduct};
