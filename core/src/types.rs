//! Catalog DTOs and the display model derived from them.
//!
//! # Design
//! `RawProduct` mirrors one record of the remote API; `Product` is the shape
//! the views read. The mapping between them is a plain `From` impl so it
//! stays total: once a record deserializes, it always maps.
//!
//! The mock-server crate defines its own copy of the wire schema; the
//! integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// The response envelope of `GET /products`. Paging fields such as `total`,
/// `skip` and `limit` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEnvelope {
    pub products: Vec<RawProduct>,
}

/// A single product record as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub sku: String,
    pub thumbnail: String,
    pub weight: f64,
    pub availability_status: String,
    pub warranty_information: String,
    pub rating: f64,
    pub stock: u32,
}

/// A product as displayed by the list and the detail overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub image_alt: String,
    pub price: f64,
    pub reference: String,
    pub weight: f64,
    pub availability_status: String,
    pub warranty: String,
    pub rating: f64,
    pub stock: u32,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id.to_string(),
            image_alt: raw.title.clone(),
            name: raw.title,
            description: raw.description,
            category: raw.category,
            image_url: raw.thumbnail,
            price: raw.price,
            reference: raw.sku,
            weight: raw.weight,
            availability_status: raw.availability_status,
            warranty: raw.warranty_information,
            rating: raw.rating,
            stock: raw.stock,
        }
    }
}

impl Product {
    /// Price as shown on a card: `$` followed by the number as the API gave
    /// it, so `9.99` renders `$9.99` and `10` renders `$10`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}
