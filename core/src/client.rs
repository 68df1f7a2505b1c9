//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url`. The single operation is split
//! into `build_list_products`, which produces an `HttpRequest`, and
//! `parse_list_products`, which consumes an `HttpResponse` and yields the
//! display model. The host executes the round-trip in between.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CatalogEnvelope, Product, RawProduct};

/// Base URL of the public catalog the viewer reads by default.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/products", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Decode the catalog envelope and map every record, keeping API order.
    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, CatalogError> {
        check_status(&response)?;
        let envelope: CatalogEnvelope = serde_json::from_str(&response.body)
            .map_err(|e| CatalogError::DeserializationError(e.to_string()))?;
        check_records(&envelope.products)?;
        Ok(envelope.products.into_iter().map(Product::from).collect())
    }
}

/// Card keys must be unique and prices non-negative; a catalog breaking
/// either is rejected whole.
fn check_records(records: &[RawProduct]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(CatalogError::DeserializationError(format!(
                "duplicate product id {}",
                record.id
            )));
        }
        if record.price < 0.0 {
            return Err(CatalogError::DeserializationError(format!(
                "product {} has negative price {}",
                record.id, record.price
            )));
        }
    }
    Ok(())
}

/// Map any non-2xx status to `CatalogError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), CatalogError> {
    if response.is_success() {
        return Ok(());
    }
    Err(CatalogError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
