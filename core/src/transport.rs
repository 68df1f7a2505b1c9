//! The I/O seam and the fetch built on top of it.

use tracing::{error, info};

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Product;

/// Executes one `HttpRequest` against the network.
///
/// Implementations return non-2xx responses as data; only failures that
/// leave no response at all become `CatalogError::TransportError`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CatalogError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, CatalogError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CatalogError> {
        self(request)
    }
}

/// Run one catalog fetch: build, execute once, parse. Failures are logged
/// here with their cause; callers only decide what to show.
pub fn fetch_products<T>(client: &CatalogClient, transport: &T) -> Result<Vec<Product>, CatalogError>
where
    T: Transport + ?Sized,
{
    let request = client.build_list_products();
    info!(method = request.method.as_str(), url = %request.path, "fetching products");

    let outcome = transport
        .execute(&request)
        .and_then(|response| client.parse_list_products(response));

    match &outcome {
        Ok(products) => info!(count = products.len(), "fetched products"),
        Err(error) => error!(%error, "error fetching products"),
    }
    outcome
}
