use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
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

/// One page of the catalog, shaped like the public API's response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

/// What `GET /products` answers with.
#[derive(Clone, Debug)]
pub enum Catalog {
    Serve(Vec<Product>),
    Fail(StatusCode),
    /// 200 with a body that is not JSON.
    Malformed,
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Essence Mascara Lash Princess".to_string(),
            description: "A popular mascara known for its volumizing and lengthening effects.".to_string(),
            category: "beauty".to_string(),
            price: 9.99,
            sku: "RCH45Q1A".to_string(),
            thumbnail: "https://cdn.dummyjson.com/products/images/beauty/Essence%20Mascara%20Lash%20Princess/thumbnail.png".to_string(),
            weight: 2.0,
            availability_status: "Low Stock".to_string(),
            warranty_information: "1 month warranty".to_string(),
            rating: 4.94,
            stock: 5,
        },
        Product {
            id: 2,
            title: "Eyeshadow Palette with Mirror".to_string(),
            description: "Offers a versatile range of eye shades for creating various looks.".to_string(),
            category: "beauty".to_string(),
            price: 19.99,
            sku: "MVCFH27F".to_string(),
            thumbnail: "https://cdn.dummyjson.com/products/images/beauty/Eyeshadow%20Palette%20with%20Mirror/thumbnail.png".to_string(),
            weight: 3.0,
            availability_status: "In Stock".to_string(),
            warranty_information: "1 year warranty".to_string(),
            rating: 3.28,
            stock: 44,
        },
        Product {
            id: 6,
            title: "Calvin Klein CK One".to_string(),
            description: "A classic unisex fragrance, known for its fresh and clean scent.".to_string(),
            category: "fragrances".to_string(),
            price: 49.99,
            sku: "DZM2JQZE".to_string(),
            thumbnail: "https://cdn.dummyjson.com/products/images/fragrances/Calvin%20Klein%20CK%20One/thumbnail.png".to_string(),
            weight: 7.0,
            availability_status: "In Stock".to_string(),
            warranty_information: "5 year warranty".to_string(),
            rating: 4.85,
            stock: 17,
        },
    ]
}

pub fn app() -> Router {
    app_with(Catalog::Serve(sample_products()))
}

pub fn app_with(catalog: Catalog) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .with_state(Arc::new(catalog))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Catalog::Serve(sample_products())).await
}

pub async fn run_with(listener: TcpListener, catalog: Catalog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(catalog)).await
}

async fn list_products(State(catalog): State<Arc<Catalog>>) -> Response {
    match catalog.as_ref() {
        Catalog::Serve(products) => {
            tracing::debug!(count = products.len(), "serving catalog");
            Json(CatalogPage {
                total: products.len(),
                skip: 0,
                limit: products.len(),
                products: products.clone(),
            })
            .into_response()
        }
        Catalog::Fail(status) => {
            tracing::debug!(%status, "failing catalog request");
            (*status, "catalog unavailable").into_response()
        }
        Catalog::Malformed => {
            tracing::debug!("serving malformed catalog");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                "{\"products\": [",
            )
                .into_response()
        }
    }
}
