//! View state of the product list.
//!
//! # Design
//! The three possible screens are variants of one enum, so "loading with an
//! error" or "error with products" cannot be represented. The selection
//! lives inside `Ready` because there is nothing to select anywhere else.

use tracing::debug;

use crate::error::CatalogError;
use crate::types::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// The catalog request is in flight.
    Loading,
    /// The fetch failed; `message` is the text shown to the user.
    Failed { message: String },
    /// The fetch succeeded. `selected` indexes into `products`.
    Ready {
        products: Vec<Product>,
        selected: Option<usize>,
    },
}

impl ViewState {
    /// State reached once the fetch has finished.
    pub fn from_outcome(outcome: Result<Vec<Product>, CatalogError>) -> Self {
        match outcome {
            Ok(products) => ViewState::Ready {
                products,
                selected: None,
            },
            Err(error) => ViewState::Failed {
                message: error.user_message().to_string(),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Products in API order; empty unless the fetch succeeded.
    pub fn products(&self) -> &[Product] {
        match self {
            ViewState::Ready { products, .. } => products,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<&Product> {
        match self {
            ViewState::Ready {
                products,
                selected: Some(index),
            } => products.get(*index),
            _ => None,
        }
    }

    /// Show the detail overlay for the product keyed `id`, replacing any
    /// current selection. Returns `false` and changes nothing when no such
    /// product is listed.
    pub fn select(&mut self, id: &str) -> bool {
        let ViewState::Ready { products, selected } = self else {
            return false;
        };
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                debug!(product_id = id, "detail overlay opened");
                *selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Hide the detail overlay. Dismissing while hidden is a no-op.
    pub fn dismiss(&mut self) {
        if let ViewState::Ready { selected, .. } = self {
            if selected.take().is_some() {
                debug!("detail overlay dismissed");
            }
        }
    }
}
