//! List and detail views derived from `ViewState`.
//!
//! # Design
//! Rendering is a pure function of the state: it produces view models that
//! carry every piece of text a front end needs, plus a `Display` impl for a
//! plain-text presentation. Nothing here mutates state; clicks come back in
//! through `ViewState::select` and `ViewState::dismiss`.

use std::fmt;

use crate::state::ViewState;
use crate::types::Product;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No products found";
pub const ADD_TO_CART_LABEL: &str = "Add to cart";

/// The only availability status with its own tint. Compared case-sensitively.
pub const IN_STOCK_STATUS: &str = "In Stock";

/// Card descriptions are cut to this many characters, ellipsis included.
pub const CARD_DESCRIPTION_WIDTH: usize = 48;

/// What the list area shows. Exactly one variant applies at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Failed(String),
    Empty,
    Grid(Vec<Card>),
}

/// One grid cell. `key` is the product id and is unique in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: String,
    pub image_src: String,
    pub image_alt: String,
    pub name: String,
    pub price: String,
    /// Truncated; selecting it opens the detail overlay for `key`.
    pub description: String,
    pub category: String,
    /// Inert: there is no cart behind it.
    pub add_to_cart: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// The status reads exactly "In Stock".
    Muted,
    /// Any other status, recognized or not.
    Highlight,
}

impl Tint {
    pub fn for_status(status: &str) -> Self {
        if status == IN_STOCK_STATUS {
            Tint::Muted
        } else {
            Tint::Highlight
        }
    }
}

/// The expanded view of the selected product.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub key: String,
    pub image_src: String,
    pub image_alt: String,
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub reference: String,
    pub availability_status: String,
    pub availability_tint: Tint,
    pub stock: u32,
    pub weight: f64,
    pub warranty: String,
}

pub fn render_list(state: &ViewState) -> ListView {
    match state {
        ViewState::Loading => ListView::Loading,
        ViewState::Failed { message } => ListView::Failed(message.clone()),
        ViewState::Ready { products, .. } if products.is_empty() => ListView::Empty,
        ViewState::Ready { products, .. } => ListView::Grid(products.iter().map(Card::from).collect()),
    }
}

/// `None` while the overlay is hidden.
pub fn render_detail(state: &ViewState) -> Option<DetailView> {
    state.selected().map(DetailView::from)
}

impl From<&Product> for Card {
    fn from(product: &Product) -> Self {
        Self {
            key: product.id.clone(),
            image_src: product.image_url.clone(),
            image_alt: product.image_alt.clone(),
            name: product.name.clone(),
            price: product.price_label(),
            description: truncate(&product.description, CARD_DESCRIPTION_WIDTH),
            category: product.category.clone(),
            add_to_cart: ADD_TO_CART_LABEL,
        }
    }
}

impl From<&Product> for DetailView {
    fn from(product: &Product) -> Self {
        Self {
            key: product.id.clone(),
            image_src: product.image_url.clone(),
            image_alt: product.image_alt.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            rating: product.rating,
            reference: product.reference.clone(),
            availability_status: product.availability_status.clone(),
            availability_tint: Tint::for_status(&product.availability_status),
            stock: product.stock,
            weight: product.weight,
            warranty: product.warranty.clone(),
        }
    }
}

impl DetailView {
    pub fn availability_line(&self) -> String {
        format!("Availability: {} ({})", self.availability_status, self.stock)
    }
}

/// Cut `text` to at most `width` characters, ending in `...` when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListView::Loading => writeln!(f, "{LOADING_TEXT}"),
            ListView::Failed(message) => writeln!(f, "{message}"),
            ListView::Empty => writeln!(f, "{EMPTY_TEXT}"),
            ListView::Grid(cards) => {
                for card in cards {
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.key, self.name)?;
        writeln!(f, "    image: {} ({})", self.image_src, self.image_alt)?;
        writeln!(f, "    {}  #{}", self.price, self.category)?;
        writeln!(f, "    {}", self.description)?;
        writeln!(f, "    [ {} ]", self.add_to_cart)
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        writeln!(f, "image: {} ({})", self.image_src, self.image_alt)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Rate: {}", self.rating)?;
        writeln!(f, "Reference: {}", self.reference)?;
        writeln!(f, "{}", self.availability_line())?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "{}", self.warranty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn mascara() -> Product {
        Product {
            id: "1".to_string(),
            name: "Essence Mascara".to_string(),
            description: "d".to_string(),
            category: "beauty".to_string(),
            image_url: "x.jpg".to_string(),
            image_alt: "Essence Mascara".to_string(),
            price: 9.99,
            reference: "SKU1".to_string(),
            weight: 2.0,
            availability_status: "In Stock".to_string(),
            warranty: "1 week".to_string(),
            rating: 4.5,
            stock: 5,
        }
    }

    fn ready(products: Vec<Product>) -> ViewState {
        ViewState::from_outcome(Ok(products))
    }

    #[test]
    fn loading_renders_only_the_indicator() {
        let view = render_list(&ViewState::Loading);
        assert_eq!(view, ListView::Loading);
        assert_eq!(view.to_string(), "Loading...\n");
    }

    #[test]
    fn failure_renders_only_the_message() {
        let state = ViewState::from_outcome(Err(CatalogError::HttpError {
            status: 500,
            body: String::new(),
        }));
        let view = render_list(&state);
        assert_eq!(view, ListView::Failed("Error fetching data.".to_string()));
        assert_eq!(view.to_string(), "Error fetching data.\n");
    }

    #[test]
    fn empty_catalog_renders_the_empty_message() {
        let view = render_list(&ready(Vec::new()));
        assert_eq!(view, ListView::Empty);
        assert_eq!(view.to_string(), "No products found\n");
    }

    #[test]
    fn single_product_renders_one_card() {
        let ListView::Grid(cards) = render_list(&ready(vec![mascara()])) else {
            panic!("expected a grid");
        };
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.key, "1");
        assert_eq!(card.price, "$9.99");
        assert_eq!(card.category, "beauty");
        assert_eq!(card.image_alt, "Essence Mascara");
        assert_eq!(card.add_to_cart, "Add to cart");

        let text = card.to_string();
        assert!(text.contains("$9.99"));
        assert!(text.contains("#beauty"));
    }

    #[test]
    fn cards_follow_product_order() {
        let mut second = mascara();
        second.id = "2".to_string();
        let mut third = mascara();
        third.id = "3".to_string();
        let ListView::Grid(cards) = render_list(&ready(vec![third, mascara(), second])) else {
            panic!("expected a grid");
        };
        let keys: Vec<&str> = cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["3", "1", "2"]);
    }

    #[test]
    fn card_description_is_truncated() {
        let mut product = mascara();
        product.description = "a".repeat(CARD_DESCRIPTION_WIDTH + 10);
        let card = Card::from(&product);
        assert_eq!(card.description.chars().count(), CARD_DESCRIPTION_WIDTH);
        assert!(card.description.ends_with("..."));

        let detail = DetailView::from(&product);
        assert_eq!(detail.description, product.description);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("héllo", 5), "héllo");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn detail_hidden_without_selection() {
        assert!(render_detail(&ready(vec![mascara()])).is_none());
        assert!(render_detail(&ViewState::Loading).is_none());
    }

    #[test]
    fn detail_shows_the_selected_product() {
        let mut state = ready(vec![mascara()]);
        state.select("1");
        let detail = render_detail(&state).unwrap();
        assert_eq!(detail.availability_tint, Tint::Muted);

        let text = detail.to_string();
        assert!(text.contains("Rate: 4.5"));
        assert!(text.contains("Reference: SKU1"));
        assert!(text.contains("Availability: In Stock (5)"));
        assert!(text.contains("Weight: 2"));
        assert!(text.contains("1 week"));
    }

    #[test]
    fn availability_tint_is_case_sensitive() {
        assert_eq!(Tint::for_status("In Stock"), Tint::Muted);
        assert_eq!(Tint::for_status("in stock"), Tint::Highlight);
        assert_eq!(Tint::for_status("Low Stock"), Tint::Highlight);
        assert_eq!(Tint::for_status("Backordered"), Tint::Highlight);
    }
}
