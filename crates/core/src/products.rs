//! Catalog products.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category. The catalog is a closed set of three sections.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// GPUs, peripherals, monitors and other physical gear.
    Hardware,
    /// Game titles.
    Game,
    /// Discounted bundles.
    Deals,
}

/// A customer review attached to a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user: String,
    /// Integer rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

/// A catalog product. Owned by the catalog service and immutable once
/// loaded; the cart and checkout layers only ever read it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub rating: Decimal,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
    /// Pre-discount price, shown struck through for deals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Absent means in stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Product {
    /// Whether the product can currently be added to a cart by the UI.
    /// Stock is a display flag only; nothing decrements it.
    pub fn is_in_stock(&self) -> bool {
        self.in_stock.unwrap_or(true)
    }
}
