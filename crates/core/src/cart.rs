//! Cart state and reducer.
//!
//! The cart is mutated exclusively through [`CartAction`]s applied by
//! [`CartState::apply`]; totals are always derived from the current lines,
//! never cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::Product;

pub mod store;

pub use store::{CartStorage, CartStore, MemoryCartStorage};

/// Sales tax applied on top of the subtotal (10%).
pub const TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// One product in the cart with its quantity.
///
/// Invariant: quantity >= 1; a quantity reduced to zero removes the line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    pub fn amount(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// A cart mutation. Applied through [`CartState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    /// Add one unit of the product, merging into an existing line.
    ///
    /// Unconditional: stock gating is the caller's responsibility, the cart
    /// accepts whatever the UI lets through.
    Add(Product),
    /// Remove the line for the given product id. Absent id is a no-op.
    Remove(String),
    /// Set a line's quantity, clamped at zero; zero removes the line.
    UpdateQuantity { id: String, quantity: i64 },
    /// Empty the cart. Used once, after a confirmed order.
    Clear,
    /// Flip the drawer open/closed flag. UI visibility only.
    ToggleOpen,
}

/// The full cart: line items plus the drawer visibility flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    lines: Vec<CartLine>,
    is_open: bool,
}

impl CartState {
    /// Apply a single action, the reducer for all cart mutation.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(product) => {
                if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
                    line.quantity += 1;
                } else {
                    self.lines.push(CartLine {
                        product,
                        quantity: 1,
                    });
                }
                self.is_open = true;
            }
            CartAction::Remove(id) => {
                self.lines.retain(|l| l.product.id != id);
            }
            CartAction::UpdateQuantity { id, quantity } => {
                let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
                if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
                    line.quantity = quantity;
                }
                self.lines.retain(|l| l.quantity > 0);
            }
            CartAction::Clear => {
                self.lines.clear();
            }
            CartAction::ToggleOpen => {
                self.is_open = !self.is_open;
            }
        }
    }

    /// Current line items.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart drawer is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line amounts.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::amount).sum()
    }

    /// Tax at [`TAX_RATE`], rounded to 2 decimal places.
    pub fn tax(&self) -> Decimal {
        (self.subtotal() * TAX_RATE).round_dp(2)
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }
}

/// Failure of the durable cart storage port.
#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("failed to load cart state: {0}")]
    Load(String),

    #[error("failed to save cart state: {0}")]
    Save(String),
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::fixtures;

    use super::*;

    fn line_product(id: &str) -> Product {
        fixtures::product(id).unwrap_or_else(|| panic!("missing fixture {id}"))
    }

    #[test]
    fn add_inserts_line_and_opens_cart() {
        let mut cart = CartState::default();

        cart.apply(CartAction::Add(line_product("2")));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 1);
        assert!(cart.is_open());
    }

    #[test]
    fn add_merges_into_existing_line() {
        let mut cart = CartState::default();

        cart.apply(CartAction::Add(line_product("2")));
        cart.apply(CartAction::Add(line_product("2")));
        cart.apply(CartAction::Add(line_product("4")));

        assert_eq!(cart.lines().len(), 2, "one line per product id");
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn no_duplicate_lines_under_any_sequence() {
        let mut cart = CartState::default();

        for _ in 0..3 {
            cart.apply(CartAction::Add(line_product("2")));
            cart.apply(CartAction::Add(line_product("4")));
            cart.apply(CartAction::UpdateQuantity {
                id: "2".to_string(),
                quantity: 5,
            });
            cart.apply(CartAction::Add(line_product("2")));
        }

        let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), cart.lines().len(), "duplicate product lines");
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(line_product("2")));

        cart.apply(CartAction::Remove("999".to_string()));

        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn update_quantity_to_zero_removes_the_line() {
        let mut by_update = CartState::default();
        let mut by_remove = CartState::default();
        by_update.apply(CartAction::Add(line_product("2")));
        by_remove.apply(CartAction::Add(line_product("2")));

        by_update.apply(CartAction::UpdateQuantity {
            id: "2".to_string(),
            quantity: 0,
        });
        by_remove.apply(CartAction::Remove("2".to_string()));

        assert_eq!(by_update.lines(), by_remove.lines());
        assert!(by_update.is_empty());
    }

    #[test]
    fn update_quantity_clamps_negative_to_zero() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(line_product("2")));

        cart.apply(CartAction::UpdateQuantity {
            id: "2".to_string(),
            quantity: -3,
        });

        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_lines_only() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(line_product("2")));

        cart.apply(CartAction::Clear);

        assert!(cart.is_empty());
        assert!(cart.is_open(), "clear does not touch the drawer flag");
    }

    #[test]
    fn toggle_flips_the_drawer() {
        let mut cart = CartState::default();

        cart.apply(CartAction::ToggleOpen);
        assert!(cart.is_open());

        cart.apply(CartAction::ToggleOpen);
        assert!(!cart.is_open());
    }

    #[test]
    fn totals_are_derived_from_lines() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(line_product("2"))); // 2999
        cart.apply(CartAction::Add(line_product("2")));
        cart.apply(CartAction::Add(line_product("4"))); // 3999

        let subtotal = cart.subtotal();

        assert_eq!(subtotal, Decimal::new(9_997, 0));
        assert_eq!(cart.tax(), Decimal::new(999_70, 2));
        assert_eq!(cart.total(), subtotal + cart.tax());
    }

    #[test]
    fn total_is_subtotal_times_one_point_one() {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(line_product("7")));
        cart.apply(CartAction::UpdateQuantity {
            id: "7".to_string(),
            quantity: 3,
        });
        cart.apply(CartAction::Add(line_product("21")));

        let expected = (cart.subtotal() * (Decimal::ONE + TAX_RATE)).round_dp(2);

        assert_eq!(cart.total(), expected);
    }

    #[test]
    fn persisted_form_round_trips() -> TestResult {
        let mut cart = CartState::default();
        cart.apply(CartAction::Add(line_product("2")));
        cart.apply(CartAction::ToggleOpen);

        let json = serde_json::to_string(&cart)?;
        let restored: CartState = serde_json::from_str(&json)?;

        assert_eq!(restored, cart);
        assert!(json.contains("\"isOpen\""));

        Ok(())
    }
}
