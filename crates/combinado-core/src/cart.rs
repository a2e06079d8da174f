//! # Cart
//!
//! The customer's selection: one line per menu item, with a quantity.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action           Operation                  Effect                │
//! │  ───────────           ─────────                  ──────                │
//! │  "Agregar" button ───► add_item(item) ──────────► qty + 1 / new line    │
//! │  + / − buttons ──────► change_quantity(id, ±1) ─► qty ± 1, never < 1    │
//! │  Quantity input ─────► set_quantity(id, n) ─────► qty = n, n ≤ 0 drops  │
//! │  Trash button ───────► remove_item(id) ─────────► line dropped          │
//! │  After dispatch ─────► clear() ─────────────────► empty cart            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the asymmetry: `change_quantity` never removes a line, so pressing
//! "−" on a quantity of 1 does nothing, while `set_quantity(id, 0)` removes
//! it.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

use crate::catalog::{Catalog, CatalogItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::DeliveryMode;

// =============================================================================
// Cart Line
// =============================================================================

/// One menu item plus a quantity. The quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    pub quantity: u32,
}

/// A cart line joined with its catalog item.
#[derive(Debug, Clone, Copy)]
pub struct PricedLine<'a> {
    pub item: &'a CatalogItem,
    pub quantity: u32,
}

impl PricedLine<'_> {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item increases quantity)
/// - Every line's item exists in the cart's catalog
/// - Every quantity is > 0
/// - Lines keep the order in which items were first added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    catalog: Arc<Catalog>,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart over the given menu.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Cart {
            catalog,
            lines: Vec::new(),
        }
    }

    /// Adds one unit of an item.
    ///
    /// ## Behavior
    /// - If the item already has a line: quantity + 1
    /// - Otherwise: a new line with quantity 1 is appended
    ///
    /// ## Errors
    /// `CoreError::UnknownItem` if the item is not part of this cart's menu.
    /// Items obtained from the same catalog are always accepted.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use combinado_core::{Cart, Catalog};
    ///
    /// let menu = Arc::new(Catalog::combinado_menu());
    /// let mut cart = Cart::new(Arc::clone(&menu));
    /// let combo = menu.get("combo-8").unwrap();
    ///
    /// cart.add_item(combo).unwrap();
    /// cart.add_item(combo).unwrap();
    /// assert_eq!(cart.quantity_of("combo-8"), Some(2));
    /// ```
    pub fn add_item(&mut self, item: &CatalogItem) -> CoreResult<()> {
        if !self.catalog.contains(&item.id) {
            return Err(CoreError::UnknownItem(item.id.clone()));
        }

        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return Ok(());
        }

        self.lines.push(CartLine {
            item_id: item.id.clone(),
            quantity: 1,
        });
        Ok(())
    }

    /// Adds `delta` to a line's quantity.
    ///
    /// ## Behavior
    /// - Result > 0: quantity updated
    /// - Result ≤ 0: line left unchanged (it is NOT removed)
    /// - Item not in cart: no-op
    ///
    /// Returns true if the cart changed.
    pub fn change_quantity(&mut self, item_id: &str, delta: i64) -> bool {
        let Some(line) = self.line_mut(item_id) else {
            return false;
        };

        let new_qty = i64::from(line.quantity).saturating_add(delta);
        if new_qty <= 0 || delta == 0 {
            return false;
        }

        line.quantity = u32::try_from(new_qty).unwrap_or(u32::MAX);
        true
    }

    /// Sets a line's quantity to exactly `quantity`.
    ///
    /// ## Behavior
    /// - `quantity ≤ 0`: the line is removed
    /// - Item not in cart: no-op
    ///
    /// Returns true if the cart changed.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(item_id);
        }

        let Some(line) = self.line_mut(item_id) else {
            return false;
        };

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let changed = line.quantity != quantity;
        line.quantity = quantity;
        changed
    }

    /// Removes an item's line if present. Returns true if a line was removed.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|line| line.item_id != item_id);
        self.lines.len() != initial_len
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Sum of `price × quantity` over all lines.
    pub fn subtotal(&self) -> Money {
        self.priced_lines().map(|line| line.line_total()).sum()
    }

    /// Subtotal plus the delivery fee when delivery is selected.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use combinado_core::{Cart, Catalog, DeliveryMode, Money};
    ///
    /// let menu = Arc::new(Catalog::combinado_menu());
    /// let mut cart = Cart::new(Arc::clone(&menu));
    /// cart.add_item(menu.get("combo-10").unwrap()).unwrap();
    ///
    /// assert_eq!(cart.total(DeliveryMode::Pickup), Money::from_soles(10));
    /// assert_eq!(cart.total(DeliveryMode::Delivery), Money::from_soles(13));
    /// ```
    pub fn total(&self, mode: DeliveryMode) -> Money {
        self.subtotal() + mode.fee()
    }

    /// Lines joined with their catalog items, in cart order.
    pub fn priced_lines(&self) -> impl Iterator<Item = PricedLine<'_>> {
        self.lines.iter().filter_map(move |line| {
            self.catalog.get(&line.item_id).map(|item| PricedLine {
                item,
                quantity: line.quantity,
            })
        })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn quantity_of(&self, item_id: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item_id == item_id)
            .map(|line| line.quantity)
    }

    /// Number of distinct items.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn line_mut(&mut self, item_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.item_id == item_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn menu() -> Arc<Catalog> {
        Arc::new(Catalog::combinado_menu())
    }

    fn add(cart: &mut Cart, id: &str) {
        let item = cart.catalog().get(id).cloned().unwrap();
        cart.add_item(&item).unwrap();
    }

    /// Combo Clásico × 2 + Chicha Morada 1L × 1.
    fn scenario_cart() -> Cart {
        let mut cart = Cart::new(menu());
        add(&mut cart, "combo-8");
        add(&mut cart, "combo-8");
        add(&mut cart, "chicha-1l");
        cart
    }

    #[test]
    fn test_add_item_counts_calls() {
        let mut cart = Cart::new(menu());
        for _ in 0..7 {
            add(&mut cart, "combo-12");
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("combo-12"), Some(7));
    }

    #[test]
    fn test_add_keeps_first_insertion_order() {
        let mut cart = Cart::new(menu());
        add(&mut cart, "chicha-500ml");
        add(&mut cart, "combo-8");
        add(&mut cart, "chicha-500ml");

        let ids: Vec<_> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(ids, ["chicha-500ml", "combo-8"]);
    }

    #[test]
    fn test_add_item_from_other_catalog_rejected() {
        let mut cart = Cart::new(menu());
        let stranger = CatalogItem::new("pisco", "Pisco Sour", "", Money::from_soles(15), Category::Drink);

        let err = cart.add_item(&stranger).unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(id) if id == "pisco"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity() {
        let mut cart = scenario_cart();

        assert!(cart.change_quantity("combo-8", 1));
        assert_eq!(cart.quantity_of("combo-8"), Some(3));

        assert!(cart.change_quantity("combo-8", -1));
        assert_eq!(cart.quantity_of("combo-8"), Some(2));
    }

    #[test]
    fn test_change_quantity_never_removes() {
        let mut cart = scenario_cart();

        assert!(!cart.change_quantity("combo-8", -2));
        assert_eq!(cart.quantity_of("combo-8"), Some(2));

        assert!(!cart.change_quantity("chicha-1l", -1));
        assert_eq!(cart.quantity_of("chicha-1l"), Some(1));

        assert!(!cart.change_quantity("chicha-1l", -50));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_change_quantity_unknown_line_is_noop() {
        let mut cart = scenario_cart();
        assert!(!cart.change_quantity("combo-10", 1));
        assert_eq!(cart.quantity_of("combo-10"), None);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = scenario_cart();

        assert!(cart.set_quantity("chicha-1l", 4));
        assert_eq!(cart.quantity_of("chicha-1l"), Some(4));

        // Not additive
        assert!(cart.set_quantity("chicha-1l", 2));
        assert_eq!(cart.quantity_of("chicha-1l"), Some(2));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut removed = scenario_cart();
        let mut expected = scenario_cart();

        assert!(removed.set_quantity("combo-8", 0));
        assert!(expected.remove_item("combo-8"));

        assert_eq!(removed.lines(), expected.lines());
        assert_eq!(removed.quantity_of("combo-8"), None);
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = scenario_cart();
        assert!(cart.set_quantity("chicha-1l", -3));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_set_quantity_unknown_line_is_noop() {
        let mut cart = scenario_cart();
        assert!(!cart.set_quantity("combo-12", 5));
        assert!(!cart.set_quantity("combo-12", 0));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = scenario_cart();
        assert!(cart.remove_item("chicha-1l"));
        assert!(!cart.remove_item("chicha-1l"));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_subtotal_and_totals() {
        let cart = scenario_cart();

        assert_eq!(cart.subtotal(), Money::from_soles(21));
        assert_eq!(cart.total(DeliveryMode::Pickup), Money::from_soles(21));
        assert_eq!(cart.total(DeliveryMode::Delivery), Money::from_soles(24));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new(menu());
        assert!(cart.subtotal().is_zero());
        assert_eq!(cart.total(DeliveryMode::Delivery), Money::from_soles(3));
    }

    #[test]
    fn test_subtotal_with_zero_price_item() {
        let catalog = Arc::new(
            Catalog::new(vec![
                CatalogItem::new("agua", "Agua", "", Money::zero(), Category::Drink),
                CatalogItem::new("combo", "Combo", "", Money::from_cents(850), Category::Combo),
            ])
            .unwrap(),
        );
        let mut cart = Cart::new(Arc::clone(&catalog));
        cart.add_item(catalog.get("agua").unwrap()).unwrap();
        cart.add_item(catalog.get("agua").unwrap()).unwrap();
        cart.add_item(catalog.get("combo").unwrap()).unwrap();

        assert_eq!(cart.subtotal(), Money::from_cents(850));
        assert_eq!(cart.quantity_of("agua"), Some(2));
    }

    #[test]
    fn test_huge_price_does_not_overflow_totals() {
        let catalog = Arc::new(
            Catalog::new(vec![CatalogItem::new(
                "banquete",
                "Banquete",
                "",
                Money::from_cents(i64::MAX / 2),
                Category::Combo,
            )])
            .unwrap(),
        );
        let mut cart = Cart::new(Arc::clone(&catalog));
        cart.add_item(catalog.get("banquete").unwrap()).unwrap();
        assert!(cart.set_quantity("banquete", 5));

        assert_eq!(cart.subtotal().cents(), i64::MAX);
        assert_eq!(cart.total(DeliveryMode::Delivery).cents(), i64::MAX);
    }

    #[test]
    fn test_priced_lines() {
        let cart = scenario_cart();
        let totals: Vec<_> = cart
            .priced_lines()
            .map(|line| (line.item.name.as_str(), line.quantity, line.line_total()))
            .collect();

        assert_eq!(
            totals,
            [
                ("Combo Clásico", 2, Money::from_soles(16)),
                ("Chicha Morada 1L", 1, Money::from_soles(5)),
            ]
        );
    }

    #[test]
    fn test_same_edits_give_equal_carts() {
        let mut first = scenario_cart();
        let mut second = scenario_cart();
        assert_eq!(first, second);

        first.clear();
        second.clear();
        assert_eq!(first, Cart::new(menu()));
    }

    #[test]
    fn test_clear() {
        let mut cart = scenario_cart();
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }
}
