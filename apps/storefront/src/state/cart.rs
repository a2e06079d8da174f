//! # Cart State
//!
//! Holds the session's cart and tells observers when it changes.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Session Input            Command                 Cart Change           │
//! │  ─────────────            ───────                 ───────────           │
//! │                                                                         │
//! │  add combo-8 ───────────► add_to_cart() ────────► qty + 1 / new line    │
//! │  inc / dec ─────────────► change_quantity() ────► qty ± 1 (never < 1)   │
//! │  set combo-8 3 ─────────► set_quantity() ───────► qty = 3 (0 removes)   │
//! │  rm combo-8 ────────────► remove_from_cart() ───► line dropped          │
//! │  clear ─────────────────► clear_cart() ─────────► empty                 │
//! │                                                                         │
//! │  Every write goes through `with_cart_mut`, which then hands the         │
//! │  updated cart to each observer.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is single-threaded, so the cart is owned directly and
//! mutation needs `&mut self`.

use std::sync::Arc;

use combinado_core::{Cart, Catalog, Category, DeliveryMode, Money};
use serde::Serialize;

/// A cart line as shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub item_id: String,
    pub name: String,
    pub category: Category,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

impl CartTotals {
    pub fn for_mode(cart: &Cart, mode: DeliveryMode) -> Self {
        CartTotals {
            item_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            delivery_fee: mode.fee(),
            total: cart.total(mode),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItemView>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn new(cart: &Cart, mode: DeliveryMode) -> Self {
        let items = cart
            .priced_lines()
            .map(|line| CartItemView {
                item_id: line.item.id.clone(),
                name: line.item.name.clone(),
                category: line.item.category,
                unit_price: line.item.price(),
                quantity: line.quantity,
                line_total: line.line_total(),
            })
            .collect();

        CartResponse {
            items,
            totals: CartTotals::for_mode(cart, mode),
        }
    }
}

type CartObserver = Box<dyn FnMut(&Cart)>;

/// Session-owned cart state.
pub struct CartState {
    cart: Cart,
    observers: Vec<CartObserver>,
}

impl CartState {
    /// Creates a new empty cart over the given menu.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        CartState {
            cart: Cart::new(catalog),
            observers: Vec::new(),
        }
    }

    /// Registers a callback run after every cart mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&Cart) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.cart)
    }

    /// Executes a function with write access to the cart, then notifies
    /// observers.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(item))?;
    /// ```
    pub fn with_cart_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let result = f(&mut self.cart);
        for observer in &mut self.observers {
            observer(&self.cart);
        }
        result
    }

    pub fn catalog(&self) -> &Catalog {
        self.cart.catalog()
    }
}

impl std::fmt::Debug for CartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartState")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn state() -> CartState {
        CartState::new(Arc::new(Catalog::combinado_menu()))
    }

    fn add(state: &mut CartState, id: &str) {
        let item = state.catalog().get(id).cloned().unwrap();
        state.with_cart_mut(|cart| cart.add_item(&item)).unwrap();
    }

    #[test]
    fn test_observers_see_every_mutation() {
        let mut state = state();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        state.subscribe(move |cart| sink.borrow_mut().push(cart.total_quantity()));

        add(&mut state, "combo-8");
        add(&mut state, "combo-8");
        state.with_cart_mut(|cart| cart.set_quantity("combo-8", 5));

        assert_eq!(*seen.borrow(), vec![1, 2, 5]);
    }

    #[test]
    fn test_reads_do_not_notify() {
        let mut state = state();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        state.subscribe(move |_| *counter.borrow_mut() += 1);

        let _ = state.with_cart(|cart| cart.subtotal());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_cart_response() {
        let mut state = state();
        add(&mut state, "combo-8");
        add(&mut state, "combo-8");
        add(&mut state, "chicha-1l");

        let response = state.with_cart(|cart| CartResponse::new(cart, DeliveryMode::Delivery));

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].name, "Combo Clásico");
        assert_eq!(response.items[0].line_total, Money::from_soles(16));
        assert_eq!(response.totals.subtotal, Money::from_soles(21));
        assert_eq!(response.totals.delivery_fee, Money::from_soles(3));
        assert_eq!(response.totals.total, Money::from_soles(24));
        assert_eq!(response.totals.total_quantity, 3);
    }

    #[test]
    fn test_cart_response_json_shape() {
        let mut state = state();
        add(&mut state, "chicha-500ml");

        let json = state.with_cart(|cart| {
            serde_json::to_value(CartResponse::new(cart, DeliveryMode::Pickup)).unwrap()
        });

        assert_eq!(json["items"][0]["itemId"], "chicha-500ml");
        assert_eq!(json["items"][0]["category"], "drink");
        assert_eq!(json["items"][0]["lineTotal"], 200);
        assert_eq!(json["totals"]["total"], 200);
    }
}
