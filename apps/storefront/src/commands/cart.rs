//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │────►│Dispatched│        │
//! │  │  Cart    │     │          │     │  Form    │     │          │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │                                 │              │
//! │                   add_to_cart                       place_order         │
//! │                   change_quantity                   (order.rs)          │
//! │                   set_quantity                                          │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ───────────────────► (back to empty)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any cart edit after a dispatch starts a new order.

use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartResponse, CartState, FormState};

/// Gets the current cart contents, with totals for the selected delivery
/// mode.
#[must_use]
pub fn get_cart(cart: &CartState, form: &FormState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::new(c, form.form().delivery_mode))
}

/// Adds one unit of a menu item.
///
/// ## Behavior
/// - If item already in cart: quantity increases by one
/// - If item not in cart: added as a new line
///
/// ## Errors
/// `NOT_FOUND` if the id is not on the menu.
pub fn add_to_cart(
    cart: &mut CartState,
    form: &mut FormState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let item = cart
        .catalog()
        .get(item_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Item", item_id))?;

    cart.with_cart_mut(|c| c.add_item(&item))?;
    form.reopen();

    Ok(get_cart(cart, form))
}

/// Adds `delta` to an item's quantity ("+" / "−" buttons).
///
/// ## Behavior
/// - A result below 1 leaves the quantity as it was
/// - Item not in cart: nothing happens
pub fn change_quantity(
    cart: &mut CartState,
    form: &mut FormState,
    item_id: &str,
    delta: i64,
) -> CartResponse {
    debug!(item_id = %item_id, delta = %delta, "change_quantity command");

    if cart.with_cart_mut(|c| c.change_quantity(item_id, delta)) {
        form.reopen();
    }

    get_cart(cart, form)
}

/// Sets an item's quantity (typed into the quantity field).
///
/// ## Behavior
/// - Quantity 0 or less: removes the item
/// - Item not in cart: nothing happens
pub fn set_quantity(
    cart: &mut CartState,
    form: &mut FormState,
    item_id: &str,
    quantity: i64,
) -> CartResponse {
    debug!(item_id = %item_id, quantity = %quantity, "set_quantity command");

    if cart.with_cart_mut(|c| c.set_quantity(item_id, quantity)) {
        form.reopen();
    }

    get_cart(cart, form)
}

/// Removes an item from the cart.
pub fn remove_from_cart(cart: &mut CartState, form: &mut FormState, item_id: &str) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");

    if cart.with_cart_mut(|c| c.remove_item(item_id)) {
        form.reopen();
    }

    get_cart(cart, form)
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &mut CartState, form: &mut FormState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| c.clear());
    form.reopen();

    get_cart(cart, form)
}
