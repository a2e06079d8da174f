//! # Order Commands
//!
//! Edits the order form and places the order.
//!
//! ## Placing an Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place_order                                          │
//! │                                                                         │
//! │  CartState + FormState                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  OrderComposer::submit ──── rejected ──► ApiError (ORDER_REJECTED)      │
//! │         │                                localized message, no link     │
//! │         ▼                                                               │
//! │  LinkOpener::open(wa.me deep link)                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  FormState::mark_dispatched ──► OrderReceipt                            │
//! │         │                                                               │
//! │         └── clearCartAfterDispatch? ──► empty cart                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use combinado_core::{DeliveryMode, Money, OrderForm};
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, CartState, CartTotals, FormState, OrderStatus};

/// Form contents plus the totals they imply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub form: OrderForm,
    pub status: OrderStatus,
    pub totals: CartTotals,
}

impl FormResponse {
    fn new(cart: &CartState, form: &FormState) -> Self {
        let order_form = form.form().clone();
        let totals = cart.with_cart(|c| CartTotals::for_mode(c, order_form.delivery_mode));
        FormResponse {
            form: order_form,
            status: form.status().clone(),
            totals,
        }
    }
}

/// What the customer gets back once the chat link has been opened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub total: Money,
    pub total_formatted: String,
    pub uri: Url,
    pub summary: String,
}

/// Gets the order form.
#[must_use]
pub fn get_form(cart: &CartState, form: &FormState) -> FormResponse {
    debug!("get_form command");
    FormResponse::new(cart, form)
}

/// Sets the customer's name.
pub fn set_customer_name(cart: &CartState, form: &mut FormState, name: &str) -> FormResponse {
    debug!("set_customer_name command");
    form.set_customer_name(name);
    FormResponse::new(cart, form)
}

/// Switches between store pickup and delivery. Totals change with it.
pub fn set_delivery_mode(
    cart: &CartState,
    form: &mut FormState,
    mode: DeliveryMode,
) -> FormResponse {
    debug!(mode = ?mode, "set_delivery_mode command");
    form.set_delivery_mode(mode);
    FormResponse::new(cart, form)
}

/// Sets the delivery address. Kept while in pickup mode, but only used for
/// delivery.
pub fn set_address(cart: &CartState, form: &mut FormState, address: &str) -> FormResponse {
    debug!("set_address command");
    form.set_address(address);
    FormResponse::new(cart, form)
}

/// Validates the order and hands the deep link to the opener.
///
/// ## Errors
/// `ORDER_REJECTED` with the localized message when the cart is empty, the
/// name is missing, or delivery was chosen without an address. Nothing is
/// opened in that case.
pub fn place_order(state: &mut AppState) -> Result<OrderReceipt, ApiError> {
    debug!("place_order command");

    let AppState {
        config,
        cart,
        form,
        dispatcher,
    } = state;

    let composer = &dispatcher.composer;
    let opener = &mut *dispatcher.opener;

    let dispatch = cart
        .with_cart(|c| composer.submit(c, form.form(), opener))
        .map_err(|e| {
            warn!(reason = %e, "Order rejected");
            ApiError::rejected(config.language, &e)
        })?;

    let order_id = form.mark_dispatched(dispatch.total);
    info!(
        order_id = %order_id,
        total = %dispatch.total,
        mode = ?form.form().delivery_mode,
        "Order dispatched"
    );

    if config.clear_cart_after_dispatch {
        cart.with_cart_mut(|c| c.clear());
        debug!("Cart cleared after dispatch");
    }

    Ok(OrderReceipt {
        order_id,
        total: dispatch.total,
        total_formatted: config.format_currency(dispatch.total),
        uri: dispatch.uri,
        summary: dispatch.summary,
    })
}
