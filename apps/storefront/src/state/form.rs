//! # Order Form State
//!
//! The customer's name, delivery choice and address, plus where the current
//! order is in its lifecycle.
//!
//! ```text
//!   Idle ──place_order──► (validating) ──┬── rejected ──► Idle
//!     ▲                                  │
//!     │                                  └── accepted ──► Dispatched
//!     │                                                       │
//!     └──────────── any cart or form edit ────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use combinado_core::{DeliveryMode, Money, OrderForm};
use serde::Serialize;
use uuid::Uuid;

/// Where the current order stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum OrderStatus {
    /// Being edited.
    #[default]
    Idle,
    /// Handed to the chat link; terminal for this order.
    Dispatched {
        order_id: Uuid,
        total: Money,
        dispatched_at: DateTime<Utc>,
    },
}

/// Session-owned order form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    form: OrderForm,
    status: OrderStatus,
}

impl FormState {
    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.form.customer_name = name.into();
        self.reopen();
    }

    pub fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        self.form.delivery_mode = mode;
        self.reopen();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.form.address = Some(address.into());
        self.reopen();
    }

    /// Marks the current order as dispatched and returns its reference.
    pub fn mark_dispatched(&mut self, total: Money) -> Uuid {
        let order_id = Uuid::new_v4();
        self.status = OrderStatus::Dispatched {
            order_id,
            total,
            dispatched_at: Utc::now(),
        };
        order_id
    }

    /// Starts a new order cycle after a dispatch.
    pub fn reopen(&mut self) {
        self.status = OrderStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_idle_pickup() {
        let state = FormState::default();
        assert_eq!(state.status(), &OrderStatus::Idle);
        assert_eq!(state.form().delivery_mode, DeliveryMode::Pickup);
        assert!(state.form().address.is_none());
    }

    #[test]
    fn test_edit_after_dispatch_starts_new_order() {
        let mut state = FormState::default();
        state.set_customer_name("Juan");

        state.mark_dispatched(Money::from_soles(21));
        assert!(matches!(state.status(), OrderStatus::Dispatched { .. }));

        state.set_delivery_mode(DeliveryMode::Delivery);
        assert_eq!(state.status(), &OrderStatus::Idle);
        assert_eq!(state.form().customer_name, "Juan");
    }

    #[test]
    fn test_status_json_shape() {
        let mut state = FormState::default();
        state.mark_dispatched(Money::from_soles(24));

        let json = serde_json::to_value(state.status()).unwrap();
        assert_eq!(json["state"], "dispatched");
        assert_eq!(json["total"], 2400);
        assert!(json["orderId"].is_string());

        let idle = serde_json::to_value(OrderStatus::Idle).unwrap();
        assert_eq!(idle["state"], "idle");
    }
}
