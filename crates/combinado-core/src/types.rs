//! # Domain Types
//!
//! Core domain types shared by the cart and the order composer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Category     │   │  DeliveryMode   │   │   OrderForm     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  Combo          │   │  Pickup         │   │  customer_name  │        │
//! │  │  Drink          │   │  Delivery (+3)  │   │  delivery_mode  │        │
//! │  └─────────────────┘   └─────────────────┘   │  address?       │        │
//! │                                              └─────────────────┘        │
//! │  ┌─────────────────┐                                                    │
//! │  │   StoreInfo     │  name, address, chat contact                       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DELIVERY_FEE;

// =============================================================================
// Category
// =============================================================================

/// Menu section a catalog item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fixed-price bundled meal.
    Combo,
    /// Beverage.
    Drink,
}

impl Category {
    /// Returns the lowercase name used in menu files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Combo => "combo",
            Category::Drink => "drink",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Delivery Mode
// =============================================================================

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Customer collects the order at the store (free).
    #[default]
    Pickup,
    /// Order is brought to the customer's address for a fixed fee.
    Delivery,
}

impl DeliveryMode {
    /// Surcharge for this mode.
    pub fn fee(&self) -> Money {
        match self {
            DeliveryMode::Pickup => Money::zero(),
            DeliveryMode::Delivery => DELIVERY_FEE,
        }
    }

    /// Returns true when an address is needed to submit.
    pub fn requires_address(&self) -> bool {
        matches!(self, DeliveryMode::Delivery)
    }
}

impl std::str::FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pickup" => Ok(DeliveryMode::Pickup),
            "delivery" => Ok(DeliveryMode::Delivery),
            other => Err(format!("unknown delivery mode: {other}")),
        }
    }
}

// =============================================================================
// Order Form
// =============================================================================

/// The short form the customer fills before ordering.
///
/// The address is kept even while pickup is selected so switching modes
/// back and forth does not lose what was typed; it is ignored for pickup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub customer_name: String,
    pub delivery_mode: DeliveryMode,
    pub address: Option<String>,
}

impl OrderForm {
    /// Creates a pickup form for the given customer.
    pub fn pickup(customer_name: impl Into<String>) -> Self {
        OrderForm {
            customer_name: customer_name.into(),
            delivery_mode: DeliveryMode::Pickup,
            address: None,
        }
    }

    /// Creates a delivery form for the given customer and address.
    pub fn delivery(customer_name: impl Into<String>, address: impl Into<String>) -> Self {
        OrderForm {
            customer_name: customer_name.into(),
            delivery_mode: DeliveryMode::Delivery,
            address: Some(address.into()),
        }
    }

    /// Trimmed customer name.
    pub fn name(&self) -> &str {
        self.customer_name.trim()
    }

    /// Trimmed address, only when delivery is selected and something was typed.
    pub fn delivery_address(&self) -> Option<&str> {
        if !self.delivery_mode.requires_address() {
            return None;
        }
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

// =============================================================================
// Store Info
// =============================================================================

/// Fixed store details printed in the summary and used for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    /// Shown in the summary title, upper-cased.
    pub name: String,
    /// Printed on the last line of the summary.
    pub address: String,
    /// Chat destination (phone number with country code, digits only).
    pub contact: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        StoreInfo {
            name: crate::DEFAULT_STORE_NAME.to_string(),
            address: crate::DEFAULT_STORE_ADDRESS.to_string(),
            contact: crate::DEFAULT_CONTACT.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_mode_default() {
        assert_eq!(DeliveryMode::default(), DeliveryMode::Pickup);
    }

    #[test]
    fn test_delivery_fee() {
        assert!(DeliveryMode::Pickup.fee().is_zero());
        assert_eq!(DeliveryMode::Delivery.fee(), Money::from_soles(3));
    }

    #[test]
    fn test_delivery_mode_from_str() {
        assert_eq!("pickup".parse::<DeliveryMode>(), Ok(DeliveryMode::Pickup));
        assert_eq!(" Delivery ".parse::<DeliveryMode>(), Ok(DeliveryMode::Delivery));
        assert!("drone".parse::<DeliveryMode>().is_err());
    }

    #[test]
    fn test_delivery_address_ignored_for_pickup() {
        let mut form = OrderForm::delivery("Juan", "  Av. Test 1 ");
        assert_eq!(form.delivery_address(), Some("Av. Test 1"));

        form.delivery_mode = DeliveryMode::Pickup;
        assert_eq!(form.delivery_address(), None);
        assert_eq!(form.address.as_deref(), Some("  Av. Test 1 "));
    }

    #[test]
    fn test_blank_address_is_absent() {
        let form = OrderForm::delivery("Juan", "   ");
        assert_eq!(form.delivery_address(), None);
    }

    #[test]
    fn test_order_form_json_shape() {
        let form = OrderForm::delivery("Juan", "Av. Test 1");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["customerName"], "Juan");
        assert_eq!(json["deliveryMode"], "delivery");
        assert_eq!(json["address"], "Av. Test 1");
    }
}
