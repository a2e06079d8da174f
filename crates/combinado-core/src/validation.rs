//! # Validation Module
//!
//! Business rule validation for the storefront.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load                                                  │
//! │  ├── item ids, names, prices                                            │
//! │  └── runs once, so cart operations never re-check items                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Order submission                                              │
//! │  ├── validate_order(cart, form)                                         │
//! │  └── EmptyCart → MissingName → MissingAddress (first failure wins)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::types::OrderForm;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Order Validation
// =============================================================================

/// Checks that an order can be submitted.
///
/// ## Rules (checked in this order)
/// 1. the cart has at least one line, else `EmptyCart`
/// 2. the customer name is not blank, else `MissingName`
/// 3. delivery orders carry a non-blank address, else `MissingAddress`
///
/// Only the first failure is returned.
///
/// ## User Workflow
/// ```text
/// Click "Hacer Pedido"
///      │
///      ▼
/// validate_order(cart, form) ← THIS FUNCTION
///      │
///      ├── Err(reason) → message shown, order stays editable
///      │
///      └── Ok(()) → summary composed and dispatched
/// ```
pub fn validate_order(cart: &Cart, form: &OrderForm) -> ValidationResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    if form.name().is_empty() {
        return Err(ValidationError::MissingName);
    }

    if form.delivery_mode.requires_address() && form.delivery_address().is_none() {
        return Err(ValidationError::MissingAddress);
    }

    Ok(())
}

// =============================================================================
// Catalog Field Validators
// =============================================================================

/// Validates a catalog item id.
///
/// ## Rules
/// - Must not be empty
/// - Must contain only letters, digits and hyphens
///
/// ## Example
/// ```rust
/// use combinado_core::validation::validate_item_id;
///
/// assert!(validate_item_id("chicha-500ml").is_ok());
/// assert!(validate_item_id("").is_err());
/// assert!(validate_item_id("combo 8").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if !id.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog item name (must not be blank).
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in céntimos.
///
/// Zero is allowed (free items); negative prices are not.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a chat destination: digits only, country code included.
///
/// ## Example
/// ```rust
/// use combinado_core::validation::validate_contact;
///
/// assert!(validate_contact("51933701280").is_ok());
/// assert!(validate_contact("+51 933").is_err());
/// ```
pub fn validate_contact(contact: &str) -> ValidationResult<()> {
    if contact.is_empty() {
        return Err(ValidationError::Required {
            field: "contact".to_string(),
        });
    }

    if !contact.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "contact".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::DeliveryMode;
    use std::sync::Arc;

    fn cart_with_combo() -> Cart {
        let catalog = Arc::new(Catalog::combinado_menu());
        let mut cart = Cart::new(Arc::clone(&catalog));
        cart.add_item(catalog.get("combo-8").unwrap()).unwrap();
        cart
    }

    #[test]
    fn test_empty_cart_wins_over_form_errors() {
        let cart = Cart::new(Arc::new(Catalog::combinado_menu()));

        let blank = OrderForm::default();
        let complete = OrderForm::delivery("Juan", "Av. Test 1");

        assert_eq!(validate_order(&cart, &blank), Err(ValidationError::EmptyCart));
        assert_eq!(validate_order(&cart, &complete), Err(ValidationError::EmptyCart));
    }

    #[test]
    fn test_missing_name() {
        let cart = cart_with_combo();
        let form = OrderForm::pickup("");
        assert_eq!(validate_order(&cart, &form), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_blank_name_counts_as_missing() {
        let cart = cart_with_combo();
        let form = OrderForm::pickup("   ");
        assert_eq!(validate_order(&cart, &form), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_missing_name_reported_before_address() {
        let cart = cart_with_combo();
        let form = OrderForm::delivery("", "");
        assert_eq!(validate_order(&cart, &form), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_missing_address() {
        let cart = cart_with_combo();

        let empty = OrderForm::delivery("Juan", "");
        assert_eq!(validate_order(&cart, &empty), Err(ValidationError::MissingAddress));

        let absent = OrderForm {
            customer_name: "Juan".to_string(),
            delivery_mode: DeliveryMode::Delivery,
            address: None,
        };
        assert_eq!(validate_order(&cart, &absent), Err(ValidationError::MissingAddress));
    }

    #[test]
    fn test_pickup_ignores_address() {
        let cart = cart_with_combo();
        let form = OrderForm::pickup("Juan");
        assert_eq!(validate_order(&cart, &form), Ok(()));
    }

    #[test]
    fn test_valid_delivery() {
        let cart = cart_with_combo();
        let form = OrderForm::delivery("Juan", "Av. Test 1");
        assert_eq!(validate_order(&cart, &form), Ok(()));
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("combo-8").is_ok());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id("combo_8").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(800).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact("51933701280").is_ok());
        assert!(validate_contact("").is_err());
        assert!(validate_contact("51-933").is_err());
    }
}
