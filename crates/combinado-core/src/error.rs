//! # Error Types
//!
//! Domain-specific error types for combinado-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  combinado-core errors (this file)                                      │
//! │  ├── CoreError        - Cart/catalog domain errors                      │
//! │  └── ValidationError  - Order form and catalog validation failures      │
//! │                                                                         │
//! │  storefront errors (in app)                                             │
//! │  ├── ConfigError      - Config / menu file problems                     │
//! │  └── ApiError         - What the session prints (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Session output          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog item cannot be found.
    ///
    /// ## When This Occurs
    /// - The session asked for an id that is not on the menu
    /// - An item from a different catalog was handed to a cart
    #[error("Item not found: {0}")]
    UnknownItem(String),

    /// The chat service link could not be built.
    ///
    /// ## When This Occurs
    /// - The configured chat base is not an absolute http(s) URL
    #[error("Invalid chat link {uri}: {reason}")]
    InvalidChatLink { uri: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Validation failures.
///
/// The first three variants are the order submission rules. They are
/// checked in declaration order and only the first failure is reported.
/// The remaining variants are field-level checks used while loading a menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Submission attempted with no lines in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Customer name absent or blank.
    #[error("customer name is required")]
    MissingName,

    /// Delivery selected without an address.
    #[error("delivery address is required")]
    MissingAddress,

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. contact with letters in it).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two menu items with one id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Returns true for the three order submission failures.
    pub fn is_order_rejection(&self) -> bool {
        matches!(
            self,
            ValidationError::EmptyCart
                | ValidationError::MissingName
                | ValidationError::MissingAddress
        )
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownItem("combo-99".to_string());
        assert_eq!(err.to_string(), "Item not found: combo-99");

        let err = CoreError::InvalidChatLink {
            uri: "wa.me".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid chat link wa.me: relative URL without a base"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::EmptyCart.to_string(), "cart is empty");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "combo-8".to_string(),
        };
        assert_eq!(err.to_string(), "id 'combo-8' already exists");
    }

    #[test]
    fn test_order_rejection_classification() {
        assert!(ValidationError::MissingName.is_order_rejection());
        assert!(!ValidationError::Required {
            field: "name".to_string()
        }
        .is_order_rejection());
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::MissingAddress.into();
        assert!(matches!(
            core_err,
            CoreError::Validation(ValidationError::MissingAddress)
        ));
    }
}
