//! # combinado-core: Pure Business Logic for the Combinado Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart and
//! order logic as plain Rust types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Combinado Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │               Presentation (storefront session)                 │    │
//! │  │    Menu ──► Cart ──► Order form ──► "Hacer Pedido"               │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ combinado-core (THIS CRATE) ★                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │  catalog  │  │   cart    │  │ summary   │  │   order   │    │    │
//! │  │   │  menu     │  │  lines    │  │ template  │  │ validate  │    │    │
//! │  │   │  items    │  │  totals   │  │ total     │  │ dispatch  │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │        NO I/O • NO NETWORK • LINK OPENING IS INJECTED           │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ LinkOpener::open(uri)                  │
//! │                                ▼                                        │
//! │                   https://wa.me/<contact>?text=...                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category, DeliveryMode, OrderForm, StoreInfo
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Validated menu
//! - [`cart`] - Cart Manager
//! - [`validation`] - Order submission rules and menu field checks
//! - [`summary`] - Order message template
//! - [`order`] - Order Composer and dispatch
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use combinado_core::{Cart, Catalog, DeliveryMode, Money};
//!
//! let menu = Arc::new(Catalog::combinado_menu());
//! let mut cart = Cart::new(Arc::clone(&menu));
//!
//! let combo = menu.get("combo-8").unwrap();
//! cart.add_item(combo).unwrap();
//! cart.add_item(combo).unwrap();
//! cart.add_item(menu.get("chicha-1l").unwrap()).unwrap();
//!
//! assert_eq!(cart.total(DeliveryMode::Pickup), Money::from_soles(21));
//! assert_eq!(cart.total(DeliveryMode::Delivery), Money::from_soles(24));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, PricedLine};
pub use catalog::{Catalog, CatalogItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Dispatch, LinkOpener, OrderComposer, RecordingOpener};
pub use summary::{compose_summary, parse_summary_total, Language, SummaryTemplate};
pub use types::*;
pub use validation::{validate_order, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Surcharge added to the total when delivery is selected (S/ 3).
pub const DELIVERY_FEE: Money = Money::from_soles(3);

/// Store name printed in the summary title.
pub const DEFAULT_STORE_NAME: &str = "Combinado";

/// Store address printed on the last line of the summary.
pub const DEFAULT_STORE_ADDRESS: &str = "Av. Ejemplo 123, Lima";

/// WhatsApp number orders are sent to (country code, no `+`).
pub const DEFAULT_CONTACT: &str = "51933701280";

/// Chat deep-link service.
pub const DEFAULT_CHAT_BASE: &str = "https://wa.me/";

/// Peruvian sol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "S/";
