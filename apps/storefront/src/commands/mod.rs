//! # Commands Module
//!
//! Every operation the session shell can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Menu listing
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── order.rs    ◄─── Order form and dispatch
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Cart plus the form (an edit reopens a dispatched order)
//! fn add_to_cart(cart: &mut CartState, form: &mut FormState, item_id: &str)
//!
//! // Needs everything that goes into an order
//! fn place_order(state: &mut AppState)
//! ```

pub mod cart;
pub mod config;
pub mod menu;
pub mod order;
