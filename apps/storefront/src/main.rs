//! # Combinado Storefront Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Combinado Storefront                             │
//! │                                                                         │
//! │  stdin ──► shell (one command per line)                                 │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            commands/ ──► add_to_cart, set_quantity, place_order         │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │            combinado-core ──► Cart, OrderComposer                       │
//! │                 │                                                       │
//! │                 ├──► stdout: JSON replies                               │
//! │                 └──► stderr: logs, opened chat links                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup lives in lib.rs for testability
    match combinado_storefront::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("combinado-storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
