//! # Combinado Storefront Library
//!
//! Session layer for the Combinado storefront: configuration, session state,
//! the command set and the line-oriented shell that drives it.
//!
//! ## Module Organization
//! ```text
//! combinado_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState, Dispatcher
//! │   ├── cart.rs     ◄─── Cart state, observers, response views
//! │   ├── form.rs     ◄─── Order form and order status
//! │   ├── menu.rs     ◄─── Menu file loading
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Menu listing
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── order.rs    ◄─── Order form and dispatch commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── shell.rs        ◄─── Line parser and session loop
//! ├── opener.rs       ◄─── Console LinkOpener
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod opener;
pub mod shell;
pub mod state;

use std::io;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use opener::ConsoleOpener;
use state::{AppState, ConfigState};

/// Runs one storefront session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,combinado=debug, overridden with RUST_LOG           │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults ◄── storefront.toml ◄── COMBINADO_* variables            │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • Menu (built-in or menuPath)                                       │
/// │     • CartState, FormState, Dispatcher with console opener              │
/// │                                                                         │
/// │  4. Run Session ──────────────────────────────────────────────────────► │
/// │     • one command per stdin line, one JSON line per reply               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    info!("Starting Combinado storefront");

    let config = ConfigState::load()?;
    info!(
        store = %config.store_name,
        language = ?config.language,
        "Configuration loaded"
    );

    let opener = ConsoleOpener::new(io::stderr());
    let mut state = AppState::new(config, Box::new(opener))?;

    state.cart.subscribe(|cart| {
        debug!(
            lines = cart.line_count(),
            quantity = cart.total_quantity(),
            subtotal = %cart.subtotal(),
            "Cart updated"
        );
    });

    info!(items = state.cart.catalog().len(), "Session ready");

    let stdin = io::stdin();
    shell::run_session(&mut state, stdin.lock(), io::stdout().lock())
        .map_err(|e| ApiError::internal(format!("Session I/O failed: {}", e)))?;

    info!("Session closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=combinado=trace` - Show trace for combinado crates only
/// - Default: INFO, DEBUG for combinado crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,combinado=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
