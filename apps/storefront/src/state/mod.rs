//! # State Module
//!
//! Manages session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of one struct with every field, each concern gets its own type
//! and commands take only the pieces they need:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐  │
//! │  │ ConfigState  │  │  CartState   │  │  FormState   │  │  Dispatcher │  │
//! │  │              │  │              │  │              │  │             │  │
//! │  │ store, lang, │  │ Cart +       │  │ OrderForm +  │  │ Composer +  │  │
//! │  │ contact      │  │ observers    │  │ OrderStatus  │  │ LinkOpener  │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘  │
//! │                                                                         │
//! │  ConfigState is read-only after startup. The rest is owned by the       │
//! │  single session loop; no locking is involved.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod form;
mod menu;

pub use cart::{CartItemView, CartResponse, CartState, CartTotals};
pub use config::{ConfigError, ConfigResult, ConfigState, CONFIG_FILE_NAME};
pub use form::{FormState, OrderStatus};
pub use menu::load_catalog;

use combinado_core::{CoreResult, LinkOpener, OrderComposer};

/// Order composer plus the link opener it hands deep links to.
pub struct Dispatcher {
    pub composer: OrderComposer,
    pub opener: Box<dyn LinkOpener>,
}

impl Dispatcher {
    pub fn new(config: &ConfigState, opener: Box<dyn LinkOpener>) -> CoreResult<Self> {
        let composer = OrderComposer::new(
            config.store_info(),
            config.summary_template(),
            &config.chat_base,
        )?;
        Ok(Dispatcher { composer, opener })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("composer", &self.composer)
            .finish_non_exhaustive()
    }
}

/// Everything one storefront session owns.
#[derive(Debug)]
pub struct AppState {
    pub config: ConfigState,
    pub cart: CartState,
    pub form: FormState,
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Builds session state from configuration.
    pub fn new(config: ConfigState, opener: Box<dyn LinkOpener>) -> Result<Self, crate::error::ApiError> {
        let catalog = load_catalog(&config)?;
        let dispatcher = Dispatcher::new(&config, opener)?;

        Ok(AppState {
            cart: CartState::new(catalog),
            form: FormState::default(),
            dispatcher,
            config,
        })
    }
}
