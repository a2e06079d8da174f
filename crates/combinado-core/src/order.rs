//! # Order Composer
//!
//! Turns a cart and an order form into a chat deep link and hands it off.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Idle ──submit──► Validating ──┬── Err(reason) ──► Idle                │
//! │                                 │                                       │
//! │                                 └── Ok ──► compose summary              │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                   https://wa.me/<contact>?text=...      │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                   LinkOpener::open ──► Dispatched       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Opening the link is fire-and-forget: no response is read back, and the
//! order counts as dispatched once the opener has been called.

use url::Url;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::summary::SummaryTemplate;
use crate::types::{OrderForm, StoreInfo};
use crate::validation::{validate_contact, validate_order, ValidationResult};

// =============================================================================
// Link Opener
// =============================================================================

/// Capability to open an external link (browser navigation, etc.).
pub trait LinkOpener {
    fn open(&mut self, uri: &Url);
}

/// Opener that only remembers what it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<Url>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, uri: &Url) {
        self.opened.push(uri.clone());
    }
}

impl<T: LinkOpener + ?Sized> LinkOpener for &mut T {
    fn open(&mut self, uri: &Url) {
        (**self).open(uri)
    }
}

// =============================================================================
// Dispatch URI
// =============================================================================

/// Builds `<base><contact>?text=<percent-encoded summary>`.
///
/// ## Example
/// ```rust
/// use url::Url;
/// use combinado_core::order::build_dispatch_uri;
///
/// let base = Url::parse("https://wa.me/").unwrap();
/// let uri = build_dispatch_uri("Hola *mundo*", "51933701280", &base).unwrap();
/// assert_eq!(uri.as_str(), "https://wa.me/51933701280?text=Hola%20%2Amundo%2A");
/// ```
pub fn build_dispatch_uri(summary: &str, contact: &str, base: &Url) -> CoreResult<Url> {
    let target = contact_url(base, contact)?;
    Ok(with_text(target, summary))
}

fn contact_url(base: &Url, contact: &str) -> CoreResult<Url> {
    validate_contact(contact)?;

    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(CoreError::InvalidChatLink {
            uri: base.to_string(),
            reason: "must be an absolute http(s) URL".to_string(),
        });
    }

    // Appended as a new segment; the base path is kept whether or not it
    // ends in a slash.
    let mut target = base.clone();
    target.set_fragment(None);
    target
        .path_segments_mut()
        .map_err(|()| CoreError::InvalidChatLink {
            uri: base.to_string(),
            reason: "cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .push(contact);

    Ok(target)
}

fn with_text(mut target: Url, summary: &str) -> Url {
    let query = format!("text={}", urlencoding::encode(summary));
    target.set_query(Some(&query));
    target
}

// =============================================================================
// Dispatch
// =============================================================================

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub summary: String,
    pub uri: Url,
    pub total: Money,
}

// =============================================================================
// Order Composer
// =============================================================================

/// Validates, formats and dispatches orders for one store.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    store: StoreInfo,
    template: SummaryTemplate,
    target: Url,
}

impl OrderComposer {
    /// Creates a composer that sends orders through `chat_base`
    /// (normally `https://wa.me/`).
    ///
    /// ## Errors
    /// - `CoreError::Validation` if the store contact is not all digits
    /// - `CoreError::InvalidChatLink` if `chat_base` is not an absolute URL
    pub fn new(store: StoreInfo, template: SummaryTemplate, chat_base: &str) -> CoreResult<Self> {
        let base = Url::parse(chat_base).map_err(|e| CoreError::InvalidChatLink {
            uri: chat_base.to_string(),
            reason: e.to_string(),
        })?;
        let target = contact_url(&base, &store.contact)?;

        Ok(OrderComposer {
            store,
            template,
            target,
        })
    }

    pub fn store(&self) -> &StoreInfo {
        &self.store
    }

    pub fn template(&self) -> &SummaryTemplate {
        &self.template
    }

    /// See [`validate_order`].
    pub fn validate(&self, cart: &Cart, form: &OrderForm) -> ValidationResult<()> {
        validate_order(cart, form)
    }

    pub fn compose_summary(&self, cart: &Cart, form: &OrderForm) -> String {
        self.template.compose(cart, form, &self.store)
    }

    /// Deep link for an already composed summary.
    pub fn dispatch_uri(&self, summary: &str) -> Url {
        with_text(self.target.clone(), summary)
    }

    /// Validates the order and, if it passes, opens the deep link.
    ///
    /// Nothing is opened when validation fails.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use combinado_core::*;
    ///
    /// let menu = Arc::new(Catalog::combinado_menu());
    /// let mut cart = Cart::new(Arc::clone(&menu));
    /// cart.add_item(menu.get("combo-8").unwrap()).unwrap();
    ///
    /// let composer = OrderComposer::new(
    ///     StoreInfo::default(),
    ///     SummaryTemplate::default(),
    ///     DEFAULT_CHAT_BASE,
    /// ).unwrap();
    /// let mut opener = RecordingOpener::default();
    ///
    /// let dispatch = composer
    ///     .submit(&cart, &OrderForm::pickup("Juan"), &mut opener)
    ///     .unwrap();
    /// assert_eq!(dispatch.total, Money::from_soles(8));
    /// assert_eq!(opener.opened, vec![dispatch.uri]);
    /// ```
    pub fn submit(
        &self,
        cart: &Cart,
        form: &OrderForm,
        mut opener: impl LinkOpener,
    ) -> ValidationResult<Dispatch> {
        self.validate(cart, form)?;

        let summary = self.compose_summary(cart, form);
        let uri = self.dispatch_uri(&summary);
        opener.open(&uri);

        Ok(Dispatch {
            summary,
            uri,
            total: cart.total(form.delivery_mode),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
