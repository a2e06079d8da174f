//! # Order Summary
//!
//! Renders the cart and order form as the chat message the store receives.
//!
//! The text is sent verbatim, so line order and labels are fixed. The
//! Spanish template (the default) produces:
//!
//! ```text
//! 🍽️ *PEDIDO - COMBINADO*
//!
//! 👤 *Cliente:* Juan
//!
//! 📋 *Productos:*
//! • Combo Clásico x2 - S/ 16
//! • Chicha Morada 1L x1 - S/ 5
//!
//! 🚚 *Entrega:* Delivery (+S/ 3) - Av. Test 1
//!
//! 💰 *Total:* S/ 24
//!
//! 📍 *Dirección tienda:* Av. Ejemplo 123, Lima
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{DeliveryMode, OrderForm, StoreInfo};
use crate::DELIVERY_FEE;

const TITLE_ICON: &str = "\u{1F37D}\u{FE0F}";
const CUSTOMER_ICON: &str = "\u{1F464}";
const ITEMS_ICON: &str = "\u{1F4CB}";
const FULFILMENT_ICON: &str = "\u{1F69A}";
const TOTAL_ICON: &str = "\u{1F4B0}";
const STORE_ICON: &str = "\u{1F4CD}";
const BULLET: &str = "\u{2022}";

/// Free text is printed on one line so it cannot fake a label line.
fn one_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

// =============================================================================
// Language
// =============================================================================

/// Language of the summary labels and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish, as received by the store today.
    #[default]
    Es,
    En,
}

impl Language {
    fn title(&self) -> &'static str {
        match self {
            Language::Es => "PEDIDO",
            Language::En => "ORDER",
        }
    }

    fn customer_label(&self) -> &'static str {
        match self {
            Language::Es => "Cliente",
            Language::En => "Customer",
        }
    }

    fn items_label(&self) -> &'static str {
        match self {
            Language::Es => "Productos",
            Language::En => "Items",
        }
    }

    fn fulfilment_label(&self) -> &'static str {
        match self {
            Language::Es => "Entrega",
            Language::En => "Delivery",
        }
    }

    fn total_label(&self) -> &'static str {
        "Total"
    }

    fn store_label(&self) -> &'static str {
        match self {
            Language::Es => "Dirección tienda",
            Language::En => "Store address",
        }
    }

    /// Message shown to the customer when an order is rejected.
    ///
    /// ## Example
    /// ```rust
    /// use combinado_core::{Language, ValidationError};
    ///
    /// assert_eq!(
    ///     Language::Es.rejection_message(&ValidationError::MissingName),
    ///     "Por favor ingresa tu nombre"
    /// );
    /// ```
    pub fn rejection_message(&self, reason: &ValidationError) -> String {
        match (self, reason) {
            (Language::Es, ValidationError::EmptyCart) => "Agrega productos a tu carrito".into(),
            (Language::Es, ValidationError::MissingName) => "Por favor ingresa tu nombre".into(),
            (Language::Es, ValidationError::MissingAddress) => {
                "Por favor ingresa tu dirección para el delivery".into()
            }
            (Language::En, ValidationError::EmptyCart) => "Add some products to your cart".into(),
            (Language::En, ValidationError::MissingName) => "Please enter your name".into(),
            (Language::En, ValidationError::MissingAddress) => {
                "Please enter your address for delivery".into()
            }
            (_, other) => other.to_string(),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

// =============================================================================
// Summary Template
// =============================================================================

/// Language plus currency symbol; everything else in the message is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTemplate {
    pub language: Language,
    pub currency_symbol: String,
}

impl Default for SummaryTemplate {
    fn default() -> Self {
        SummaryTemplate {
            language: Language::Es,
            currency_symbol: crate::DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl SummaryTemplate {
    pub fn new(language: Language, currency_symbol: impl Into<String>) -> Self {
        SummaryTemplate {
            language,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Formats an amount with the currency symbol, e.g. `S/ 16`.
    pub fn format_money(&self, amount: Money) -> String {
        format!("{} {}", self.currency_symbol, amount)
    }

    /// Text after the fulfilment label.
    pub fn fulfilment_text(&self, form: &OrderForm) -> String {
        let address = one_line(form.delivery_address().unwrap_or_default());
        match (form.delivery_mode, self.language) {
            (DeliveryMode::Pickup, Language::Es) => "Recojo en tienda".to_string(),
            (DeliveryMode::Pickup, Language::En) => "store pickup".to_string(),
            (DeliveryMode::Delivery, Language::Es) => {
                format!("Delivery (+{}) - {}", self.format_money(DELIVERY_FEE), address)
            }
            (DeliveryMode::Delivery, Language::En) => {
                format!("delivery (+{}) - {}", DELIVERY_FEE, address)
            }
        }
    }

    fn total_prefix(&self) -> String {
        format!(
            "{} *{}:* {} ",
            TOTAL_ICON,
            self.language.total_label(),
            self.currency_symbol
        )
    }

    /// Renders the order message.
    ///
    /// The form is expected to have passed validation; a blank address on a
    /// delivery order is rendered as empty text.
    pub fn compose(&self, cart: &Cart, form: &OrderForm, store: &StoreInfo) -> String {
        let lang = self.language;

        let items = cart
            .priced_lines()
            .map(|line| {
                format!(
                    "{} {} x{} - {}",
                    BULLET,
                    one_line(&line.item.name),
                    line.quantity,
                    self.format_money(line.line_total())
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let sections = [
            format!(
                "{} *{} - {}*",
                TITLE_ICON,
                lang.title(),
                one_line(&store.name).to_uppercase()
            ),
            format!("{} *{}:* {}", CUSTOMER_ICON, lang.customer_label(), one_line(form.name())),
            format!("{} *{}:*\n{}", ITEMS_ICON, lang.items_label(), items),
            format!(
                "{} *{}:* {}",
                FULFILMENT_ICON,
                lang.fulfilment_label(),
                self.fulfilment_text(form)
            ),
            format!("{}{}", self.total_prefix(), cart.total(form.delivery_mode)),
            format!("{} *{}:* {}", STORE_ICON, lang.store_label(), one_line(&store.address)),
        ];

        sections.join("\n\n").trim().to_string()
    }

    /// Reads the total back out of a composed summary.
    ///
    /// The last total line wins. Returns `None` if it is missing or
    /// malformed.
    pub fn parse_total(&self, summary: &str) -> Option<Money> {
        let prefix = self.total_prefix();
        summary
            .lines()
            .rev()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
            .and_then(Money::parse)
    }
}

/// Renders the order summary with the given template.
///
/// Free-function form of [`SummaryTemplate::compose`].
pub fn compose_summary(
    cart: &Cart,
    form: &OrderForm,
    store: &StoreInfo,
    template: &SummaryTemplate,
) -> String {
    template.compose(cart, form, store)
}

/// Reads the total back out of a summary rendered with `template`.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use combinado_core::*;
///
/// let menu = Arc::new(Catalog::combinado_menu());
/// let mut cart = Cart::new(Arc::clone(&menu));
/// cart.add_item(menu.get("combo-12").unwrap()).unwrap();
///
/// let template = SummaryTemplate::default();
/// let form = OrderForm::delivery("Juan", "Av. Test 1");
/// let summary = compose_summary(&cart, &form, &StoreInfo::default(), &template);
/// assert_eq!(parse_summary_total(&summary, &template), Some(Money::from_soles(15)));
/// ```
pub fn parse_summary_total(summary: &str, template: &SummaryTemplate) -> Option<Money> {
    template.parse_total(summary)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::Arc;

    fn scenario_cart() -> Cart {
        let menu = Arc::new(Catalog::combinado_menu());
        let mut cart = Cart::new(Arc::clone(&menu));
        let combo = menu.get("combo-8").unwrap();
        cart.add_item(combo).unwrap();
        cart.add_item(combo).unwrap();
        cart.add_item(menu.get("chicha-1l").unwrap()).unwrap();
        cart
    }

    #[test]
    fn test_spanish_pickup_summary() {
        let summary = SummaryTemplate::default().compose(
            &scenario_cart(),
            &OrderForm::pickup("Juan"),
            &StoreInfo::default(),
        );

        let expected = "🍽️ *PEDIDO - COMBINADO*\n\
                        \n\
                        👤 *Cliente:* Juan\n\
                        \n\
                        📋 *Productos:*\n\
                        • Combo Clásico x2 - S/ 16\n\
                        • Chicha Morada 1L x1 - S/ 5\n\
                        \n\
                        🚚 *Entrega:* Recojo en tienda\n\
                        \n\
                        💰 *Total:* S/ 21\n\
                        \n\
                        📍 *Dirección tienda:* Av. Ejemplo 123, Lima";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_spanish_delivery_line() {
        let summary = SummaryTemplate::default().compose(
            &scenario_cart(),
            &OrderForm::delivery("Juan", "Av. Test 1"),
            &StoreInfo::default(),
        );

        assert!(summary.contains("🚚 *Entrega:* Delivery (+S/ 3) - Av. Test 1"));
        assert!(summary.contains("💰 *Total:* S/ 24"));
    }

    #[test]
    fn test_english_delivery_line() {
        let template = SummaryTemplate::new(Language::En, "S/");
        let summary = template.compose(
            &scenario_cart(),
            &OrderForm::delivery("Juan", "Av. Test 1"),
            &StoreInfo::default(),
        );

        assert!(summary.contains("delivery (+3) - Av. Test 1"));
        assert!(summary.starts_with("🍽️ *ORDER - COMBINADO*"));
        assert!(summary.ends_with("📍 *Store address:* Av. Ejemplo 123, Lima"));
    }

    #[test]
    fn test_english_pickup_text() {
        let template = SummaryTemplate::new(Language::En, "S/");
        assert_eq!(template.fulfilment_text(&OrderForm::pickup("Ana")), "store pickup");
    }

    #[test]
    fn test_customer_name_is_trimmed() {
        let summary = SummaryTemplate::default().compose(
            &scenario_cart(),
            &OrderForm::pickup("  Juan  "),
            &StoreInfo::default(),
        );
        assert!(summary.contains("👤 *Cliente:* Juan\n"));
    }

    #[test]
    fn test_parse_total_matches_cart_total() {
        let cart = scenario_cart();
        for template in [
            SummaryTemplate::default(),
            SummaryTemplate::new(Language::En, "PEN"),
        ] {
            for form in [
                OrderForm::pickup("Juan"),
                OrderForm::delivery("Juan", "Av. Test 1"),
            ] {
                let summary = template.compose(&cart, &form, &StoreInfo::default());
                assert_eq!(
                    template.parse_total(&summary),
                    Some(cart.total(form.delivery_mode))
                );
            }
        }
    }

    #[test]
    fn test_parse_total_with_fractional_prices() {
        let menu = Arc::new(
            Catalog::new(vec![crate::catalog::CatalogItem::new(
                "mini",
                "Mini Combo",
                "",
                Money::from_cents(650),
                crate::types::Category::Combo,
            )])
            .unwrap(),
        );
        let mut cart = Cart::new(Arc::clone(&menu));
        cart.add_item(menu.get("mini").unwrap()).unwrap();

        let template = SummaryTemplate::default();
        let summary = template.compose(&cart, &OrderForm::pickup("Ana"), &StoreInfo::default());

        assert!(summary.contains("• Mini Combo x1 - S/ 6.50"));
        assert_eq!(template.parse_total(&summary), Some(Money::from_cents(650)));
    }

    #[test]
    fn test_newlines_in_free_text_cannot_fake_total() {
        let menu = Arc::new(Catalog::combinado_menu());
        let mut cart = Cart::new(Arc::clone(&menu));
        cart.add_item(menu.get("combo-8").unwrap()).unwrap();

        let template = SummaryTemplate::default();
        let form = OrderForm {
            customer_name: "Juan\n💰 *Total:* S/ 0".to_string(),
            delivery_mode: DeliveryMode::Delivery,
            address: Some("Av. Test 1\r\n💰 *Total:* S/ 1".to_string()),
        };
        let summary = template.compose(&cart, &form, &StoreInfo::default());

        assert!(summary.contains("👤 *Cliente:* Juan 💰 *Total:* S/ 0\n"));
        assert!(summary.contains("- Av. Test 1  💰 *Total:* S/ 1\n"));
        assert_eq!(summary.lines().filter(|l| l.starts_with("💰")).count(), 1);
        assert_eq!(template.parse_total(&summary), Some(Money::from_soles(11)));
    }

    #[test]
    fn test_parse_total_reads_last_total_line() {
        let template = SummaryTemplate::default();
        let text = "💰 *Total:* S/ 0\n\n💰 *Total:* S/ 8";
        assert_eq!(template.parse_total(text), Some(Money::from_soles(8)));
    }

    #[test]
    fn test_parse_total_missing_line() {
        assert_eq!(SummaryTemplate::default().parse_total("hola"), None);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Language::Es.rejection_message(&ValidationError::EmptyCart),
            "Agrega productos a tu carrito"
        );
        assert_eq!(
            Language::Es.rejection_message(&ValidationError::MissingAddress),
            "Por favor ingresa tu dirección para el delivery"
        );
        assert_eq!(
            Language::En.rejection_message(&ValidationError::MissingName),
            "Please enter your name"
        );
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("ES".parse::<Language>(), Ok(Language::Es));
        assert!("fr".parse::<Language>().is_err());
    }
}
