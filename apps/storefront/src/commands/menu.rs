//! # Menu Commands
//!
//! Lists what can be added to the cart, grouped the way the page shows it:
//! combos first, then drinks.

use combinado_core::{Catalog, CatalogItem, Category};
use serde::Serialize;
use tracing::debug;

/// Menu grouped by section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub combos: Vec<CatalogItem>,
    pub drinks: Vec<CatalogItem>,
}

impl From<&Catalog> for MenuResponse {
    fn from(catalog: &Catalog) -> Self {
        let section = |category: Category| -> Vec<CatalogItem> {
            catalog.by_category(category).cloned().collect()
        };
        MenuResponse {
            combos: section(Category::Combo),
            drinks: section(Category::Drink),
        }
    }
}

/// Gets the menu.
#[must_use]
pub fn get_menu(catalog: &Catalog) -> MenuResponse {
    debug!("get_menu command");
    MenuResponse::from(catalog)
}
