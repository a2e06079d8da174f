//! # Catalog
//!
//! The fixed menu the customer picks from.
//!
//! Items are validated once, when the catalog is built. After that every
//! `CatalogItem` handed out by a `Catalog` is known to be well formed, so
//! cart operations never re-check them.
//!
//! ```text
//! menu fixtures / menu file
//!          │
//!          ▼
//!   Catalog::new(items) ──► validate ids, names, prices
//!          │
//!          ▼
//!   Arc<Catalog> shared by the Cart (read-only)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Category;
use crate::validation::{validate_item_id, validate_item_name, validate_price_cents};

// =============================================================================
// Catalog Item
// =============================================================================

/// A menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique key across the whole menu.
    pub id: String,

    /// Display name, also printed in the order summary.
    pub name: String,

    /// What comes in the combo / drink.
    #[serde(default)]
    pub description: String,

    /// Price in céntimos.
    pub price_cents: i64,

    pub category: Category,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price_cents: price.cents(),
            category,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated, immutable menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed or duplicate items.
    ///
    /// ## Rules
    /// - every id is non-empty and unique across all categories
    /// - every name is non-empty
    /// - every price is zero or more
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            validate_item_id(&item.id)?;
            validate_item_name(&item.name)?;
            validate_price_cents(item.price_cents)?;

            if !seen.insert(item.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.clone(),
                });
            }
        }

        Ok(Catalog { items })
    }

    /// The Combinado menu: three combos and two sizes of chicha morada.
    pub fn combinado_menu() -> Self {
        Catalog {
            items: vec![
                CatalogItem::new(
                    "combo-8",
                    "Combo Clásico",
                    "Ceviche fresco + Papa a la Huancaína + Chanfainita",
                    Money::from_soles(8),
                    Category::Combo,
                ),
                CatalogItem::new(
                    "combo-10",
                    "Combo Tradicional",
                    "Tallarines Rojos + Papa a la Huancaína + Chanfainita",
                    Money::from_soles(10),
                    Category::Combo,
                ),
                CatalogItem::new(
                    "combo-12",
                    "Combo Completo",
                    "Ceviche + Tallarines Rojos + Papa a la Huancaína + Chanfainita",
                    Money::from_soles(12),
                    Category::Combo,
                ),
                CatalogItem::new(
                    "chicha-1l",
                    "Chicha Morada 1L",
                    "Chicha morada tradicional",
                    Money::from_soles(5),
                    Category::Drink,
                ),
                CatalogItem::new(
                    "chicha-500ml",
                    "Chicha Morada 500ml",
                    "Chicha morada tradicional",
                    Money::from_soles(2),
                    Category::Drink,
                ),
            ],
        }
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All items in menu order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Items of one category, in menu order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::combinado_menu()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
