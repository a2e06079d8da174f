//! # Menu Loading
//!
//! Builds the catalog the session sells from.
//!
//! Without a `menuPath` the built-in Combinado menu is used. A menu file
//! lists items in display order:
//!
//! ```toml
//! [[items]]
//! id = "combo-8"
//! name = "Combo Clásico"
//! description = "Ceviche fresco + Papa a la Huancaína + Chanfainita"
//! priceCents = 800
//! category = "combo"
//! ```

use std::path::Path;
use std::sync::Arc;

use combinado_core::{Catalog, CatalogItem};
use serde::Deserialize;
use tracing::info;

use super::config::{ConfigError, ConfigResult, ConfigState};

#[derive(Debug, Deserialize)]
struct MenuFile {
    items: Vec<CatalogItem>,
}

/// Loads the configured menu, or the built-in one.
pub fn load_catalog(config: &ConfigState) -> ConfigResult<Arc<Catalog>> {
    let catalog = match &config.menu_path {
        Some(path) => read_menu(path)?,
        None => Catalog::combinado_menu(),
    };

    info!(items = catalog.len(), "Menu loaded");
    Ok(Arc::new(catalog))
}

fn read_menu(path: &Path) -> ConfigResult<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_menu(&text).map_err(|err| match err {
        MenuError::Parse(source) => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        MenuError::Invalid(e) => ConfigError::Invalid(e),
    })
}

enum MenuError {
    Parse(toml::de::Error),
    Invalid(combinado_core::ValidationError),
}

fn parse_menu(text: &str) -> Result<Catalog, MenuError> {
    let file: MenuFile = toml::from_str(text).map_err(MenuError::Parse)?;
    Catalog::new(file.items).map_err(MenuError::Invalid)
}
