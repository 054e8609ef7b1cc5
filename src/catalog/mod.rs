//! Catalog Domain Module
//!
//! This module contains the product assortment and everything derived from it:
//! - Domain models (Product, Catalog)
//! - The built-in demo assortment
//! - The filter engine (brand/category/stock)
//! - The JSON catalog endpoint

pub mod data;
pub mod filter;
pub mod handlers;
pub mod models;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use filter::{apply_filters, Facet, FilterSelection};
pub use handlers::routes;
pub use models::{Catalog, CatalogFile, Product};

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate product id: {0}")]
    DuplicateId(String),
    #[error("product {id} has discount {pct}% (must be 0..=100)")]
    InvalidDiscount { id: String, pct: u8 },
}

impl Catalog {
    /// The built-in demo assortment.
    pub fn demo() -> Self {
        // Static data with unique ids and valid discounts.
        match Self::new(data::demo_catalog(), data::demo_hot()) {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("demo catalog is invalid: {e}"),
        }
    }

    /// Loads a `{"catalog": [...], "hot": [...]}` JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::new(file.catalog, file.hot)?;
        tracing::info!(
            path = %path.display(),
            items = catalog.items().len(),
            hot = catalog.hot().len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.items().len(), 4);
        assert_eq!(catalog.hot().len(), 2);
        assert_eq!(catalog.brands(), ["Cartier", "Chanel", "Fendi", "Gucci", "Hermès"]);
        assert_eq!(catalog.categories(), ["bags", "jewelry"]);
        assert!(catalog.hot().iter().all(|p| p.discount_pct.is_some()));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"catalog":[{"id":"x1","brand":"Dior","title":"Saddle","priceRUB":350000,"img":"","category":"bags"}]}"#,
        )
        .unwrap();

        let catalog = Catalog::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.items().len(), 1);
        assert!(catalog.hot().is_empty());
        assert_eq!(catalog.brands(), ["Dior"]);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = Path::new("/definitely/not/here.json");
        assert!(matches!(
            Catalog::from_file(missing),
            Err(CatalogError::Io { .. })
        ));

        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "not json").unwrap();
        let result = Catalog::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }
}
