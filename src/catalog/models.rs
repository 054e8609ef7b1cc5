//! Catalog Domain Models
//!
//! Products are immutable once loaded. The JSON field names are part of the
//! operator-side contract (they travel inside order payloads) and must not be
//! renamed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::CatalogError;

// =============================================================================
// Product
// =============================================================================

/// A sellable item, either from the regular catalog or the hot deals list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier across catalog and hot deals
    pub id: String,

    pub brand: String,

    pub title: String,

    /// Price in whole rubles
    #[serde(rename = "priceRUB")]
    pub price_rub: u64,

    /// Image URI
    pub img: String,

    /// Open set: bags, jewelry, shoes, accessories...
    pub category: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Absent means in stock
    #[serde(rename = "inStock", default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,

    /// Only meaningful for hot deals (0..=100)
    #[serde(
        rename = "discountPct",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_pct: Option<u8>,
}

impl Product {
    /// An item is only hidden when it is explicitly marked out of stock.
    pub fn is_available(&self) -> bool {
        self.in_stock != Some(false)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The two static product lists plus the filter option lists derived from
/// them once at load time.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Product>,
    hot: Vec<Product>,
    brands: Vec<String>,
    categories: Vec<String>,
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub catalog: Vec<Product>,
    #[serde(default)]
    pub hot: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range discounts.
    pub fn new(items: Vec<Product>, hot: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in items.iter().chain(hot.iter()) {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if let Some(pct) = product.discount_pct {
                if pct > 100 {
                    return Err(CatalogError::InvalidDiscount {
                        id: product.id.clone(),
                        pct,
                    });
                }
            }
        }

        let brands = distinct_sorted(items.iter().chain(hot.iter()).map(|p| &p.brand));
        let categories = distinct_sorted(items.iter().chain(hot.iter()).map(|p| &p.category));

        Ok(Self {
            items,
            hot,
            brands,
            categories,
        })
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn hot(&self) -> &[Product] {
        &self.hot
    }

    /// Sorted distinct brands over both lists (without the `all` sentinel).
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Sorted distinct categories over both lists (without the `all` sentinel).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Looks a product up in either list.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.items
            .iter()
            .chain(self.hot.iter())
            .find(|p| p.id == id)
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = values.cloned().collect();
    out.sort();
    out.dedup();
    out
}
