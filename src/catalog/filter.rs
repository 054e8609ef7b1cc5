//! Brand/category/stock filtering over product lists.

use serde::{Deserialize, Serialize};

use super::models::Product;

/// Sentinel value meaning "no restriction" on a facet.
pub const ALL: &str = "all";

/// One filter dimension: either unrestricted or pinned to a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(value) => value,
        }
    }
}

impl From<String> for Facet {
    fn from(value: String) -> Self {
        if value == ALL || value.is_empty() {
            Facet::All
        } else {
            Facet::Only(value)
        }
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        Facet::from(value.to_string())
    }
}

impl From<Facet> for String {
    fn from(facet: Facet) -> Self {
        facet.as_str().to_string()
    }
}

/// Current brand and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub brand: Facet,
    #[serde(default)]
    pub category: Facet,
}

impl FilterSelection {
    pub fn new(brand: impl Into<Facet>, category: impl Into<Facet>) -> Self {
        Self {
            brand: brand.into(),
            category: category.into(),
        }
    }

    pub fn accepts(&self, product: &Product) -> bool {
        self.brand.matches(&product.brand)
            && self.category.matches(&product.category)
            && product.is_available()
    }
}

/// Returns the visible subsequence of `products`, preserving source order.
pub fn apply_filters<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    products.iter().filter(|p| selection.accepts(p)).collect()
}

/// Prepends the `all` sentinel to a list of facet values.
pub fn with_all(values: &[String]) -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(values.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, brand: &str, category: &str, in_stock: Option<bool>) -> Product {
        Product {
            id: id.into(),
            brand: brand.into(),
            title: id.into(),
            price_rub: 1,
            img: String::new(),
            category: category.into(),
            tags: Vec::new(),
            in_stock,
            discount_pct: None,
        }
    }

    fn ids(list: &[&Product]) -> Vec<String> {
        list.iter().map(|p| p.id.clone()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("a", "Gucci", "bags", Some(true)),
            product("b", "Cartier", "jewelry", None),
            product("c", "Gucci", "bags", Some(false)),
            product("d", "Gucci", "shoes", Some(true)),
            product("e", "Fendi", "bags", None),
        ]
    }

    #[test]
    fn test_all_all_returns_in_stock_subset_in_order() {
        let items = sample();
        let visible = apply_filters(&items, &FilterSelection::default());
        assert_eq!(ids(&visible), ["a", "b", "d", "e"]);
    }

    #[test]
    fn test_specific_brand_and_category() {
        let items = sample();
        let visible = apply_filters(&items, &FilterSelection::new("Gucci", "bags"));
        // "c" matches both facets but is explicitly out of stock
        assert_eq!(ids(&visible), ["a"]);
    }

    #[test]
    fn test_single_facet() {
        let items = sample();
        let by_category = apply_filters(&items, &FilterSelection::new(ALL, "bags"));
        assert_eq!(ids(&by_category), ["a", "e"]);

        let by_brand = apply_filters(&items, &FilterSelection::new("Gucci", ALL));
        assert_eq!(ids(&by_brand), ["a", "d"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let items = sample();
        let visible = apply_filters(&items, &FilterSelection::new("Chanel", "jewelry"));
        assert!(visible.is_empty());
        assert!(apply_filters(&[], &FilterSelection::default()).is_empty());
    }

    #[test]
    fn test_facet_sentinel_round_trip() {
        assert_eq!(Facet::from("all"), Facet::All);
        assert_eq!(Facet::from(""), Facet::All);
        assert_eq!(Facet::from("Fendi"), Facet::Only("Fendi".into()));

        let selection: FilterSelection =
            serde_json::from_str(r#"{"brand":"all","category":"bags"}"#).unwrap();
        assert_eq!(selection, FilterSelection::new(ALL, "bags"));
        assert_eq!(
            serde_json::to_string(&selection).unwrap(),
            r#"{"brand":"all","category":"bags"}"#
        );
    }

    #[test]
    fn test_with_all_prefix() {
        let values = vec!["bags".to_string(), "jewelry".to_string()];
        assert_eq!(with_all(&values), ["all", "bags", "jewelry"]);
    }
}
