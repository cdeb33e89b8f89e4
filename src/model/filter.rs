use serde::{Deserialize, Serialize};

use super::Product;
use crate::stats::{is_low_stock, is_out_of_stock};

/// Criteria for narrowing the product list. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub marketplace: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring of name, SKU or category.
    pub search: Option<String>,
    #[serde(default)]
    pub low_stock: bool,
    #[serde(default)]
    pub out_of_stock: bool,
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(marketplace) = &self.marketplace {
            if &product.marketplace != marketplace {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            let hit = [&product.name, &product.sku, &product.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if self.low_stock && !is_low_stock(product.stock, product.min_stock) {
            return false;
        }
        if self.out_of_stock && !is_out_of_stock(product.stock) {
            return false;
        }
        true
    }

    /// The matching products, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "Wireless Earbuds", "amazon", 10.0, 0)
                .with_sku("WEP-001")
                .with_category("Electronics")
                .with_min_stock(5),
            Product::new("2", "Cotton Shirt", "myntra", 20.0, 3)
                .with_category("Apparel")
                .with_min_stock(5),
            Product::new("3", "Smart Watch", "amazon", 30.0, 50)
                .with_sku("SWU-002")
                .with_category("Electronics")
                .with_min_stock(5),
        ]
    }

    fn ids(products: Vec<&Product>) -> Vec<&str> {
        products.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let products = catalog();
        assert_eq!(ids(ProductFilters::default().apply(&products)), ["1", "2", "3"]);
    }

    #[test]
    fn criteria_are_combined() {
        let products = catalog();
        let filters = ProductFilters {
            marketplace: Some("amazon".into()),
            low_stock: true,
            ..ProductFilters::default()
        };
        assert_eq!(ids(filters.apply(&products)), ["1"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_sku_and_category() {
        let products = catalog();
        let by_sku = ProductFilters {
            search: Some("swu".into()),
            ..ProductFilters::default()
        };
        assert_eq!(ids(by_sku.apply(&products)), ["3"]);

        let by_category = ProductFilters {
            search: Some("APPAREL".into()),
            ..ProductFilters::default()
        };
        assert_eq!(ids(by_category.apply(&products)), ["2"]);
    }

    #[test]
    fn out_of_stock_filter() {
        let products = catalog();
        let filters = ProductFilters {
            out_of_stock: true,
            ..ProductFilters::default()
        };
        assert_eq!(ids(filters.apply(&products)), ["1"]);
    }
}
