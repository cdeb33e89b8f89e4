//! Summary metrics and stock classification derived from a product snapshot.
//!
//! Everything here is a pure function of its inputs. Stats are recomputed on
//! demand and never persisted.
//!
//! Note that a product with `stock == 0` also satisfies `stock <= min_stock`,
//! so it is counted in both [`InventoryStats::low_stock_items`] and
//! [`InventoryStats::out_of_stock_items`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{MarketplacePolicy, Product};

/// Stock level of a single product relative to its reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn is_out_of_stock(stock: u32) -> bool {
    stock == 0
}

pub fn is_low_stock(stock: u32, min_stock: u32) -> bool {
    stock <= min_stock
}

/// Out of stock wins over low stock; anything above `min_stock` is in stock.
pub fn classify_stock(stock: u32, min_stock: u32) -> StockStatus {
    if is_out_of_stock(stock) {
        StockStatus::OutOfStock
    } else if is_low_stock(stock, min_stock) {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Dashboard summary of a product collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    /// Sum of `price * stock`.
    pub total_value: f64,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    /// Units on hand across all products with positive stock.
    pub total_purchased: u64,
    pub marketplace_distribution: IndexMap<String, usize>,
}

pub fn total_value(products: &[Product]) -> f64 {
    products.iter().map(Product::stock_value).sum()
}

pub fn total_purchased(products: &[Product]) -> u64 {
    products
        .iter()
        .filter(|p| p.stock > 0)
        .map(|p| u64::from(p.stock))
        .sum()
}

/// Counts products per marketplace under `policy`.
pub fn marketplace_distribution(
    products: &[Product],
    policy: &MarketplacePolicy,
) -> IndexMap<String, usize> {
    match policy {
        MarketplacePolicy::Fixed(known) => {
            let mut counts: IndexMap<String, usize> =
                known.iter().map(|m| (m.clone(), 0)).collect();
            for product in products {
                if let Some(count) = counts.get_mut(&product.marketplace) {
                    *count += 1;
                }
            }
            counts
        }
        MarketplacePolicy::Dynamic => {
            let mut counts = IndexMap::new();
            for product in products {
                *counts.entry(product.marketplace.clone()).or_insert(0) += 1;
            }
            counts
        }
    }
}

pub fn calculate_stats(products: &[Product], policy: &MarketplacePolicy) -> InventoryStats {
    InventoryStats {
        total_products: products.len(),
        total_value: total_value(products),
        low_stock_items: products
            .iter()
            .filter(|p| is_low_stock(p.stock, p.min_stock))
            .count(),
        out_of_stock_items: products.iter().filter(|p| is_out_of_stock(p.stock)).count(),
        total_purchased: total_purchased(products),
        marketplace_distribution: marketplace_distribution(products, policy),
    }
}
