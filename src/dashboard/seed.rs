//! Sample catalog written to an empty store on first start.

use chrono::{DateTime, Utc};

use crate::model::{Dimensions, Product};

/// The two sample products, timestamped `now`.
pub fn sample_products(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Wireless Earbuds Pro".into(),
            sku: "WEP-001".into(),
            marketplace: "amazon".into(),
            category: "Electronics".into(),
            price: 2999.0,
            cost_price: 1800.0,
            stock: 45,
            min_stock: 10,
            max_stock: 100,
            description: "Premium wireless earbuds with noise cancellation".into(),
            images: Vec::new(),
            supplier: "TechSupplier Co.".into(),
            weight: 50.0,
            dimensions: Dimensions::new(5.0, 3.0, 2.0),
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            id: "2".into(),
            name: "Smart Watch Ultra".into(),
            sku: "SWU-002".into(),
            marketplace: "flipkart".into(),
            category: "Electronics".into(),
            price: 15999.0,
            cost_price: 12000.0,
            stock: 12,
            min_stock: 5,
            max_stock: 50,
            description: "Advanced smartwatch with health monitoring".into(),
            images: Vec::new(),
            supplier: "GadgetWorld".into(),
            weight: 80.0,
            dimensions: Dimensions::new(4.0, 4.0, 1.0),
            is_active: true,
            created_at: now,
            updated_at: now,
        },
    ]
}
