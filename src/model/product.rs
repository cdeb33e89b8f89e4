use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Physical size of a product, in centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self { length, width, height }
    }
}

/// One inventory item.
///
/// The on-storage shape uses camelCase keys and RFC 3339 timestamps, so a
/// collection written by one process reads back unchanged in another.
/// Only the identity, price, stock and timestamps are required when reading;
/// descriptive fields missing from older records take the same values
/// [`Product::new`] gives them.
///
/// `price`, `cost_price`, `weight` and the dimensions are expected to be
/// non-negative. The store does not check this; [`ProductForm`](crate::views::ProductForm)
/// does on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    /// Sales channel identifier, e.g. `"amazon"`.
    pub marketplace: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub cost_price: f64,
    pub stock: u32,
    #[serde(default)]
    pub min_stock: u32,
    /// Advisory only. Nothing enforces it.
    #[serde(default = "default_max_stock")]
    pub max_stock: u32,
    #[serde(default)]
    pub description: String,
    /// Opaque image references (usually data URIs), in display order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub supplier: String,
    /// Grams.
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const DEFAULT_MAX_STOCK: u32 = 100;

fn default_max_stock() -> u32 {
    DEFAULT_MAX_STOCK
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Creates an active product with the given identity, stocking figures
    /// and empty descriptive fields. Both timestamps are set to `now`.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, assigned by the caller
    /// * `name` - Display name
    /// * `marketplace` - Sales channel identifier
    /// * `price` - Selling price
    /// * `stock` - Quantity on hand
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        marketplace: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            sku: String::new(),
            marketplace: marketplace.into(),
            category: String::new(),
            price,
            cost_price: 0.0,
            stock,
            min_stock: 0,
            max_stock: DEFAULT_MAX_STOCK,
            description: String::new(),
            images: Vec::new(),
            supplier: String::new(),
            weight: 0.0,
            dimensions: Dimensions::default(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_min_stock(mut self, min_stock: u32) -> Self {
        self.min_stock = min_stock;
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Selling value of the stock on hand.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }

    /// Shallow-merges `patch` onto this record and stamps `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the wall clock
    /// has gone backwards since creation.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        let ProductPatch {
            name,
            sku,
            marketplace,
            category,
            price,
            cost_price,
            stock,
            min_stock,
            max_stock,
            description,
            images,
            supplier,
            weight,
            dimensions,
            is_active,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(sku) = sku {
            self.sku = sku;
        }
        if let Some(marketplace) = marketplace {
            self.marketplace = marketplace;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(cost_price) = cost_price {
            self.cost_price = cost_price;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        if let Some(min_stock) = min_stock {
            self.min_stock = min_stock;
        }
        if let Some(max_stock) = max_stock {
            self.max_stock = max_stock;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(images) = images {
            self.images = images;
        }
        if let Some(supplier) = supplier {
            self.supplier = supplier;
        }
        if let Some(weight) = weight {
            self.weight = weight;
        }
        if let Some(dimensions) = dimensions {
            self.dimensions = dimensions;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.updated_at = now.max(self.created_at);
    }
}

/// Partial update for a [`Product`]. `None` leaves the field untouched.
///
/// `id` and `created_at` are immutable and have no patch field;
/// `updated_at` is always stamped by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub marketplace: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub cost_price: Option<f64>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub max_stock: Option<u32>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub supplier: Option<String>,
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    pub fn stock(stock: u32) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }
}

impl From<Product> for ProductPatch {
    /// A patch that overwrites every mutable field with `product`'s values.
    fn from(product: Product) -> Self {
        Self {
            name: Some(product.name),
            sku: Some(product.sku),
            marketplace: Some(product.marketplace),
            category: Some(product.category),
            price: Some(product.price),
            cost_price: Some(product.cost_price),
            stock: Some(product.stock),
            min_stock: Some(product.min_stock),
            max_stock: Some(product.max_stock),
            description: Some(product.description),
            images: Some(product.images),
            supplier: Some(product.supplier),
            weight: Some(product.weight),
            dimensions: Some(product.dimensions),
            is_active: Some(product.is_active),
        }
    }
}
