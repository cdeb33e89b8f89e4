use chrono::Utc;
use tracing::debug;

use super::{FormError, TimestampIds};
use crate::clients::DashboardClient;
use crate::dashboard::{SaveMode, SaveOutcome};
use crate::model::{Dimensions, Product};

/// In-progress values of the product form.
///
/// Create mode starts from [`ProductForm::new`]; edit mode from
/// [`ProductForm::edit`]. `marketplace` is free text, typically picked from
/// [`DashboardClient::marketplaces`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub marketplace: String,
    pub category: String,
    pub price: f64,
    pub cost_price: f64,
    pub stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub description: String,
    pub supplier: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub images: Vec<String>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            marketplace: String::new(),
            category: String::new(),
            price: 0.0,
            cost_price: 0.0,
            stock: 0,
            min_stock: 0,
            max_stock: 100,
            description: String::new(),
            supplier: String::new(),
            weight: 0.0,
            dimensions: Dimensions::default(),
            images: Vec::new(),
        }
    }
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            marketplace: product.marketplace.clone(),
            category: product.category.clone(),
            price: product.price,
            cost_price: product.cost_price,
            stock: product.stock,
            min_stock: product.min_stock,
            max_stock: product.max_stock,
            description: product.description.clone(),
            supplier: product.supplier.clone(),
            weight: product.weight,
            dimensions: product.dimensions,
            images: product.images.clone(),
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.marketplace.trim().is_empty() {
            return Err(FormError::MissingField("marketplace"));
        }

        let amounts = [
            ("price", self.price),
            ("cost price", self.cost_price),
            ("weight", self.weight),
            ("length", self.dimensions.length),
            ("width", self.dimensions.width),
            ("height", self.dimensions.height),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(FormError::InvalidAmount { field, value });
            }
        }
        Ok(())
    }

    /// Builds the complete record for this form.
    ///
    /// With `existing`, the record keeps its id and creation time. Without,
    /// it gets a fresh id from `ids` and is created now.
    pub fn submit(&self, existing: Option<&Product>, ids: &TimestampIds) -> Result<Product, FormError> {
        self.validate()?;

        let now = Utc::now();
        let (id, created_at) = match existing {
            Some(product) => (product.id.clone(), product.created_at),
            None => (ids.next_id(), now),
        };

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            marketplace: self.marketplace.trim().to_string(),
            category: self.category.trim().to_string(),
            price: self.price,
            cost_price: self.cost_price,
            stock: self.stock,
            min_stock: self.min_stock,
            max_stock: self.max_stock,
            description: self.description.clone(),
            images: self.images.clone(),
            supplier: self.supplier.trim().to_string(),
            weight: self.weight,
            dimensions: self.dimensions,
            is_active: true,
            created_at,
            updated_at: now.max(created_at),
        })
    }

    /// Submits the form and hands the record to the dashboard.
    ///
    /// Editing an existing product in [`SaveMode::Upsert`] goes through the
    /// edit intent; everything else is a save in `mode`.
    pub async fn submit_to(
        &self,
        client: &DashboardClient,
        existing: Option<&Product>,
        ids: &TimestampIds,
        mode: SaveMode,
    ) -> Result<SaveOutcome, FormError> {
        let product = self.submit(existing, ids)?;
        debug!(id = %product.id, ?mode, editing = existing.is_some(), "Form submitted");

        let outcome = match (existing, mode) {
            (Some(_), SaveMode::Upsert) => client.request_edit(product).await?,
            _ => client.save(product, mode).await?,
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::mock::{create_mock_client, expect_edit, expect_save};

    fn filled() -> ProductForm {
        ProductForm {
            name: " Desk Lamp ".into(),
            marketplace: "etsy".into(),
            price: 12.0,
            stock: 4,
            ..ProductForm::new()
        }
    }

    #[test]
    fn create_mode_defaults() {
        let form = ProductForm::new();
        assert_eq!(form.max_stock, 100);
        assert_eq!(form.stock, 0);
        assert!(form.images.is_empty());
    }

    #[test]
    fn submit_in_create_mode_assigns_identity() {
        let ids = TimestampIds::new();
        let product = filled().submit(None, &ids).unwrap();

        assert!(!product.id.is_empty());
        assert_eq!(product.name, "Desk Lamp");
        assert!(product.is_active);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn submit_in_edit_mode_keeps_identity() {
        let ids = TimestampIds::new();
        let original = Product::new("42", "Lamp", "etsy", 10.0, 1);

        let mut form = ProductForm::edit(&original);
        form.stock = 9;
        let product = form.submit(Some(&original), &ids).unwrap();

        assert_eq!(product.id, "42");
        assert_eq!(product.created_at, original.created_at);
        assert!(product.updated_at >= original.created_at);
        assert_eq!(product.stock, 9);
    }

    #[test]
    fn submit_rejects_blank_name_and_negative_amounts() {
        let ids = TimestampIds::new();

        let blank = ProductForm {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(blank.submit(None, &ids), Err(FormError::MissingField("name")));

        let negative = ProductForm {
            cost_price: -1.0,
            ..filled()
        };
        assert_eq!(
            negative.submit(None, &ids),
            Err(FormError::InvalidAmount {
                field: "cost price",
                value: -1.0
            })
        );
    }

    #[tokio::test]
    async fn submit_to_routes_edits_and_purchases() {
        let (client, mut receiver) = create_mock_client(4);
        let original = Product::new("42", "Lamp", "etsy", 10.0, 1);

        let edit_client = client.clone();
        let edit_original = original.clone();
        let edit = tokio::spawn(async move {
            ProductForm::edit(&edit_original)
                .submit_to(&edit_client, Some(&edit_original), &TimestampIds::new(), SaveMode::Upsert)
                .await
        });
        let (id, patch, responder) = expect_edit(&mut receiver).await.expect("Expected Edit request");
        assert_eq!(id, "42");
        assert_eq!(patch.name.as_deref(), Some("Lamp"));
        responder.send(Ok(SaveOutcome::Updated(original.clone()))).unwrap();
        assert!(matches!(edit.await.unwrap(), Ok(SaveOutcome::Updated(_))));

        let purchase = tokio::spawn(async move {
            filled()
                .submit_to(&client, None, &TimestampIds::new(), SaveMode::NewPurchase)
                .await
        });
        let (product, mode, responder) = expect_save(&mut receiver).await.expect("Expected Save request");
        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(mode, SaveMode::NewPurchase);
        responder.send(Ok(SaveOutcome::Added)).unwrap();
        assert_eq!(purchase.await.unwrap(), Ok(SaveOutcome::Added));
    }
}
