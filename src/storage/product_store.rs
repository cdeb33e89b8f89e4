use chrono::Utc;
use tracing::{debug, info, warn};

use super::{StorageBackend, StorageError};
use crate::model::{Product, ProductPatch};

/// Slot the product collection lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "inventory-products";

/// The product collection, serialized as one JSON array under one key.
///
/// Every mutation is a full read-modify-write of the collection. Two stores
/// pointed at the same backend and key do not coordinate: whichever writes
/// last wins.
///
/// # Failure policy
/// - Reads never fail. A missing slot, an unreadable backend or malformed
///   content all read as an empty collection.
/// - Writes return [`StorageError`] when the backend rejects them.
/// - Updating or removing an unknown id is not an error; the result says
///   whether anything matched.
pub struct ProductStore<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> ProductStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the whole collection.
    ///
    /// Never fails: a missing, unreadable or malformed slot reads as empty.
    pub fn get_all(&self) -> Vec<Product> {
        self.load().unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "Unreadable product slot, treating as empty");
            Vec::new()
        })
    }

    /// Reads the collection for a caller that is about to rewrite it.
    ///
    /// Backend errors are returned so the stored value is never replaced on
    /// the strength of a failed read. A missing slot or malformed content
    /// still reads as empty.
    pub(crate) fn load(&self) -> Result<Vec<Product>, StorageError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => Ok(products),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Malformed product collection, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the stored collection with `products`.
    pub fn save_all(&self, products: &[Product]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(products)?;
        self.backend.set_item(&self.key, &raw)?;
        debug!(key = %self.key, size = products.len(), "Saved");
        Ok(())
    }

    /// Appends `product`. The caller guarantees its id is unique.
    pub fn add(&self, product: Product) -> Result<(), StorageError> {
        let mut products = self.load()?;
        let id = product.id.clone();
        products.push(product);
        self.save_all(&products)?;
        info!(%id, size = products.len(), "Added");
        Ok(())
    }

    /// Merges `patch` onto the product with `id` and stamps its `updated_at`.
    ///
    /// Returns the updated record, or `None` (and writes nothing) if no
    /// product has that id.
    pub fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>, StorageError> {
        let mut products = self.load()?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "Update skipped, not found");
            return Ok(None);
        };

        product.apply(patch, Utc::now());
        let updated = product.clone();
        self.save_all(&products)?;
        info!(%id, "Updated");
        Ok(Some(updated))
    }

    /// Removes the product with `id`. Returns whether it was present.
    pub fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut products = self.load()?;
        let before = products.len();
        products.retain(|p| p.id != id);
        let removed = products.len() != before;

        self.save_all(&products)?;
        if removed {
            info!(%id, size = products.len(), "Removed");
        } else {
            debug!(%id, "Remove matched nothing");
        }
        Ok(removed)
    }

    pub fn get_by_id(&self, id: &str) -> Option<Product> {
        self.get_all().into_iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::FaultyStorage;
    use crate::storage::MemoryStorage;

    fn store() -> ProductStore<MemoryStorage> {
        ProductStore::new(MemoryStorage::new())
    }

    #[test]
    fn missing_slot_reads_empty() {
        assert!(store().get_all().is_empty());
    }

    #[test]
    fn malformed_content_reads_empty() {
        let store = store();
        store.backend().set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        assert!(store.get_all().is_empty());

        store
            .backend()
            .set_item(DEFAULT_STORAGE_KEY, r#"[{"id":"1"}]"#)
            .unwrap();
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn records_missing_descriptive_fields_still_read() {
        let store = store();
        let raw = r#"[{
            "id": "1",
            "name": "Earbuds",
            "marketplace": "amazon",
            "price": 2999.0,
            "stock": 45,
            "minStock": 10,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }]"#;
        store.backend().set_item(DEFAULT_STORAGE_KEY, raw).unwrap();

        let products = store.get_all();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].supplier, "");
        assert!(products[0].is_active);

        store.add(Product::new("2", "Watch", "flipkart", 15999.0, 12)).unwrap();
        assert_eq!(store.get_all().len(), 2);
    }

    #[test]
    fn failed_read_aborts_writes_instead_of_clobbering() {
        let backend = FaultyStorage::new(MemoryStorage::new());
        let store = ProductStore::new(backend.clone());
        let existing: Vec<Product> = (1..=5)
            .map(|i| Product::new(i.to_string(), "item", "amazon", 1.0, 1))
            .collect();
        store.save_all(&existing).unwrap();

        backend.fail_reads(1);
        assert!(store.add(Product::new("6", "new", "amazon", 1.0, 1)).is_err());
        assert_eq!(store.get_all(), existing);

        backend.fail_reads(1);
        assert!(store.update("1", ProductPatch::stock(0)).is_err());
        backend.fail_reads(1);
        assert!(store.remove("1").is_err());
        assert_eq!(store.get_all(), existing);

        store.add(Product::new("6", "new", "amazon", 1.0, 1)).unwrap();
        assert_eq!(store.get_all().len(), 6);
    }

    #[test]
    fn failed_read_is_empty_for_plain_reads() {
        let backend = FaultyStorage::new(MemoryStorage::new());
        let store = ProductStore::new(backend.clone());
        store.add(Product::new("1", "a", "amazon", 1.0, 1)).unwrap();

        backend.fail_reads(1);
        assert!(store.get_all().is_empty());
        assert_eq!(store.get_all().len(), 1);
    }

    #[test]
    fn save_then_read_reproduces_records() {
        let store = store();
        let products = vec![
            Product::new("1", "Earbuds", "amazon", 2999.0, 45),
            Product::new("2", "Watch", "flipkart", 15999.0, 12),
        ];

        store.save_all(&products).unwrap();
        let read = store.get_all();
        assert_eq!(read, products);

        store.save_all(&read).unwrap();
        assert_eq!(store.get_all(), products);
    }

    #[test]
    fn timestamps_are_stored_as_iso_strings() {
        let store = store();
        let product = Product::new("1", "Earbuds", "amazon", 1.0, 1);
        store.add(product.clone()).unwrap();

        let raw = store.backend().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let created_at = json[0]["createdAt"].as_str().expect("timestamp is a string");
        let parsed = chrono::DateTime::parse_from_rfc3339(created_at).unwrap();
        assert_eq!(parsed, product.created_at);
    }

    #[test]
    fn add_does_not_check_uniqueness() {
        let store = store();
        store.add(Product::new("1", "a", "amazon", 1.0, 1)).unwrap();
        store.add(Product::new("1", "b", "amazon", 1.0, 1)).unwrap();
        assert_eq!(store.get_all().len(), 2);
    }

    #[test]
    fn update_merges_and_stamps() {
        let store = store();
        let original = Product::new("1", "Earbuds", "amazon", 10.0, 5);
        store.add(original.clone()).unwrap();

        let updated = store
            .update("1", ProductPatch::stock(9))
            .unwrap()
            .expect("product exists");

        assert_eq!(updated.stock, 9);
        assert_eq!(updated.name, "Earbuds");
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(store.get_by_id("1"), Some(updated));
    }

    #[test]
    fn update_of_unknown_id_changes_nothing() {
        let store = store();
        store.add(Product::new("1", "Earbuds", "amazon", 10.0, 5)).unwrap();
        let before = store.get_all();

        assert_eq!(store.update("nope", ProductPatch::stock(1)).unwrap(), None);
        assert_eq!(store.get_all(), before);
    }

    #[test]
    fn remove_drops_exactly_one_when_present() {
        let store = store();
        store.add(Product::new("1", "a", "amazon", 1.0, 1)).unwrap();
        store.add(Product::new("2", "b", "amazon", 1.0, 1)).unwrap();

        assert!(store.remove("1").unwrap());
        assert_eq!(store.get_all().len(), 1);

        assert!(!store.remove("1").unwrap());
        assert_eq!(store.get_all().len(), 1);
        assert_eq!(store.get_by_id("2").map(|p| p.name), Some("b".to_string()));
    }

    #[test]
    fn stores_on_one_backend_clobber_each_other() {
        let backend = MemoryStorage::new();
        let tab_a = ProductStore::new(backend.clone());
        let tab_b = ProductStore::new(backend);

        let snapshot_b = tab_b.get_all();
        tab_a.add(Product::new("1", "a", "amazon", 1.0, 1)).unwrap();
        tab_b.save_all(&snapshot_b).unwrap();

        assert!(tab_a.get_all().is_empty());
    }

    #[test]
    fn custom_key_isolates_collections() {
        let backend = MemoryStorage::new();
        let main = ProductStore::new(backend.clone());
        let other = ProductStore::with_key(backend, "other");

        main.add(Product::new("1", "a", "amazon", 1.0, 1)).unwrap();
        assert!(other.get_all().is_empty());
    }
}
