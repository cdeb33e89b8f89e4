//! Marketplace identifiers and the policies for enumerating them.

use serde::{Deserialize, Serialize};

use super::Product;

/// The ten sales channels the dashboard has always known about.
pub const KNOWN_MARKETPLACES: [&str; 10] = [
    "amazon",
    "flipkart",
    "jiomart",
    "meesho",
    "nykaa",
    "myntra",
    "ajio",
    "snapdeal",
    "shopclues",
    "paytmmall",
];

/// How the stats aggregator decides which marketplaces to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "marketplaces")]
pub enum MarketplacePolicy {
    /// Report exactly these marketplaces, in this order, with zero counts
    /// for unused ones. Products on other marketplaces are not counted.
    Fixed(Vec<String>),
    /// Report whatever marketplaces appear in the collection, in first-seen order.
    #[default]
    Dynamic,
}

impl MarketplacePolicy {
    /// The fixed policy over [`KNOWN_MARKETPLACES`].
    pub fn known() -> Self {
        Self::Fixed(KNOWN_MARKETPLACES.iter().map(|m| m.to_string()).collect())
    }
}

/// Editable list of marketplaces offered to the form view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceRegistry {
    marketplaces: Vec<String>,
}

impl MarketplaceRegistry {
    pub fn new(marketplaces: Vec<String>) -> Self {
        let mut registry = Self {
            marketplaces: Vec::with_capacity(marketplaces.len()),
        };
        for marketplace in marketplaces {
            registry.add(&marketplace);
        }
        registry
    }

    /// Unique marketplace values present in `products`, in first-seen order.
    pub fn observed(products: &[Product]) -> Self {
        let mut marketplaces: Vec<String> = Vec::new();
        for product in products {
            if !marketplaces.contains(&product.marketplace) {
                marketplaces.push(product.marketplace.clone());
            }
        }
        Self { marketplaces }
    }

    /// Adds a marketplace after trimming and lowercasing it.
    ///
    /// Returns `false` if the name is blank or already registered.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() || self.marketplaces.contains(&name) {
            return false;
        }
        self.marketplaces.push(name);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.marketplaces.len();
        self.marketplaces.retain(|m| m != name);
        self.marketplaces.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.marketplaces.iter().any(|m| m == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.marketplaces
    }

    pub fn len(&self) -> usize {
        self.marketplaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marketplaces.is_empty()
    }
}

impl Default for MarketplaceRegistry {
    fn default() -> Self {
        Self {
            marketplaces: KNOWN_MARKETPLACES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl From<MarketplaceRegistry> for MarketplacePolicy {
    fn from(registry: MarketplaceRegistry) -> Self {
        MarketplacePolicy::Fixed(registry.marketplaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_normalizes_and_rejects_duplicates() {
        let mut registry = MarketplaceRegistry::default();
        assert_eq!(registry.len(), 10);

        assert!(registry.add("  Etsy "));
        assert!(registry.contains("etsy"));
        assert!(!registry.add("ETSY"));
        assert!(!registry.add("   "));
        assert!(!registry.add("Amazon"));
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut registry = MarketplaceRegistry::default();
        assert!(registry.remove("ajio"));
        assert!(!registry.remove("ajio"));
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn observed_keeps_first_seen_order() {
        let products = vec![
            Product::new("1", "a", "meesho", 1.0, 1),
            Product::new("2", "b", "amazon", 1.0, 1),
            Product::new("3", "c", "meesho", 1.0, 1),
        ];
        let registry = MarketplaceRegistry::observed(&products);
        assert_eq!(registry.as_slice(), ["meesho", "amazon"]);
    }

    #[test]
    fn registry_becomes_a_fixed_policy() {
        let registry = MarketplaceRegistry::new(vec!["Amazon".into(), "etsy".into(), "amazon".into()]);
        assert_eq!(registry.as_slice(), ["amazon", "etsy"]);

        let policy = MarketplacePolicy::from(registry);
        assert_eq!(policy, MarketplacePolicy::Fixed(vec!["amazon".into(), "etsy".into()]));
    }

    #[test]
    fn policy_round_trips_through_json() {
        let fixed: MarketplacePolicy =
            serde_json::from_str(r#"{"kind":"fixed","marketplaces":["amazon"]}"#).unwrap();
        assert_eq!(fixed, MarketplacePolicy::Fixed(vec!["amazon".into()]));

        let dynamic: MarketplacePolicy = serde_json::from_str(r#"{"kind":"dynamic"}"#).unwrap();
        assert_eq!(dynamic, MarketplacePolicy::Dynamic);
        assert_eq!(MarketplacePolicy::default(), MarketplacePolicy::Dynamic);
    }
}
