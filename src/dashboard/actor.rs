use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::seed::sample_products;
use super::{ConfirmPrompt, DashboardError};
use crate::clients::DashboardClient;
use crate::model::{MarketplacePolicy, MarketplaceRegistry, Product, ProductPatch};
use crate::stats::{calculate_stats, InventoryStats};
use crate::storage::{ProductStore, StorageBackend};

// =============================================================================
// 1. MESSAGES
// =============================================================================

/// One-shot reply channel used by every request.
pub type Response<T> = oneshot::Sender<Result<T, DashboardError>>;

/// How a submitted product is folded into the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveMode {
    /// Update the record with the same id, or add it if there is none.
    #[default]
    Upsert,
    /// Stock arriving: add the product, or add its stock to the existing record.
    NewPurchase,
    /// Stock coming back out: subtract the submitted stock from the existing
    /// record, never going below zero. Unknown ids are ignored.
    Return,
}

/// What a save or edit did to the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Added,
    Updated(Product),
    /// No record matched and the mode does not add one.
    NotFound,
}

/// What a delete request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The confirmation prompt said no; the store was not touched.
    Declined,
}

/// Requests understood by the [`DashboardActor`].
#[derive(Debug)]
pub enum DashboardRequest {
    Snapshot {
        respond_to: Response<Vec<Product>>,
    },
    Stats {
        respond_to: Response<InventoryStats>,
    },
    Marketplaces {
        respond_to: Response<MarketplaceRegistry>,
    },
    Get {
        id: String,
        respond_to: Response<Option<Product>>,
    },
    Save {
        product: Product,
        mode: SaveMode,
        respond_to: Response<SaveOutcome>,
    },
    Edit {
        id: String,
        patch: ProductPatch,
        respond_to: Response<SaveOutcome>,
    },
    Delete {
        id: String,
        respond_to: Response<DeleteOutcome>,
    },
}

/// Collaborators injected when the controller starts running.
#[derive(Clone)]
pub struct DashboardContext {
    pub confirm: Arc<dyn ConfirmPrompt>,
}

impl DashboardContext {
    pub fn new(confirm: impl ConfirmPrompt + 'static) -> Self {
        Self {
            confirm: Arc::new(confirm),
        }
    }
}

// =============================================================================
// 2. THE CONTROLLER
// =============================================================================

/// Owns the product store and the snapshot views render from.
pub struct DashboardActor<B: StorageBackend> {
    receiver: mpsc::Receiver<DashboardRequest>,
    store: ProductStore<B>,
    policy: MarketplacePolicy,
    seed_samples: bool,
    snapshot: Vec<Product>,
}

impl<B: StorageBackend> DashboardActor<B> {
    /// Creates the controller and its client. A `buffer_size` of zero is
    /// raised to one.
    pub fn new(
        buffer_size: usize,
        store: ProductStore<B>,
        policy: MarketplacePolicy,
    ) -> (Self, DashboardClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store,
            policy,
            seed_samples: true,
            snapshot: Vec::new(),
        };
        (actor, DashboardClient::new(sender))
    }

    /// Whether an empty store gets the sample catalog on start. Defaults to `true`.
    pub fn with_seed_samples(mut self, seed_samples: bool) -> Self {
        self.seed_samples = seed_samples;
        self
    }

    /// Loads the collection, then serves requests until every client is dropped.
    pub async fn run(mut self, context: DashboardContext) {
        self.initialize();
        info!(size = self.snapshot.len(), key = %self.store.key(), "Dashboard started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DashboardRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot.clone()));
                }
                DashboardRequest::Stats { respond_to } => {
                    let stats = calculate_stats(&self.snapshot, &self.policy);
                    debug!(?stats, "Stats");
                    let _ = respond_to.send(Ok(stats));
                }
                DashboardRequest::Marketplaces { respond_to } => {
                    let _ = respond_to.send(Ok(MarketplaceRegistry::observed(&self.snapshot)));
                }
                DashboardRequest::Get { id, respond_to } => {
                    let item = self.snapshot.iter().find(|p| p.id == id).cloned();
                    debug!(%id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                DashboardRequest::Save {
                    product,
                    mode,
                    respond_to,
                } => {
                    debug!(id = %product.id, ?mode, "Save");
                    let result = self.save(product, mode);
                    self.refresh();
                    let _ = respond_to.send(result);
                }
                DashboardRequest::Edit {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(%id, ?patch, "Edit");
                    let result = self
                        .store
                        .update(&id, patch)
                        .map(|updated| updated.map_or(SaveOutcome::NotFound, SaveOutcome::Updated))
                        .map_err(DashboardError::from);
                    self.refresh();
                    let _ = respond_to.send(result);
                }
                DashboardRequest::Delete { id, respond_to } => {
                    let product = self.snapshot.iter().find(|p| p.id == id);
                    if !context.confirm.confirm_delete(&id, product).await {
                        info!(%id, "Delete declined");
                        let _ = respond_to.send(Ok(DeleteOutcome::Declined));
                        continue;
                    }
                    let result = match self.store.remove(&id) {
                        Ok(true) => Ok(DeleteOutcome::Deleted),
                        Ok(false) => Ok(DeleteOutcome::NotFound),
                        Err(e) => Err(DashboardError::from(e)),
                    };
                    self.refresh();
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.snapshot.len(), "Dashboard shutdown");
    }

    fn initialize(&mut self) {
        self.snapshot = match self.store.load() {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Could not read stored products, not seeding");
                return;
            }
        };
        if !self.snapshot.is_empty() || !self.seed_samples {
            return;
        }

        let samples = sample_products(Utc::now());
        match self.store.save_all(&samples) {
            Ok(()) => {
                info!(size = samples.len(), "Seeded sample products");
                self.snapshot = samples;
            }
            Err(e) => {
                warn!(error = %e, "Could not persist sample products");
                self.snapshot = self.store.get_all();
            }
        }
    }

    fn refresh(&mut self) {
        self.snapshot = self.store.get_all();
    }

    fn save(&self, product: Product, mode: SaveMode) -> Result<SaveOutcome, DashboardError> {
        let existing = self.store.get_by_id(&product.id);

        let outcome = match (mode, existing) {
            (SaveMode::Upsert, Some(_)) => {
                let id = product.id.clone();
                self.store.update(&id, ProductPatch::from(product))?
            }
            (SaveMode::NewPurchase, Some(current)) => {
                let stock = current.stock.saturating_add(product.stock);
                self.store.update(&current.id, ProductPatch::stock(stock))?
            }
            (SaveMode::Return, Some(current)) => {
                let stock = current.stock.saturating_sub(product.stock);
                self.store.update(&current.id, ProductPatch::stock(stock))?
            }
            (SaveMode::Upsert | SaveMode::NewPurchase, None) => {
                self.store.add(product)?;
                return Ok(SaveOutcome::Added);
            }
            (SaveMode::Return, None) => {
                warn!(id = %product.id, "Return for unknown product ignored");
                None
            }
        };

        Ok(outcome.map_or(SaveOutcome::NotFound, SaveOutcome::Updated))
    }
}
