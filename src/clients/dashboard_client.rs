use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::dashboard::{DashboardError, DashboardRequest, DeleteOutcome, Response, SaveMode, SaveOutcome};
use crate::model::{MarketplaceRegistry, Product, ProductPatch};
use crate::stats::InventoryStats;

/// Handle views use to read the snapshot and raise intents.
///
/// Cheap to clone. The controller shuts down once every clone is dropped.
#[derive(Clone)]
pub struct DashboardClient {
    sender: mpsc::Sender<DashboardRequest>,
}

impl DashboardClient {
    pub fn new(sender: mpsc::Sender<DashboardRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> DashboardRequest,
    ) -> Result<T, DashboardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DashboardError::ActorClosed)?;
        response.await.map_err(|_| DashboardError::ActorDropped)?
    }

    /// The current product list, as last re-read from the store.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Vec<Product>, DashboardError> {
        debug!("Sending request");
        self.request(|respond_to| DashboardRequest::Snapshot { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<InventoryStats, DashboardError> {
        debug!("Sending request");
        self.request(|respond_to| DashboardRequest::Stats { respond_to })
            .await
    }

    /// Marketplaces already used in the catalog, for form suggestions.
    #[instrument(skip(self))]
    pub async fn marketplaces(&self) -> Result<MarketplaceRegistry, DashboardError> {
        debug!("Sending request");
        self.request(|respond_to| DashboardRequest::Marketplaces { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: String) -> Result<Option<Product>, DashboardError> {
        debug!("Sending request");
        self.request(|respond_to| DashboardRequest::Get { id, respond_to })
            .await
    }

    /// Folds a submitted product into the collection according to `mode`.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn save(&self, product: Product, mode: SaveMode) -> Result<SaveOutcome, DashboardError> {
        debug!(?product, "save called");
        self.request(|respond_to| DashboardRequest::Save {
            product,
            mode,
            respond_to,
        })
        .await
    }

    /// Adds a product built by the form view in create mode.
    pub async fn request_add(&self, product: Product) -> Result<SaveOutcome, DashboardError> {
        self.save(product, SaveMode::Upsert).await
    }

    /// Writes back a product edited in the form view.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn request_edit(&self, product: Product) -> Result<SaveOutcome, DashboardError> {
        debug!("Sending request");
        let id = product.id.clone();
        self.request(|respond_to| DashboardRequest::Edit {
            id,
            patch: ProductPatch::from(product),
            respond_to,
        })
        .await
    }

    /// Applies a partial change to one product.
    #[instrument(skip(self))]
    pub async fn patch(&self, id: String, patch: ProductPatch) -> Result<SaveOutcome, DashboardError> {
        debug!("Sending request");
        self.request(|respond_to| DashboardRequest::Edit {
            id,
            patch,
            respond_to,
        })
        .await
    }

    /// Deletes a product once the confirmation prompt agrees.
    #[instrument(skip(self))]
    pub async fn request_delete(&self, id: String) -> Result<DeleteOutcome, DashboardError> {
        debug!("Sending request");
        self.request(|respond_to| DashboardRequest::Delete { id, respond_to })
            .await
    }
}
