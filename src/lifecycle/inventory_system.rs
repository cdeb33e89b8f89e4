use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::InventoryConfig;
use crate::clients::DashboardClient;
use crate::dashboard::{DashboardActor, DashboardContext};
use crate::storage::{ProductStore, StorageBackend};

/// A running dashboard: the controller task plus the client views use.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::start(&InventoryConfig::default(), DashboardContext::new(AutoConfirm(true)));
/// let stats = system.client.stats().await?;
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    pub client: DashboardClient,
    handle: JoinHandle<()>,
}

impl InventorySystem {
    /// Opens the configured storage and spawns the dashboard controller.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &InventoryConfig, context: DashboardContext) -> Self {
        Self::start_with_backend(config, config.storage.open(), context)
    }

    /// Like [`start`](Self::start), but over a backend the caller already holds.
    pub fn start_with_backend(
        config: &InventoryConfig,
        backend: Arc<dyn StorageBackend>,
        context: DashboardContext,
    ) -> Self {
        let store = ProductStore::with_key(backend, config.storage_key.clone());
        let (actor, client) =
            DashboardActor::new(config.channel_buffer, store, config.marketplace_policy.clone());
        let actor = actor.with_seed_samples(config.seed_samples);

        let handle = tokio::spawn(actor.run(context));
        info!(key = %config.storage_key, "Inventory system started");

        Self { client, handle }
    }

    /// Drops the client and waits for the controller to drain and stop.
    ///
    /// Clones of the client handed out earlier keep the controller alive;
    /// drop them first.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down inventory system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Dashboard task failed: {:?}", e);
            return Err(e);
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}
