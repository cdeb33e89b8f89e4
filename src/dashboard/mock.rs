//! # Mock Dashboard
//!
//! Utilities for testing view-side code without a running controller.
//!
//! [`create_mock_client`] returns a real [`DashboardClient`] whose requests
//! land on a receiver the test owns. The `expect_*` helpers pull the next
//! request off that receiver, check its kind and hand back its payload and
//! reply channel so the test decides what the "controller" answers.

use tokio::sync::mpsc;

use super::{DashboardRequest, DeleteOutcome, Response, SaveMode, SaveOutcome};
use crate::clients::DashboardClient;
use crate::model::{MarketplaceRegistry, Product, ProductPatch};

/// Creates a client and the receiver its requests are delivered to.
pub fn create_mock_client(buffer_size: usize) -> (DashboardClient, mpsc::Receiver<DashboardRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DashboardClient::new(sender), receiver)
}

/// Next request, if it is a `Save`.
pub async fn expect_save(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<(Product, SaveMode, Response<SaveOutcome>)> {
    match receiver.recv().await {
        Some(DashboardRequest::Save {
            product,
            mode,
            respond_to,
        }) => Some((product, mode, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Edit`.
pub async fn expect_edit(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<(String, ProductPatch, Response<SaveOutcome>)> {
    match receiver.recv().await {
        Some(DashboardRequest::Edit {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Delete`.
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<(String, Response<DeleteOutcome>)> {
    match receiver.recv().await {
        Some(DashboardRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Marketplaces` lookup.
pub async fn expect_marketplaces(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<Response<MarketplaceRegistry>> {
    match receiver.recv().await {
        Some(DashboardRequest::Marketplaces { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(4);

        let save_task = tokio::spawn(async move {
            let product = Product::new("7", "Lamp", "nykaa", 5.0, 2);
            client.save(product, SaveMode::NewPurchase).await
        });

        let (product, mode, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(product.id, "7");
        assert_eq!(mode, SaveMode::NewPurchase);
        responder.send(Ok(SaveOutcome::Added)).unwrap();

        assert_eq!(save_task.await.unwrap(), Ok(SaveOutcome::Added));
    }

    #[tokio::test]
    async fn dropped_responder_surfaces_as_actor_dropped() {
        let (client, mut receiver) = create_mock_client(4);

        let delete_task = tokio::spawn(async move { client.request_delete("1".into()).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "1");
        drop(responder);

        assert_eq!(delete_task.await.unwrap(), Err(DashboardError::ActorDropped));
    }

    #[tokio::test]
    async fn marketplace_suggestions_come_from_the_controller() {
        let (client, mut receiver) = create_mock_client(4);

        let lookup = tokio::spawn(async move { client.marketplaces().await });

        let responder = expect_marketplaces(&mut receiver)
            .await
            .expect("Expected Marketplaces request");
        responder
            .send(Ok(MarketplaceRegistry::new(vec!["etsy".into()])))
            .unwrap();

        let registry = lookup.await.unwrap().unwrap();
        assert!(registry.contains("etsy"));
    }

    #[tokio::test]
    async fn closed_receiver_surfaces_as_actor_closed() {
        let (client, receiver) = create_mock_client(4);
        drop(receiver);

        assert_eq!(client.snapshot().await, Err(DashboardError::ActorClosed));
    }
}
