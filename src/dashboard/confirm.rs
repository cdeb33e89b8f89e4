//! Interactive confirmation before destructive operations.

use async_trait::async_trait;

use crate::model::Product;

/// Asks the person at the dashboard whether a delete should go ahead.
///
/// The controller consults this before touching the store; a `false`
/// answer means the delete is never attempted. `product` is `None` when the
/// id is not in the current snapshot.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm_delete(&self, id: &str, product: Option<&Product>) -> bool;
}

/// Answers every prompt the same way. Useful for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl ConfirmPrompt for AutoConfirm {
    async fn confirm_delete(&self, _id: &str, _product: Option<&Product>) -> bool {
        self.0
    }
}
