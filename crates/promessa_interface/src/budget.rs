//! Budget data contract.

use async_trait::async_trait;
use promessa_core::{BudgetItem, BudgetItemUpdate, BudgetSettings, NewBudgetItem};
use promessa_error::PromessaResult;
use uuid::Uuid;

/// Remote-store operations over budget items and per-user settings.
#[async_trait]
pub trait BudgetRepository: Send + Sync {
    /// List the user's budget items.
    async fn list_items(&self, user_id: Uuid) -> PromessaResult<Vec<BudgetItem>>;

    /// Create a budget item.
    async fn create_item(&self, user_id: Uuid, item: NewBudgetItem)
    -> PromessaResult<BudgetItem>;

    /// Apply a partial update to a budget item.
    async fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        update: BudgetItemUpdate,
    ) -> PromessaResult<BudgetItem>;

    /// Delete a budget item.
    async fn delete_item(&self, user_id: Uuid, item_id: Uuid) -> PromessaResult<()>;

    /// Fetch the user's budget settings, if any have been saved.
    async fn get_settings(&self, user_id: Uuid) -> PromessaResult<Option<BudgetSettings>>;

    /// Insert or replace the user's budget settings.
    async fn upsert_settings(&self, settings: BudgetSettings) -> PromessaResult<BudgetSettings>;
}
