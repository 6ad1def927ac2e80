//! Budget service.

use crate::{require_name, require_non_negative};
use promessa_core::{BudgetItem, BudgetItemUpdate, BudgetSettings, BudgetSummary, NewBudgetItem};
use promessa_error::PromessaResult;
use promessa_interface::BudgetRepository;
use std::sync::Arc;
use uuid::Uuid;

/// The budget for one user.
///
/// Settings default to a zero total budget until the user saves one; the
/// summary is recomputed from the item list on every read rather than kept
/// as a running total.
#[derive(Clone)]
pub struct BudgetService {
    user_id: Uuid,
    repo: Arc<dyn BudgetRepository>,
}

impl BudgetService {
    /// Bind the service to a user and repository.
    pub fn new(user_id: Uuid, repo: Arc<dyn BudgetRepository>) -> Self {
        Self { user_id, repo }
    }

    /// All budget items.
    pub async fn items(&self) -> PromessaResult<Vec<BudgetItem>> {
        self.repo.list_items(self.user_id).await
    }

    /// Create a budget item.
    #[tracing::instrument(skip(self, item), fields(user_id = %self.user_id))]
    pub async fn create_item(&self, item: NewBudgetItem) -> PromessaResult<BudgetItem> {
        require_name("Budget item", &item.category)?;
        require_non_negative(item.estimated)?;
        if let Some(actual) = item.actual {
            require_non_negative(actual)?;
        }
        self.repo.create_item(self.user_id, item).await
    }

    /// Apply a partial update to a budget item.
    #[tracing::instrument(skip(self, update), fields(user_id = %self.user_id))]
    pub async fn update_item(
        &self,
        item_id: Uuid,
        update: BudgetItemUpdate,
    ) -> PromessaResult<BudgetItem> {
        if let Some(category) = &update.category {
            require_name("Budget item", category)?;
        }
        if let Some(estimated) = update.estimated {
            require_non_negative(estimated)?;
        }
        if let Some(actual) = update.actual {
            require_non_negative(actual)?;
        }
        self.repo.update_item(self.user_id, item_id, update).await
    }

    /// Delete a budget item.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn delete_item(&self, item_id: Uuid) -> PromessaResult<()> {
        self.repo.delete_item(self.user_id, item_id).await
    }

    /// The user's settings, zero total budget when none are saved yet.
    pub async fn settings(&self) -> PromessaResult<BudgetSettings> {
        Ok(self
            .repo
            .get_settings(self.user_id)
            .await?
            .unwrap_or(BudgetSettings {
                user_id: self.user_id,
                total_budget: 0.0,
            }))
    }

    /// Save the total budget the couple is working against.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn set_total_budget(&self, total_budget: f64) -> PromessaResult<BudgetSettings> {
        require_non_negative(total_budget)?;
        self.repo
            .upsert_settings(BudgetSettings {
                user_id: self.user_id,
                total_budget,
            })
            .await
    }

    /// Aggregate summary over items and settings.
    pub async fn summary(&self) -> PromessaResult<BudgetSummary> {
        let items = self.repo.list_items(self.user_id).await?;
        let settings = self.settings().await?;
        Ok(BudgetSummary::compute(&items, &settings))
    }
}
