//! PostgreSQL implementation of `BudgetRepository`.

use crate::rows::{BudgetItemChangeset, BudgetItemRow, NewBudgetItemRow, db_err};
use crate::schema::{budget_items, budget_settings};

use promessa_core::{BudgetItem, BudgetItemUpdate, BudgetSettings, NewBudgetItem};
use promessa_error::{DatabaseError, DatabaseErrorKind, PromessaResult};
use promessa_interface::BudgetRepository;

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Diesel-backed budget store.
pub struct PostgresBudgetRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresBudgetRepository {
    /// Create a repository owning its connection.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create a repository from a shared connection.
    pub fn from_arc(conn: Arc<Mutex<PgConnection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl BudgetRepository for PostgresBudgetRepository {
    #[tracing::instrument(skip(self))]
    async fn list_items(&self, user_id: Uuid) -> PromessaResult<Vec<BudgetItem>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<BudgetItemRow> = budget_items::table
            .filter(budget_items::user_id.eq(user_id))
            .order(budget_items::created_at.asc())
            .select(BudgetItemRow::as_select())
            .load(&mut *conn)
            .map_err(db_err)?;

        Ok(rows.into_iter().map(BudgetItemRow::into_core).collect())
    }

    #[tracing::instrument(skip(self, item), fields(category = %item.category))]
    async fn create_item(
        &self,
        user_id: Uuid,
        item: NewBudgetItem,
    ) -> PromessaResult<BudgetItem> {
        let mut conn = self.conn.lock().await;

        let row = NewBudgetItemRow {
            id: Uuid::new_v4(),
            user_id,
            category: item.category,
            description: item.description,
            estimated: item.estimated,
            actual: item.actual,
            paid: item.paid,
        };
        let inserted: BudgetItemRow = diesel::insert_into(budget_items::table)
            .values(&row)
            .returning(BudgetItemRow::as_returning())
            .get_result(&mut *conn)
            .map_err(db_err)?;

        Ok(inserted.into_core())
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        update: BudgetItemUpdate,
    ) -> PromessaResult<BudgetItem> {
        let mut conn = self.conn.lock().await;

        let changeset = BudgetItemChangeset {
            category: update.category,
            description: update.description,
            estimated: update.estimated,
            actual: update.actual,
            paid: update.paid,
        };

        let scope = budget_items::table
            .filter(budget_items::user_id.eq(user_id))
            .filter(budget_items::id.eq(item_id));

        // Diesel rejects an all-default changeset; an empty update is a read.
        let is_empty = matches!(
            changeset,
            BudgetItemChangeset {
                category: None,
                description: None,
                estimated: None,
                actual: None,
                paid: None,
            }
        );
        let row: BudgetItemRow = if is_empty {
            scope
                .select(BudgetItemRow::as_select())
                .first(&mut *conn)
                .map_err(db_err)?
        } else {
            diesel::update(scope)
                .set(&changeset)
                .returning(BudgetItemRow::as_returning())
                .get_result(&mut *conn)
                .map_err(db_err)?
        };

        Ok(row.into_core())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_item(&self, user_id: Uuid, item_id: Uuid) -> PromessaResult<()> {
        let mut conn = self.conn.lock().await;

        let deleted = diesel::delete(
            budget_items::table
                .filter(budget_items::user_id.eq(user_id))
                .filter(budget_items::id.eq(item_id)),
        )
        .execute(&mut *conn)
        .map_err(db_err)?;

        if deleted == 0 {
            return Err(DatabaseError::new(DatabaseErrorKind::NotFound).into());
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_settings(&self, user_id: Uuid) -> PromessaResult<Option<BudgetSettings>> {
        let mut conn = self.conn.lock().await;

        let row: Option<(Uuid, f64)> = budget_settings::table
            .find(user_id)
            .first(&mut *conn)
            .optional()
            .map_err(db_err)?;

        Ok(row.map(|(user_id, total_budget)| BudgetSettings {
            user_id,
            total_budget,
        }))
    }

    #[tracing::instrument(skip(self), fields(total = settings.total_budget))]
    async fn upsert_settings(&self, settings: BudgetSettings) -> PromessaResult<BudgetSettings> {
        let mut conn = self.conn.lock().await;

        let (user_id, total_budget): (Uuid, f64) = diesel::insert_into(budget_settings::table)
            .values((
                budget_settings::user_id.eq(settings.user_id),
                budget_settings::total_budget.eq(settings.total_budget),
            ))
            .on_conflict(budget_settings::user_id)
            .do_update()
            .set(budget_settings::total_budget.eq(settings.total_budget))
            .get_result(&mut *conn)
            .map_err(db_err)?;

        Ok(BudgetSettings {
            user_id,
            total_budget,
        })
    }
}
