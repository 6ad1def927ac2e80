//! Seating-chart data contract.

use async_trait::async_trait;
use promessa_core::{NewTable, Occupant, Table};
use promessa_error::PromessaResult;
use uuid::Uuid;

/// Remote-store operations over tables and their assignments.
///
/// Each mutation is a discrete call; the in-memory registry is only updated
/// after the call resolves successfully.
#[async_trait]
pub trait SeatingRepository: Send + Sync {
    /// List the user's tables with their occupants joined in.
    async fn list_tables(&self, user_id: Uuid) -> PromessaResult<Vec<Table>>;

    /// Insert a table with an empty occupant list.
    async fn insert_table(&self, user_id: Uuid, table: NewTable) -> PromessaResult<Table>;

    /// Persist a table's name and capacity. Capacity validation happens in
    /// the planner before this is called.
    async fn update_table(
        &self,
        user_id: Uuid,
        table_id: Uuid,
        name: &str,
        capacity: i32,
    ) -> PromessaResult<()>;

    /// Delete a table. Occupant rows cascade via the store's referential
    /// constraints.
    async fn delete_table(&self, user_id: Uuid, table_id: Uuid) -> PromessaResult<()>;

    /// Insert an assignment row seating one person at one table.
    async fn insert_assignment(
        &self,
        user_id: Uuid,
        table_id: Uuid,
        occupant: &Occupant,
    ) -> PromessaResult<()>;

    /// Delete any assignment referencing the given person. A no-op when the
    /// person is not seated.
    async fn delete_assignment(&self, user_id: Uuid, person_id: Uuid) -> PromessaResult<()>;
}
