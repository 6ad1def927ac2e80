//! Role lookup data contract.

use async_trait::async_trait;
use promessa_core::Role;
use promessa_error::PromessaResult;
use uuid::Uuid;

/// Remote-store operations over role assignments.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Look up the user's role.
    ///
    /// Implementations are best-effort: a user with no role row resolves to
    /// `Role::Couple`, and a failed lookup also falls back to `Role::Couple`
    /// after logging a warning. That fallback can silently treat a vendor as
    /// a couple; flagged for product review rather than changed here.
    async fn role_for_user(&self, user_id: Uuid) -> PromessaResult<Role>;

    /// Insert or replace the user's role row.
    async fn set_role(&self, user_id: Uuid, role: Role) -> PromessaResult<()>;
}
