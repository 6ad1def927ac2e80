//! Guest directory data contract.

use async_trait::async_trait;
use promessa_core::{GroupMember, Guest, GuestUpdate, NewGroupMember, NewGuest};
use promessa_error::PromessaResult;
use uuid::Uuid;

/// Remote-store operations over guests and their group members.
///
/// Every operation is scoped by the owning user; no cross-user visibility.
/// Creating a guest with members is two sequential store calls with no
/// cross-call atomicity; a failure after the first leaves a member-less
/// guest, matching the store's contract.
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// List the user's guests with their group members, in insertion order.
    async fn list_guests(&self, user_id: Uuid) -> PromessaResult<Vec<Guest>>;

    /// Fetch a single guest with its group members.
    async fn get_guest(&self, user_id: Uuid, guest_id: Uuid) -> PromessaResult<Guest>;

    /// Create a guest (and its initial group members, sequentially).
    async fn create_guest(&self, user_id: Uuid, guest: NewGuest) -> PromessaResult<Guest>;

    /// Apply a partial update to a guest.
    async fn update_guest(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        update: GuestUpdate,
    ) -> PromessaResult<Guest>;

    /// Delete a guest. The store cascades to its group members and to any
    /// table assignment referencing either.
    async fn delete_guest(&self, user_id: Uuid, guest_id: Uuid) -> PromessaResult<()>;

    /// Add a group member to an existing guest.
    async fn add_member(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        member: NewGroupMember,
    ) -> PromessaResult<GroupMember>;

    /// Remove a group member. The store cascades to any table assignment
    /// referencing it.
    async fn remove_member(&self, user_id: Uuid, member_id: Uuid) -> PromessaResult<()>;
}
