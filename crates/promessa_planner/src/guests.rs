//! Guest directory service.

use crate::require_name;
use promessa_core::{GroupMember, Guest, GuestUpdate, NewGroupMember, NewGuest};
use promessa_error::PromessaResult;
use promessa_interface::GuestRepository;
use std::sync::Arc;
use uuid::Uuid;

/// The guest list for one user.
///
/// Deleting a guest also removes their group members and any seat either of
/// them held; the store cascades those rows away, so a freshly loaded seating
/// chart never references a deleted person.
#[derive(Clone)]
pub struct GuestDirectory {
    user_id: Uuid,
    repo: Arc<dyn GuestRepository>,
}

impl GuestDirectory {
    /// Bind the directory to a user and repository.
    pub fn new(user_id: Uuid, repo: Arc<dyn GuestRepository>) -> Self {
        Self { user_id, repo }
    }

    /// All guests with their group members, in insertion order.
    pub async fn guests(&self) -> PromessaResult<Vec<Guest>> {
        self.repo.list_guests(self.user_id).await
    }

    /// One guest with their group members.
    pub async fn guest(&self, guest_id: Uuid) -> PromessaResult<Guest> {
        self.repo.get_guest(self.user_id, guest_id).await
    }

    /// Create a guest and their initial group members.
    ///
    /// The guest row lands first, member rows follow one call at a time; a
    /// failure partway leaves the guest with the members created so far.
    #[tracing::instrument(skip(self, guest), fields(user_id = %self.user_id))]
    pub async fn create(&self, guest: NewGuest) -> PromessaResult<Guest> {
        require_name("Guest", &guest.name)?;
        for member in &guest.members {
            require_name("Group member", &member.name)?;
        }
        self.repo.create_guest(self.user_id, guest).await
    }

    /// Apply a partial update to a guest.
    #[tracing::instrument(skip(self, update), fields(user_id = %self.user_id))]
    pub async fn update(&self, guest_id: Uuid, update: GuestUpdate) -> PromessaResult<Guest> {
        if let Some(name) = &update.name {
            require_name("Guest", name)?;
        }
        self.repo.update_guest(self.user_id, guest_id, update).await
    }

    /// Delete a guest, cascading to members and seat assignments.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn delete(&self, guest_id: Uuid) -> PromessaResult<()> {
        self.repo.delete_guest(self.user_id, guest_id).await
    }

    /// Add a group member to an existing guest.
    #[tracing::instrument(skip(self, member), fields(user_id = %self.user_id))]
    pub async fn add_member(
        &self,
        guest_id: Uuid,
        member: NewGroupMember,
    ) -> PromessaResult<GroupMember> {
        require_name("Group member", &member.name)?;
        self.repo.add_member(self.user_id, guest_id, member).await
    }

    /// Remove a group member, cascading to their seat assignment.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn remove_member(&self, member_id: Uuid) -> PromessaResult<()> {
        self.repo.remove_member(self.user_id, member_id).await
    }
}
