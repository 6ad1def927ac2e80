//! Guest directory types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A guest's attendance response.
///
/// Stored as lowercase text in the database and over the wire.
///
/// # Examples
///
/// ```
/// use promessa_core::RsvpStatus;
/// use std::str::FromStr;
///
/// assert_eq!(RsvpStatus::from_str("confirmed").unwrap(), RsvpStatus::Confirmed);
/// assert_eq!(RsvpStatus::Pending.to_string(), "pending");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RsvpStatus {
    /// No response yet
    #[default]
    Pending,
    /// Attending
    Confirmed,
    /// Not attending
    Declined,
}

/// A dependent invitee (child, plus-one) attached to a guest.
///
/// A group member cannot outlive its guest: deleting the guest deletes all of
/// its members, along with any table assignment referencing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    /// Unique member identifier
    pub id: Uuid,
    /// Owning guest
    pub guest_id: Uuid,
    /// Display name
    pub name: String,
    /// Dietary restriction free text
    pub dietary: Option<String>,
    /// Whether the member is a child
    pub is_child: bool,
}

/// A primary invitee who may bring a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Unique guest identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Relationship category (e.g. "family", "friend", "colleague")
    pub relationship: String,
    /// Attendance response
    pub rsvp: RsvpStatus,
    /// Whether the guest may bring a plus-one
    pub plus_one: bool,
    /// Dietary restriction free text
    pub dietary: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Owned group members, in insertion order
    pub members: Vec<GroupMember>,
}

impl Guest {
    /// Look up an owned group member by id.
    pub fn member(&self, member_id: Uuid) -> Option<&GroupMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    /// Seats the guest's party needs when everyone attends.
    pub fn party_size(&self) -> usize {
        1 + self.members.len()
    }
}

/// Payload for creating a guest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGuest {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Relationship category
    pub relationship: String,
    /// Attendance response, `pending` when omitted
    #[serde(default)]
    pub rsvp: RsvpStatus,
    /// Whether the guest may bring a plus-one
    #[serde(default)]
    pub plus_one: bool,
    /// Dietary restriction free text
    pub dietary: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Group members to create with the guest
    #[serde(default)]
    pub members: Vec<NewGroupMember>,
}

/// Payload for adding a group member to an existing guest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGroupMember {
    /// Display name
    pub name: String,
    /// Dietary restriction free text
    pub dietary: Option<String>,
    /// Whether the member is a child
    #[serde(default)]
    pub is_child: bool,
}

/// Partial update for a guest; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestUpdate {
    /// New display name
    pub name: Option<String>,
    /// New contact email
    pub email: Option<String>,
    /// New contact phone
    pub phone: Option<String>,
    /// New relationship category
    pub relationship: Option<String>,
    /// New attendance response
    pub rsvp: Option<RsvpStatus>,
    /// New plus-one flag
    pub plus_one: Option<bool>,
    /// New dietary restriction text
    pub dietary: Option<String>,
    /// New notes
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsvp_round_trips_through_text() {
        use std::str::FromStr;
        for status in [RsvpStatus::Pending, RsvpStatus::Confirmed, RsvpStatus::Declined] {
            let text = status.to_string();
            assert_eq!(RsvpStatus::from_str(&text).unwrap(), status);
        }
    }

    #[test]
    fn party_size_counts_guest_and_members() {
        let guest_id = Uuid::new_v4();
        let guest = Guest {
            id: guest_id,
            user_id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: None,
            phone: None,
            relationship: "family".to_string(),
            rsvp: RsvpStatus::Confirmed,
            plus_one: true,
            dietary: None,
            notes: None,
            members: vec![GroupMember {
                id: Uuid::new_v4(),
                guest_id,
                name: "Sam".to_string(),
                dietary: None,
                is_child: true,
            }],
        };
        assert_eq!(guest.party_size(), 2);
    }
}
