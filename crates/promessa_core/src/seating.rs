//! Seating-chart types: tables, occupants and assignment targets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A typed reference to the person seated by an assignment.
///
/// Exactly one of guest or group member, never both. Member references carry
/// the owning guest explicitly instead of encoding it in a composite id
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersonRef {
    /// A primary guest
    Guest {
        /// Guest identifier
        id: Uuid,
    },
    /// A group member of a guest
    Member {
        /// Member identifier
        id: Uuid,
        /// Owning guest identifier
        guest_id: Uuid,
    },
}

impl PersonRef {
    /// The person's own identifier, whichever kind it is.
    pub fn id(&self) -> Uuid {
        match self {
            PersonRef::Guest { id } => *id,
            PersonRef::Member { id, .. } => *id,
        }
    }

    /// The guest this person belongs to (itself, for a guest).
    pub fn owner_guest_id(&self) -> Uuid {
        match self {
            PersonRef::Guest { id } => *id,
            PersonRef::Member { guest_id, .. } => *guest_id,
        }
    }
}

/// A seating assignment: one person at one table, with denormalized display
/// fields so the chart renders without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    /// The seated person
    pub person: PersonRef,
    /// Denormalized display name
    pub name: String,
    /// Denormalized dietary restriction text
    pub dietary: Option<String>,
}

/// A reception table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Unique table identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Seat capacity; never less than the current occupant count
    pub capacity: i32,
    /// Reserved for the couple; protected from deletion
    pub special: bool,
    /// Currently seated occupants
    pub occupants: Vec<Occupant>,
}

impl Table {
    /// Seats still free at this table.
    pub fn free_seats(&self) -> usize {
        (self.capacity.max(0) as usize).saturating_sub(self.occupants.len())
    }

    /// Whether the table has no free seat left.
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= self.capacity.max(0) as usize
    }

    /// Whether this table currently seats the given person.
    pub fn seats(&self, person_id: Uuid) -> bool {
        self.occupants.iter().any(|o| o.person.id() == person_id)
    }
}

/// Payload for creating a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTable {
    /// Display name
    pub name: String,
    /// Seat capacity
    pub capacity: i32,
    /// Whether this is the couple's table
    #[serde(default)]
    pub special: bool,
}

/// Partial update for a table; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableUpdate {
    /// New display name
    pub name: Option<String>,
    /// New seat capacity
    pub capacity: Option<i32>,
}

/// Where to seat a person: a concrete table, or the `"unassigned"` sentinel
/// that removes any current assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignTarget {
    /// Seat at this table
    Table(Uuid),
    /// Remove the person's current assignment
    Unassigned,
}

impl Serialize for AssignTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AssignTarget::Table(id) => serializer.serialize_str(&id.to_string()),
            AssignTarget::Unassigned => serializer.serialize_str("unassigned"),
        }
    }
}

impl<'de> Deserialize<'de> for AssignTarget {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "unassigned" {
            return Ok(AssignTarget::Unassigned);
        }
        raw.parse::<Uuid>()
            .map(AssignTarget::Table)
            .map_err(|_| serde::de::Error::custom("expected a table id or \"unassigned\""))
    }
}

/// Outcome of an assignment operation, surfaced to the client as the
/// notification payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AssignOutcome {
    /// The person is now seated at the given table
    Assigned {
        /// The table the person was seated at
        table_id: Uuid,
    },
    /// The person's assignment was removed
    Removed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_target_accepts_sentinel_and_ids() {
        let target: AssignTarget = serde_json::from_str("\"unassigned\"").unwrap();
        assert_eq!(target, AssignTarget::Unassigned);

        let id = Uuid::new_v4();
        let target: AssignTarget = serde_json::from_str(&format!("\"{id}\"")).unwrap();
        assert_eq!(target, AssignTarget::Table(id));

        assert!(serde_json::from_str::<AssignTarget>("\"tavolo\"").is_err());
    }

    #[test]
    fn free_seats_never_underflows() {
        let table = Table {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Tavolo 1".to_string(),
            capacity: 1,
            special: false,
            occupants: vec![
                Occupant {
                    person: PersonRef::Guest { id: Uuid::new_v4() },
                    name: "A".to_string(),
                    dietary: None,
                },
                Occupant {
                    person: PersonRef::Guest { id: Uuid::new_v4() },
                    name: "B".to_string(),
                    dietary: None,
                },
            ],
        };
        assert_eq!(table.free_seats(), 0);
        assert!(table.is_full());
    }

    #[test]
    fn person_ref_owner_resolves_to_guest() {
        let guest_id = Uuid::new_v4();
        let member_id = Uuid::new_v4();
        let member = PersonRef::Member {
            id: member_id,
            guest_id,
        };
        assert_eq!(member.id(), member_id);
        assert_eq!(member.owner_guest_id(), guest_id);
        let guest = PersonRef::Guest { id: guest_id };
        assert_eq!(guest.owner_guest_id(), guest_id);
    }
}
