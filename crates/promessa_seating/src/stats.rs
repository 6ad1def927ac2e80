//! Derived seating statistics.

use promessa_core::{PersonRef, Table};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Aggregate counts over the table registry, recomputed by linear scan from
/// the source-of-truth arrays on every request. No caching at this data
/// scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingStats {
    /// Number of tables
    pub total_tables: usize,
    /// Sum of table capacities
    pub total_seats: i64,
    /// Sum of occupant counts
    pub occupied_seats: i64,
    /// `total_seats - occupied_seats`
    pub available_seats: i64,
    /// Guests currently seated somewhere
    pub assigned_guests: HashSet<Uuid>,
    /// Seated group member id mapped to its owning guest id
    pub assigned_members: HashMap<Uuid, Uuid>,
}

impl SeatingStats {
    /// Compute statistics for the given registry.
    pub fn compute(tables: &[Table]) -> Self {
        let total_tables = tables.len();
        let total_seats: i64 = tables.iter().map(|t| i64::from(t.capacity.max(0))).sum();
        let occupied_seats: i64 = tables.iter().map(|t| t.occupants.len() as i64).sum();

        let mut assigned_guests = HashSet::new();
        let mut assigned_members = HashMap::new();
        for table in tables {
            for occupant in &table.occupants {
                match occupant.person {
                    PersonRef::Guest { id } => {
                        assigned_guests.insert(id);
                    }
                    PersonRef::Member { id, guest_id } => {
                        assigned_members.insert(id, guest_id);
                    }
                }
            }
        }

        Self {
            total_tables,
            total_seats,
            occupied_seats,
            available_seats: total_seats - occupied_seats,
            assigned_guests,
            assigned_members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promessa_core::Occupant;

    fn table(capacity: i32, occupants: Vec<Occupant>) -> Table {
        Table {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Tavolo".to_string(),
            capacity,
            special: false,
            occupants,
        }
    }

    fn guest_occupant(id: Uuid) -> Occupant {
        Occupant {
            person: PersonRef::Guest { id },
            name: "Guest".to_string(),
            dietary: None,
        }
    }

    #[test]
    fn empty_registry_has_zero_everything() {
        let stats = SeatingStats::compute(&[]);
        assert_eq!(stats.total_tables, 0);
        assert_eq!(stats.total_seats, 0);
        assert_eq!(stats.available_seats, 0);
        assert!(stats.assigned_guests.is_empty());
    }

    #[test]
    fn counts_seats_across_tables() {
        let guest = Uuid::new_v4();
        let member = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let tables = vec![
            table(8, vec![guest_occupant(guest)]),
            table(
                6,
                vec![Occupant {
                    person: PersonRef::Member {
                        id: member,
                        guest_id: owner,
                    },
                    name: "Member".to_string(),
                    dietary: None,
                }],
            ),
        ];
        let stats = SeatingStats::compute(&tables);
        assert_eq!(stats.total_tables, 2);
        assert_eq!(stats.total_seats, 14);
        assert_eq!(stats.occupied_seats, 2);
        assert_eq!(stats.available_seats, 12);
        assert!(stats.assigned_guests.contains(&guest));
        assert_eq!(stats.assigned_members.get(&member), Some(&owner));
    }

    #[test]
    fn negative_capacity_clamps_to_zero_seats() {
        let stats = SeatingStats::compute(&[table(-3, vec![])]);
        assert_eq!(stats.total_seats, 0);
    }
}
