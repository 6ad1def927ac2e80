//! End-to-end seating scenarios over in-memory stores.

use async_trait::async_trait;
use promessa_core::{
    AssignOutcome, AssignTarget, GroupMember, Guest, GuestUpdate, NewGroupMember, NewGuest,
    NewTable, Occupant, RsvpStatus, Table,
};
use promessa_error::{
    PlannerError, PlannerErrorKind, PromessaErrorKind, PromessaResult, SeatingErrorKind,
    StorageError, StorageErrorKind,
};
use promessa_interface::{GuestRepository, SeatingRepository};
use promessa_seating::{migrate_local_chart, SeatingPlanner, SEATING_KIND};
use promessa_storage::LocalStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct MemorySeating {
    tables: Mutex<Vec<Table>>,
    fail_next_insert: AtomicBool,
}

#[async_trait]
impl SeatingRepository for MemorySeating {
    async fn list_tables(&self, user_id: Uuid) -> PromessaResult<Vec<Table>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_table(&self, user_id: Uuid, table: NewTable) -> PromessaResult<Table> {
        let created = Table {
            id: Uuid::new_v4(),
            user_id,
            name: table.name,
            capacity: table.capacity,
            special: table.special,
            occupants: Vec::new(),
        };
        self.tables.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_table(
        &self,
        _user_id: Uuid,
        table_id: Uuid,
        name: &str,
        capacity: i32,
    ) -> PromessaResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let table = tables.iter_mut().find(|t| t.id == table_id).unwrap();
        table.name = name.to_string();
        table.capacity = capacity;
        Ok(())
    }

    async fn delete_table(&self, _user_id: Uuid, table_id: Uuid) -> PromessaResult<()> {
        self.tables.lock().unwrap().retain(|t| t.id != table_id);
        Ok(())
    }

    async fn insert_assignment(
        &self,
        _user_id: Uuid,
        table_id: Uuid,
        occupant: &Occupant,
    ) -> PromessaResult<()> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::FileWrite(
                "injected failure".to_string(),
            ))
            .into());
        }
        let mut tables = self.tables.lock().unwrap();
        let table = tables.iter_mut().find(|t| t.id == table_id).unwrap();
        table.occupants.push(occupant.clone());
        Ok(())
    }

    async fn delete_assignment(&self, _user_id: Uuid, person_id: Uuid) -> PromessaResult<()> {
        for table in self.tables.lock().unwrap().iter_mut() {
            table.occupants.retain(|o| o.person.id() != person_id);
        }
        Ok(())
    }
}

#[derive(Default)]
struct MemoryGuests {
    guests: Mutex<Vec<Guest>>,
}

#[async_trait]
impl GuestRepository for MemoryGuests {
    async fn list_guests(&self, user_id: Uuid) -> PromessaResult<Vec<Guest>> {
        Ok(self
            .guests
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_guest(&self, _user_id: Uuid, guest_id: Uuid) -> PromessaResult<Guest> {
        self.guests
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == guest_id)
            .cloned()
            .ok_or_else(|| PlannerError::new(PlannerErrorKind::GuestNotFound(guest_id)).into())
    }

    async fn create_guest(&self, user_id: Uuid, guest: NewGuest) -> PromessaResult<Guest> {
        let guest_id = Uuid::new_v4();
        let created = Guest {
            id: guest_id,
            user_id,
            name: guest.name,
            email: guest.email,
            phone: guest.phone,
            relationship: guest.relationship,
            rsvp: guest.rsvp,
            plus_one: guest.plus_one,
            dietary: guest.dietary,
            notes: guest.notes,
            members: guest
                .members
                .into_iter()
                .map(|m| GroupMember {
                    id: Uuid::new_v4(),
                    guest_id,
                    name: m.name,
                    dietary: m.dietary,
                    is_child: m.is_child,
                })
                .collect(),
        };
        self.guests.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_guest(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        _update: GuestUpdate,
    ) -> PromessaResult<Guest> {
        self.get_guest(user_id, guest_id).await
    }

    async fn delete_guest(&self, _user_id: Uuid, guest_id: Uuid) -> PromessaResult<()> {
        self.guests.lock().unwrap().retain(|g| g.id != guest_id);
        Ok(())
    }

    async fn add_member(
        &self,
        _user_id: Uuid,
        guest_id: Uuid,
        member: NewGroupMember,
    ) -> PromessaResult<GroupMember> {
        let created = GroupMember {
            id: Uuid::new_v4(),
            guest_id,
            name: member.name,
            dietary: member.dietary,
            is_child: member.is_child,
        };
        let mut guests = self.guests.lock().unwrap();
        let guest = guests.iter_mut().find(|g| g.id == guest_id).unwrap();
        guest.members.push(created.clone());
        Ok(created)
    }

    async fn remove_member(&self, _user_id: Uuid, member_id: Uuid) -> PromessaResult<()> {
        for guest in self.guests.lock().unwrap().iter_mut() {
            guest.members.retain(|m| m.id != member_id);
        }
        Ok(())
    }
}

#[derive(Default)]
struct MemoryLocal {
    entries: Mutex<HashMap<(Uuid, String), String>>,
}

#[async_trait]
impl LocalStore for MemoryLocal {
    async fn read(&self, user_id: Uuid, kind: &str) -> PromessaResult<Option<String>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(user_id, kind.to_string()))
            .cloned())
    }

    async fn write(&self, user_id: Uuid, kind: &str, payload: &str) -> PromessaResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert((user_id, kind.to_string()), payload.to_string());
        Ok(())
    }

    async fn delete(&self, user_id: Uuid, kind: &str) -> PromessaResult<()> {
        self.entries
            .lock()
            .unwrap()
            .remove(&(user_id, kind.to_string()));
        Ok(())
    }
}

struct Fixture {
    user_id: Uuid,
    seating: Arc<MemorySeating>,
    guests: Arc<MemoryGuests>,
    local: Arc<MemoryLocal>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            seating: Arc::new(MemorySeating::default()),
            guests: Arc::new(MemoryGuests::default()),
            local: Arc::new(MemoryLocal::default()),
        }
    }

    async fn guest(&self, name: &str, members: &[&str]) -> Guest {
        self.guests
            .create_guest(
                self.user_id,
                NewGuest {
                    name: name.to_string(),
                    relationship: "family".to_string(),
                    rsvp: RsvpStatus::Confirmed,
                    members: members
                        .iter()
                        .map(|m| NewGroupMember {
                            name: m.to_string(),
                            ..NewGroupMember::default()
                        })
                        .collect(),
                    ..NewGuest::default()
                },
            )
            .await
            .unwrap()
    }

    async fn table(&self, name: &str, capacity: i32, special: bool) -> Table {
        self.seating
            .insert_table(
                self.user_id,
                NewTable {
                    name: name.to_string(),
                    capacity,
                    special,
                },
            )
            .await
            .unwrap()
    }

    async fn planner(&self) -> SeatingPlanner {
        SeatingPlanner::load(
            self.user_id,
            self.seating.clone(),
            self.guests.clone(),
            self.local.clone(),
        )
        .await
        .unwrap()
    }
}

fn seating_kind(err: &promessa_error::PromessaError) -> &SeatingErrorKind {
    match err.kind() {
        PromessaErrorKind::Seating(e) => &e.kind,
        other => panic!("expected a seating error, got {other}"),
    }
}

#[tokio::test]
async fn assigning_a_guest_seats_and_reseating_moves() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &[]).await;
    let first = fx.table("Tavolo 1", 8, true).await;
    let second = fx.table("Tavolo 2", 8, false).await;

    let mut planner = fx.planner().await;
    let outcome = planner
        .assign(guest.id, AssignTarget::Table(first.id))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        AssignOutcome::Assigned {
            table_id: first.id
        }
    );
    assert!(planner.tables()[0].seats(guest.id));

    // Re-assigning moves the guest rather than duplicating the seat.
    planner
        .assign(guest.id, AssignTarget::Table(second.id))
        .await
        .unwrap();
    assert!(!planner.tables()[0].seats(guest.id));
    assert!(planner.tables()[1].seats(guest.id));

    let total_seated: usize = planner.tables().iter().map(|t| t.occupants.len()).sum();
    assert_eq!(total_seated, 1);
}

#[tokio::test]
async fn reassigning_to_the_same_table_does_not_duplicate_the_seat() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &[]).await;
    // Capacity 1, so a duplicate row would also trip the capacity check.
    let table = fx.table("Tavolo 1", 1, false).await;

    let mut planner = fx.planner().await;
    planner
        .assign(guest.id, AssignTarget::Table(table.id))
        .await
        .unwrap();
    let outcome = planner
        .assign(guest.id, AssignTarget::Table(table.id))
        .await
        .unwrap();
    assert_eq!(outcome, AssignOutcome::Assigned { table_id: table.id });

    assert_eq!(planner.tables()[0].occupants.len(), 1);
    assert!(planner.tables()[0].seats(guest.id));
    let remote = fx.seating.list_tables(fx.user_id).await.unwrap();
    assert_eq!(remote[0].occupants.len(), 1);
}

#[tokio::test]
async fn unassigned_sentinel_clears_the_seat() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &[]).await;
    let table = fx.table("Tavolo 1", 8, false).await;

    let mut planner = fx.planner().await;
    planner
        .assign(guest.id, AssignTarget::Table(table.id))
        .await
        .unwrap();
    let outcome = planner
        .assign(guest.id, AssignTarget::Unassigned)
        .await
        .unwrap();
    assert_eq!(outcome, AssignOutcome::Removed);
    assert!(planner.tables()[0].occupants.is_empty());
    assert_eq!(planner.stats().occupied_seats, 0);
}

#[tokio::test]
async fn full_table_rejects_without_touching_the_chart() {
    let fx = Fixture::new();
    let seated = fx.guest("Ada", &[]).await;
    let latecomer = fx.guest("Sam", &[]).await;
    let table = fx.table("Tavolo 1", 1, false).await;

    let mut planner = fx.planner().await;
    planner
        .assign(seated.id, AssignTarget::Table(table.id))
        .await
        .unwrap();

    let err = planner
        .assign(latecomer.id, AssignTarget::Table(table.id))
        .await
        .unwrap_err();
    assert!(matches!(
        seating_kind(&err),
        SeatingErrorKind::TableFull { capacity: 1, .. }
    ));
    assert_eq!(planner.tables()[0].occupants.len(), 1);
    assert!(planner.tables()[0].seats(seated.id));
}

#[tokio::test]
async fn unknown_person_and_table_are_typed_errors() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &[]).await;
    fx.table("Tavolo 1", 8, false).await;
    let mut planner = fx.planner().await;

    let ghost = Uuid::new_v4();
    let err = planner
        .assign(ghost, AssignTarget::Unassigned)
        .await
        .unwrap_err();
    assert_eq!(seating_kind(&err), &SeatingErrorKind::PersonNotFound(ghost));

    let nowhere = Uuid::new_v4();
    let err = planner
        .assign(guest.id, AssignTarget::Table(nowhere))
        .await
        .unwrap_err();
    assert_eq!(seating_kind(&err), &SeatingErrorKind::TableNotFound(nowhere));
}

#[tokio::test]
async fn group_assignment_is_all_or_nothing() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &["Sam", "Kim"]).await;
    let small = fx.table("Tavolo 1", 2, false).await;
    let large = fx.table("Tavolo 2", 3, false).await;

    let mut planner = fx.planner().await;
    let err = planner.assign_group(guest.id, small.id).await.unwrap_err();
    assert!(matches!(
        seating_kind(&err),
        SeatingErrorKind::GroupTooLarge {
            needed: 3,
            free: 2,
            ..
        }
    ));
    assert!(planner.tables()[0].occupants.is_empty());

    planner.assign_group(guest.id, large.id).await.unwrap();
    assert_eq!(planner.tables()[1].occupants.len(), 3);
    assert!(planner.tables()[1].seats(guest.id));
    for member in &guest.members {
        assert!(planner.tables()[1].seats(member.id));
    }
}

#[tokio::test]
async fn group_assignment_only_moves_the_unseated() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &["Sam"]).await;
    let elsewhere = fx.table("Tavolo 1", 8, false).await;
    let target = fx.table("Tavolo 2", 2, false).await;

    let mut planner = fx.planner().await;
    // The guest starts at the target, the member at another table.
    planner
        .assign(guest.id, AssignTarget::Table(target.id))
        .await
        .unwrap();
    planner
        .assign(guest.members[0].id, AssignTarget::Table(elsewhere.id))
        .await
        .unwrap();

    planner.assign_group(guest.id, target.id).await.unwrap();
    assert!(planner.tables()[0].occupants.is_empty());
    assert_eq!(planner.tables()[1].occupants.len(), 2);
}

#[tokio::test]
async fn failed_store_insert_leaves_the_registry_unchanged() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &[]).await;
    let table = fx.table("Tavolo 1", 8, false).await;

    let mut planner = fx.planner().await;
    fx.seating.fail_next_insert.store(true, Ordering::SeqCst);
    let err = planner.assign(guest.id, AssignTarget::Table(table.id)).await;
    assert!(err.is_err());
    assert!(planner.tables()[0].occupants.is_empty());
    assert!(fx.seating.list_tables(fx.user_id).await.unwrap()[0]
        .occupants
        .is_empty());
}

#[tokio::test]
async fn capacity_cannot_drop_below_occupancy() {
    let fx = Fixture::new();
    let a = fx.guest("Ada", &[]).await;
    let b = fx.guest("Sam", &[]).await;
    let table = fx.table("Tavolo 1", 4, false).await;

    let mut planner = fx.planner().await;
    planner.assign(a.id, AssignTarget::Table(table.id)).await.unwrap();
    planner.assign(b.id, AssignTarget::Table(table.id)).await.unwrap();

    let err = planner
        .update_table(
            table.id,
            promessa_core::TableUpdate {
                name: None,
                capacity: Some(1),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        seating_kind(&err),
        &SeatingErrorKind::CapacityBelowOccupancy {
            requested: 1,
            occupants: 2,
        }
    );

    // Shrinking to exactly the occupant count is allowed.
    let updated = planner
        .update_table(
            table.id,
            promessa_core::TableUpdate {
                name: Some("Tavolo degli sposi".to_string()),
                capacity: Some(2),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.capacity, 2);
    assert_eq!(updated.name, "Tavolo degli sposi");
    assert!(updated.is_full());
}

#[tokio::test]
async fn the_couples_table_cannot_be_deleted() {
    let fx = Fixture::new();
    let special = fx.table("Tavolo degli sposi", 2, true).await;
    let plain = fx.table("Tavolo 2", 8, false).await;
    let guest = fx.guest("Ada", &[]).await;

    let mut planner = fx.planner().await;
    let err = planner.remove_table(special.id).await.unwrap_err();
    assert!(matches!(
        seating_kind(&err),
        SeatingErrorKind::SpecialTableProtected(_)
    ));
    assert_eq!(planner.tables().len(), 2);

    planner
        .assign(guest.id, AssignTarget::Table(plain.id))
        .await
        .unwrap();
    let displaced = planner.remove_table(plain.id).await.unwrap();
    assert_eq!(displaced, 1);
    assert_eq!(planner.tables().len(), 1);
}

#[tokio::test]
async fn new_tables_are_validated_and_auto_numbered() {
    let fx = Fixture::new();
    let mut planner = fx.planner().await;

    let err = planner
        .add_table(NewTable {
            name: "   ".to_string(),
            capacity: 8,
            special: false,
        })
        .await
        .unwrap_err();
    assert_eq!(seating_kind(&err), &SeatingErrorKind::EmptyName);

    let err = planner
        .add_table(NewTable {
            name: "Tavolo 1".to_string(),
            capacity: 0,
            special: false,
        })
        .await
        .unwrap_err();
    assert_eq!(seating_kind(&err), &SeatingErrorKind::InvalidCapacity(0));

    let first = planner.add_default_table().await.unwrap();
    assert_eq!(first.name, "Tavolo 1");
    let second = planner.add_default_table().await.unwrap();
    assert_eq!(second.name, "Tavolo 2");
    assert_eq!(second.capacity, 8);
}

#[tokio::test]
async fn default_table_numbering_reuses_freed_numbers() {
    let fx = Fixture::new();
    let mut planner = fx.planner().await;

    let first = planner.add_default_table().await.unwrap();
    planner.add_default_table().await.unwrap();
    planner.remove_table(first.id).await.unwrap();

    let replacement = planner.add_default_table().await.unwrap();
    assert_eq!(replacement.name, "Tavolo 1");
    let next = planner.add_default_table().await.unwrap();
    assert_eq!(next.name, "Tavolo 3");
}

#[tokio::test]
async fn local_chart_migrates_on_first_load() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &["Sam"]).await;
    let member = &guest.members[0];

    let legacy = serde_json::json!([
        {
            "name": "Tavolo 1",
            "capacity": 8,
            "special": true,
            "occupants": [
                {
                    "person_id": guest.id,
                    "is_group_member": false,
                    "owner_guest_id": null,
                    "name": "Ada",
                    "dietary": "vegetarian"
                },
                {
                    "person_id": member.id,
                    "is_group_member": true,
                    "owner_guest_id": guest.id,
                    "name": "Sam",
                    "dietary": null
                }
            ]
        },
        { "name": "Tavolo 2", "capacity": 6, "occupants": [] }
    ]);
    fx.local
        .write(fx.user_id, SEATING_KIND, &legacy.to_string())
        .await
        .unwrap();

    let planner = fx.planner().await;
    assert_eq!(planner.tables().len(), 2);
    let first = &planner.tables()[0];
    assert!(first.special);
    assert!(first.seats(guest.id));
    assert!(first.seats(member.id));
    assert_eq!(
        first.occupants[1].person.owner_guest_id(),
        guest.id
    );

    // The local entry is cleared, so a second load does not re-migrate.
    assert!(fx.local.read(fx.user_id, SEATING_KIND).await.unwrap().is_none());
    let again = fx.planner().await;
    assert_eq!(again.tables().len(), 2);
}

#[tokio::test]
async fn migration_skips_when_remote_tables_exist() {
    let fx = Fixture::new();
    fx.table("Tavolo 1", 8, false).await;
    fx.local
        .write(fx.user_id, SEATING_KIND, "[{\"name\":\"Stale\",\"capacity\":4}]")
        .await
        .unwrap();

    let planner = fx.planner().await;
    assert_eq!(planner.tables().len(), 1);
    assert_eq!(planner.tables()[0].name, "Tavolo 1");
    // Untouched: the remote chart wins and the local copy stays put.
    assert!(fx.local.read(fx.user_id, SEATING_KIND).await.unwrap().is_some());
}

#[tokio::test]
async fn unreadable_local_chart_is_left_in_place() {
    let fx = Fixture::new();
    fx.local
        .write(fx.user_id, SEATING_KIND, "not json")
        .await
        .unwrap();

    let migrated = migrate_local_chart(
        fx.user_id,
        fx.seating.as_ref() as &dyn SeatingRepository,
        fx.local.as_ref() as &dyn LocalStore,
    )
    .await
    .unwrap();
    assert!(!migrated);
    assert!(fx.local.read(fx.user_id, SEATING_KIND).await.unwrap().is_some());
}

#[tokio::test]
async fn stats_aggregate_across_tables() {
    let fx = Fixture::new();
    let guest = fx.guest("Ada", &["Sam"]).await;
    let table = fx.table("Tavolo 1", 8, false).await;
    fx.table("Tavolo 2", 6, false).await;

    let mut planner = fx.planner().await;
    planner.assign_group(guest.id, table.id).await.unwrap();

    let stats = planner.stats();
    assert_eq!(stats.total_tables, 2);
    assert_eq!(stats.total_seats, 14);
    assert_eq!(stats.occupied_seats, 2);
    assert_eq!(stats.available_seats, 12);
    assert!(stats.assigned_guests.contains(&guest.id));
    assert_eq!(
        stats.assigned_members.get(&guest.members[0].id),
        Some(&guest.id)
    );
}
