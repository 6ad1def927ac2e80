//! Capacity-constrained seating assignment over an in-memory table registry.

use crate::{migrate_local_chart, SeatingStats};
use promessa_core::{
    AssignOutcome, AssignTarget, Guest, NewTable, Occupant, PersonRef, Table, TableUpdate,
};
use promessa_error::{PromessaError, PromessaResult, SeatingError, SeatingErrorKind};
use promessa_interface::{GuestRepository, SeatingRepository};
use promessa_storage::LocalStore;
use std::sync::Arc;
use uuid::Uuid;

/// Default seat count for tables created without an explicit capacity.
pub const DEFAULT_TABLE_CAPACITY: i32 = 8;

#[track_caller]
fn seat_err(kind: SeatingErrorKind) -> PromessaError {
    SeatingError::new(kind).into()
}

/// The seating chart for one user, loaded for the duration of a request.
///
/// Holds the user's tables and guest directory in memory and pushes every
/// mutation through the remote store first; the registry is only updated
/// after the store call has resolved successfully, so a failed call leaves
/// the chart exactly as it was.
pub struct SeatingPlanner {
    user_id: Uuid,
    seating: Arc<dyn SeatingRepository>,
    guests: Arc<dyn GuestRepository>,
    local: Arc<dyn LocalStore>,
    tables: Vec<Table>,
    directory: Vec<Guest>,
}

impl SeatingPlanner {
    /// Load the user's chart from the remote store.
    ///
    /// When the store holds no tables for this user, a device-local chart is
    /// migrated up first (see [`migrate_local_chart`]) and the registry is
    /// reloaded from whatever the migration managed to persist.
    #[tracing::instrument(skip(seating, guests, local))]
    pub async fn load(
        user_id: Uuid,
        seating: Arc<dyn SeatingRepository>,
        guests: Arc<dyn GuestRepository>,
        local: Arc<dyn LocalStore>,
    ) -> PromessaResult<Self> {
        let mut tables = seating.list_tables(user_id).await?;
        if tables.is_empty()
            && migrate_local_chart(user_id, seating.as_ref(), local.as_ref()).await?
        {
            tables = seating.list_tables(user_id).await?;
        }
        let directory = guests.list_guests(user_id).await?;
        Ok(Self {
            user_id,
            seating,
            guests,
            local,
            tables,
            directory,
        })
    }

    /// The current table registry, occupants included.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// The guest directory the registry was loaded against.
    pub fn directory(&self) -> &[Guest] {
        &self.directory
    }

    /// Aggregate occupancy figures for the whole chart.
    pub fn stats(&self) -> SeatingStats {
        SeatingStats::compute(&self.tables)
    }

    /// Seat one person, or clear their seat.
    ///
    /// Any existing assignment is removed first, so re-assigning a seated
    /// person moves them. The `unassigned` sentinel stops after the removal.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn assign(
        &mut self,
        person_id: Uuid,
        target: AssignTarget,
    ) -> PromessaResult<AssignOutcome> {
        let occupant = self.resolve(person_id)?;
        self.unseat(person_id).await?;
        match target {
            AssignTarget::Unassigned => Ok(AssignOutcome::Removed),
            AssignTarget::Table(table_id) => {
                self.seat(occupant, table_id).await?;
                Ok(AssignOutcome::Assigned { table_id })
            }
        }
    }

    /// Seat a guest together with every group member at one table.
    ///
    /// Party members already seated at the target stay put; everyone else is
    /// moved there. The whole party is admitted or rejected as a unit, so a
    /// table without room for all movers is left untouched.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn assign_group(
        &mut self,
        guest_id: Uuid,
        table_id: Uuid,
    ) -> PromessaResult<AssignOutcome> {
        let guest = self
            .directory
            .iter()
            .find(|g| g.id == guest_id)
            .ok_or_else(|| seat_err(SeatingErrorKind::PersonNotFound(guest_id)))?;

        let table = self
            .tables
            .iter()
            .find(|t| t.id == table_id)
            .ok_or_else(|| seat_err(SeatingErrorKind::TableNotFound(table_id)))?;

        let mut movers = Vec::with_capacity(guest.party_size());
        if !table.seats(guest_id) {
            movers.push(Occupant {
                person: PersonRef::Guest { id: guest_id },
                name: guest.name.clone(),
                dietary: guest.dietary.clone(),
            });
        }
        for member in &guest.members {
            if !table.seats(member.id) {
                movers.push(Occupant {
                    person: PersonRef::Member {
                        id: member.id,
                        guest_id,
                    },
                    name: member.name.clone(),
                    dietary: member.dietary.clone(),
                });
            }
        }

        let free = table.free_seats();
        if movers.len() > free {
            return Err(seat_err(SeatingErrorKind::GroupTooLarge {
                name: table.name.clone(),
                needed: movers.len(),
                free,
            }));
        }

        for occupant in movers {
            let person_id = occupant.person.id();
            self.unseat(person_id).await?;
            self.seat(occupant, table_id).await?;
        }
        Ok(AssignOutcome::Assigned { table_id })
    }

    /// Create a table.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn add_table(&mut self, table: NewTable) -> PromessaResult<Table> {
        let name = table.name.trim();
        if name.is_empty() {
            return Err(seat_err(SeatingErrorKind::EmptyName));
        }
        if table.capacity < 1 {
            return Err(seat_err(SeatingErrorKind::InvalidCapacity(table.capacity)));
        }
        let created = self
            .seating
            .insert_table(
                self.user_id,
                NewTable {
                    name: name.to_string(),
                    ..table
                },
            )
            .await?;
        self.tables.push(created.clone());
        Ok(created)
    }

    /// Create a table with an auto-numbered name and the default capacity.
    ///
    /// Names count up from `Tavolo 1`, skipping numbers already in use.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn add_default_table(&mut self) -> PromessaResult<Table> {
        let mut n = 1;
        while self.tables.iter().any(|t| t.name == format!("Tavolo {n}")) {
            n += 1;
        }
        self.add_table(NewTable {
            name: format!("Tavolo {n}"),
            capacity: DEFAULT_TABLE_CAPACITY,
            special: false,
        })
        .await
    }

    /// Rename a table or change its capacity.
    ///
    /// Capacity can never drop below the current occupant count; seated
    /// people are not displaced by an edit.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn update_table(
        &mut self,
        table_id: Uuid,
        update: TableUpdate,
    ) -> PromessaResult<Table> {
        let index = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| seat_err(SeatingErrorKind::TableNotFound(table_id)))?;
        let table = &self.tables[index];

        let name = match update.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(seat_err(SeatingErrorKind::EmptyName));
                }
                name
            }
            None => table.name.clone(),
        };
        let capacity = update.capacity.unwrap_or(table.capacity);
        if capacity < 1 {
            return Err(seat_err(SeatingErrorKind::InvalidCapacity(capacity)));
        }
        if (capacity as usize) < table.occupants.len() {
            return Err(seat_err(SeatingErrorKind::CapacityBelowOccupancy {
                requested: capacity,
                occupants: table.occupants.len(),
            }));
        }

        self.seating
            .update_table(self.user_id, table_id, &name, capacity)
            .await?;
        let table = &mut self.tables[index];
        table.name = name;
        table.capacity = capacity;
        Ok(table.clone())
    }

    /// Delete a table, returning how many occupants it displaced.
    ///
    /// The couple's table is protected. Displaced people become unassigned;
    /// the store cascades their assignment rows away.
    #[tracing::instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn remove_table(&mut self, table_id: Uuid) -> PromessaResult<usize> {
        let index = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| seat_err(SeatingErrorKind::TableNotFound(table_id)))?;
        if self.tables[index].special {
            return Err(seat_err(SeatingErrorKind::SpecialTableProtected(
                self.tables[index].name.clone(),
            )));
        }
        self.seating.delete_table(self.user_id, table_id).await?;
        let removed = self.tables.remove(index);
        Ok(removed.occupants.len())
    }

    /// Resolve a person id to an occupant payload via the guest directory.
    fn resolve(&self, person_id: Uuid) -> PromessaResult<Occupant> {
        for guest in &self.directory {
            if guest.id == person_id {
                return Ok(Occupant {
                    person: PersonRef::Guest { id: person_id },
                    name: guest.name.clone(),
                    dietary: guest.dietary.clone(),
                });
            }
            if let Some(member) = guest.member(person_id) {
                return Ok(Occupant {
                    person: PersonRef::Member {
                        id: member.id,
                        guest_id: guest.id,
                    },
                    name: member.name.clone(),
                    dietary: member.dietary.clone(),
                });
            }
        }
        Err(seat_err(SeatingErrorKind::PersonNotFound(person_id)))
    }

    /// Remove any current assignment for a person, store first.
    async fn unseat(&mut self, person_id: Uuid) -> PromessaResult<()> {
        self.seating
            .delete_assignment(self.user_id, person_id)
            .await?;
        for table in &mut self.tables {
            table.occupants.retain(|o| o.person.id() != person_id);
        }
        Ok(())
    }

    /// Seat an occupant at a table, store first. The caller has already
    /// cleared any previous assignment.
    async fn seat(&mut self, occupant: Occupant, table_id: Uuid) -> PromessaResult<()> {
        let index = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| seat_err(SeatingErrorKind::TableNotFound(table_id)))?;
        let table = &self.tables[index];
        if table.is_full() {
            return Err(seat_err(SeatingErrorKind::TableFull {
                name: table.name.clone(),
                capacity: table.capacity,
            }));
        }
        self.seating
            .insert_assignment(self.user_id, table_id, &occupant)
            .await?;
        self.tables[index].occupants.push(occupant);
        Ok(())
    }

    /// The guest repository the planner was loaded with.
    pub fn guest_repository(&self) -> &Arc<dyn GuestRepository> {
        &self.guests
    }

    /// The local store the planner was loaded with.
    pub fn local_store(&self) -> &Arc<dyn LocalStore> {
        &self.local
    }
}

impl std::fmt::Debug for SeatingPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingPlanner")
            .field("user_id", &self.user_id)
            .field("tables", &self.tables.len())
            .field("guests", &self.directory.len())
            .finish()
    }
}
