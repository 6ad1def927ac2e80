//! One-time migration of device-local seating charts into the remote store.
//!
//! The pre-backend client persisted the whole chart on the device. When the
//! remote store reports zero tables for a user, this routine copies the
//! local chart up, best effort: individual row failures are logged and
//! skipped, nothing is rolled back, nothing is retried.

use promessa_core::{NewTable, Occupant, PersonRef};
use promessa_error::PromessaResult;
use promessa_interface::SeatingRepository;
use promessa_storage::LocalStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry kind under which the chart is stored locally.
pub const SEATING_KIND: &str = "seating";

/// An occupant as the legacy local format stored it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyOccupant {
    /// Guest or group-member id
    pub person_id: Uuid,
    /// Whether `person_id` names a group member
    #[serde(default)]
    pub is_group_member: bool,
    /// Owning guest, present for group members
    pub owner_guest_id: Option<Uuid>,
    /// Denormalized display name
    pub name: String,
    /// Denormalized dietary text
    pub dietary: Option<String>,
}

/// A table as the legacy local format stored it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyTable {
    /// Display name
    pub name: String,
    /// Seat capacity
    pub capacity: i32,
    /// Couple's table flag
    #[serde(default)]
    pub special: bool,
    /// Seated occupants
    #[serde(default)]
    pub occupants: Vec<LegacyOccupant>,
}

impl LegacyOccupant {
    fn person(&self) -> Option<PersonRef> {
        if self.is_group_member {
            let guest_id = self.owner_guest_id?;
            Some(PersonRef::Member {
                id: self.person_id,
                guest_id,
            })
        } else {
            Some(PersonRef::Guest { id: self.person_id })
        }
    }
}

/// Copy a locally saved chart into the remote store.
///
/// Returns `true` when a local chart was found and migrated (the caller
/// should reload the registry from the remote store), `false` when there was
/// nothing to migrate. The local entry is cleared only after the chart has
/// been walked; a chart that fails to parse is left in place.
#[tracing::instrument(skip(repo, local))]
pub async fn migrate_local_chart(
    user_id: Uuid,
    repo: &dyn SeatingRepository,
    local: &dyn LocalStore,
) -> PromessaResult<bool> {
    let Some(payload) = local.read(user_id, SEATING_KIND).await? else {
        return Ok(false);
    };

    let chart: Vec<LegacyTable> = match serde_json::from_str(&payload) {
        Ok(chart) => chart,
        Err(e) => {
            tracing::warn!(%user_id, error = %e, "Local seating chart is unreadable, skipping migration");
            return Ok(false);
        }
    };

    tracing::info!(%user_id, tables = chart.len(), "Migrating local seating chart");

    for legacy in chart {
        let table = match repo
            .insert_table(
                user_id,
                NewTable {
                    name: legacy.name.clone(),
                    capacity: legacy.capacity,
                    special: legacy.special,
                },
            )
            .await
        {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(table = %legacy.name, error = %e, "Skipping table that failed to migrate");
                continue;
            }
        };

        for legacy_occupant in legacy.occupants {
            let Some(person) = legacy_occupant.person() else {
                tracing::warn!(
                    person = %legacy_occupant.person_id,
                    "Skipping group member with no owning guest recorded"
                );
                continue;
            };
            let occupant = Occupant {
                person,
                name: legacy_occupant.name,
                dietary: legacy_occupant.dietary,
            };
            if let Err(e) = repo.insert_assignment(user_id, table.id, &occupant).await {
                tracing::warn!(
                    table = %table.name,
                    person = %occupant.person.id(),
                    error = %e,
                    "Skipping assignment that failed to migrate"
                );
            }
        }
    }

    local.delete(user_id, SEATING_KIND).await?;
    Ok(true)
}
