//! Seating-chart engine for Promessa.
//!
//! One `SeatingPlanner` per user session owns the in-memory table registry
//! and a read-only view of the guest directory, and exposes every seating
//! operation: table CRUD, person and whole-group assignment, derived
//! statistics, and the one-time migration of device-local charts into the
//! remote store.
//!
//! The registry mutates only after the corresponding remote-store call has
//! resolved successfully, so a failed call leaves in-memory state at its
//! pre-call value.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod migration;
mod planner;
mod stats;

pub use migration::{LegacyOccupant, LegacyTable, SEATING_KIND, migrate_local_chart};
pub use planner::{DEFAULT_TABLE_CAPACITY, SeatingPlanner};
pub use stats::SeatingStats;
