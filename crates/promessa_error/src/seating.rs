//! Seating-chart error types.

use uuid::Uuid;

/// Seating error conditions.
///
/// Validation kinds (`TableFull`, `CapacityBelowOccupancy`, `GroupTooLarge`,
/// `SpecialTableProtected`, `EmptyName`, `InvalidCapacity`) leave all state
/// untouched; not-found kinds are mapped to 404 by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SeatingErrorKind {
    /// Target table does not exist in the registry
    #[display("Table {} not found", _0)]
    TableNotFound(Uuid),
    /// Person id matches no guest or group member
    #[display("Guest or group member {} not found", _0)]
    PersonNotFound(Uuid),
    /// Table is at capacity
    #[display("Table '{}' is full ({} seats)", name, capacity)]
    TableFull {
        /// Display name of the full table
        name: String,
        /// Seat capacity of the table
        capacity: i32,
    },
    /// Requested capacity is below the current occupant count
    #[display(
        "Cannot reduce capacity to {}: table currently seats {} occupants",
        requested,
        occupants
    )]
    CapacityBelowOccupancy {
        /// Capacity requested by the edit
        requested: i32,
        /// Occupants currently seated
        occupants: usize,
    },
    /// Whole-group assignment needs more free seats than the table has
    #[display("Group needs {} seats but table '{}' has {} free", needed, name, free)]
    GroupTooLarge {
        /// Display name of the target table
        name: String,
        /// Seats the group requires
        needed: usize,
        /// Seats currently free
        free: usize,
    },
    /// The couple's table cannot be deleted
    #[display("Table '{}' is reserved for the couple and cannot be deleted", _0)]
    SpecialTableProtected(String),
    /// Table name must not be empty
    #[display("Table name must not be empty")]
    EmptyName,
    /// Capacity must be a positive seat count
    #[display("Capacity must be at least 1, got {}", _0)]
    InvalidCapacity(i32),
}

/// Seating error with source location tracking.
///
/// # Examples
///
/// ```
/// use promessa_error::{SeatingError, SeatingErrorKind};
///
/// let err = SeatingError::new(SeatingErrorKind::TableFull {
///     name: "Tavolo 1".to_string(),
///     capacity: 8,
/// });
/// assert!(format!("{}", err).contains("full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Seating Error: {} at line {} in {}", kind, line, file)]
pub struct SeatingError {
    /// The kind of error that occurred
    pub kind: SeatingErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SeatingError {
    /// Create a new seating error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SeatingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
