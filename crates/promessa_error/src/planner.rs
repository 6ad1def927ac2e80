//! Planner error types covering guests, checklist, budget and vendors.

use uuid::Uuid;

/// Planner error conditions.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum PlannerErrorKind {
    /// Guest does not exist for the current user
    #[display("Guest {} not found", _0)]
    GuestNotFound(Uuid),
    /// Group member does not exist for the current user
    #[display("Group member {} not found", _0)]
    MemberNotFound(Uuid),
    /// Task does not exist for the current user
    #[display("Task {} not found", _0)]
    TaskNotFound(Uuid),
    /// Timeline does not exist for the current user
    #[display("Timeline '{}' not found", _0)]
    TimelineNotFound(String),
    /// Timeline cannot be removed while tasks still reference it
    #[display("Timeline '{}' still has {} task(s) assigned to it", name, task_count)]
    TimelineInUse {
        /// Name of the referenced timeline
        name: String,
        /// Number of tasks still referencing it
        task_count: usize,
    },
    /// Timeline name already taken for this user
    #[display("A timeline named '{}' already exists", _0)]
    DuplicateTimeline(String),
    /// Budget item does not exist for the current user
    #[display("Budget item {} not found", _0)]
    BudgetItemNotFound(Uuid),
    /// Vendor does not exist for the current user
    #[display("Vendor {} not found", _0)]
    VendorNotFound(Uuid),
    /// A required display name was empty
    #[display("{} name must not be empty", _0)]
    EmptyName(String),
    /// Estimated or actual cost was negative
    #[display("Cost must be non-negative, got {}", _0)]
    NegativeCost(f64),
}

/// Planner error with source location tracking.
///
/// # Examples
///
/// ```
/// use promessa_error::{PlannerError, PlannerErrorKind};
///
/// let err = PlannerError::new(PlannerErrorKind::TimelineInUse {
///     name: "Six months before".to_string(),
///     task_count: 3,
/// });
/// assert!(format!("{}", err).contains("3 task(s)"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Planner Error: {} at line {} in {}", kind, line, file)]
pub struct PlannerError {
    /// The kind of error that occurred
    pub kind: PlannerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlannerError {
    /// Create a new planner error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlannerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
