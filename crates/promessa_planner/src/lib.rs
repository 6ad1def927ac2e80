//! Planning services for Promessa: guests, checklist, budget and vendors.
//!
//! Each service wraps a repository from `promessa_interface`, adds the
//! validation the store cannot express (non-empty names, non-negative costs,
//! referential checks between tasks and timelines) and derives the aggregate
//! views the client renders (completion progress, budget summary).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod budget;
mod checklist;
mod guests;
mod vendors;

pub use budget::BudgetService;
pub use checklist::ChecklistService;
pub use guests::GuestDirectory;
pub use vendors::VendorService;

use promessa_error::{PlannerError, PlannerErrorKind, PromessaError};

#[track_caller]
pub(crate) fn plan_err(kind: PlannerErrorKind) -> PromessaError {
    PlannerError::new(kind).into()
}

/// Reject an empty or whitespace-only display name.
pub(crate) fn require_name(what: &str, name: &str) -> Result<(), PromessaError> {
    if name.trim().is_empty() {
        Err(plan_err(PlannerErrorKind::EmptyName(what.to_string())))
    } else {
        Ok(())
    }
}

/// Reject a negative cost figure.
pub(crate) fn require_non_negative(cost: f64) -> Result<(), PromessaError> {
    if cost < 0.0 {
        Err(plan_err(PlannerErrorKind::NegativeCost(cost)))
    } else {
        Ok(())
    }
}
