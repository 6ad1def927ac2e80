//! Core data types for the Promessa wedding planner.
//!
//! This crate provides the foundation data types used across all Promessa
//! interfaces: guests and their group members, seating tables and occupants,
//! checklist tasks and timelines, budget entries, vendors, and sessions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod budget;
mod checklist;
mod guest;
mod seating;
mod telemetry;
mod vendor;

pub use auth::{Credentials, Role, Session};
pub use budget::{BudgetItem, BudgetItemUpdate, BudgetSettings, BudgetSummary, NewBudgetItem};
pub use checklist::{
    ChecklistProgress, NewTask, NewTimeline, TaskUpdate, Timeline, WeddingTask,
};
pub use guest::{Guest, GroupMember, GuestUpdate, NewGroupMember, NewGuest, RsvpStatus};
pub use seating::{
    AssignOutcome, AssignTarget, NewTable, Occupant, PersonRef, Table, TableUpdate,
};
pub use telemetry::init_telemetry;
pub use vendor::{NewVendor, Vendor, VendorUpdate};
