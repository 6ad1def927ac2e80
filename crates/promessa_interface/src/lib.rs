//! Trait definitions for the Promessa wedding planner.
//!
//! This crate defines the data contracts of the two external collaborators:
//! the remote structured store (one repository trait per entity family) and
//! the identity provider. Services depend on these traits; the Diesel
//! implementations live in `promessa_database`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod budget;
mod checklist;
mod guests;
mod identity;
mod roles;
mod seating;
mod vendors;

pub use budget::BudgetRepository;
pub use checklist::{TaskRepository, TimelineRepository};
pub use guests::GuestRepository;
pub use identity::IdentityProvider;
pub use roles::RoleRepository;
pub use seating::SeatingRepository;
pub use vendors::VendorRepository;
