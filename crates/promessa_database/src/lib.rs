//! PostgreSQL integration for Promessa.
//!
//! This crate provides the Diesel schema, row models, and repository
//! implementations backing the data contracts in `promessa_interface`.
//!
//! # Example
//!
//! ```rust,ignore
//! use promessa_database::{PostgresGuestRepository, establish_connection};
//! use promessa_interface::GuestRepository;
//! use std::sync::Arc;
//! use tokio::sync::Mutex;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = Arc::new(Mutex::new(establish_connection()?));
//! let repo = PostgresGuestRepository::from_arc(conn);
//! let guests = repo.list_guests(user_id).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod budget_repository;
mod checklist_repository;
mod connection;
mod guest_repository;
mod role_repository;
mod rows;
mod seating_repository;
mod vendor_repository;

pub mod schema;

pub use budget_repository::PostgresBudgetRepository;
pub use checklist_repository::{PostgresTaskRepository, PostgresTimelineRepository};
pub use connection::{establish_connection, establish_connection_to, run_migrations};
pub use guest_repository::PostgresGuestRepository;
pub use role_repository::PostgresRoleRepository;
pub use seating_repository::PostgresSeatingRepository;
pub use vendor_repository::PostgresVendorRepository;

pub use diesel::pg::PgConnection;
