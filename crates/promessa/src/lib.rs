//! Promessa - Wedding Planner Backend
//!
//! Promessa is the backend for a consumer wedding-planning application:
//! guest list with group members and RSVPs, capacity-checked seating charts,
//! a timeline-bucketed checklist, budget tracking and a vendor book, all
//! scoped per authenticated user.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use promessa::{AssignTarget, SeatingPlanner};
//! use std::sync::Arc;
//!
//! # async fn example(
//! #     user_id: uuid::Uuid,
//! #     seating: Arc<dyn promessa::SeatingRepository>,
//! #     guests: Arc<dyn promessa::GuestRepository>,
//! #     local: Arc<dyn promessa::LocalStore>,
//! # ) -> promessa::PromessaResult<()> {
//! let mut planner = SeatingPlanner::load(user_id, seating, guests, local).await?;
//! let table = planner.add_default_table().await?;
//! let guest_id = planner.directory()[0].id;
//! planner.assign(guest_id, AssignTarget::Table(table.id)).await?;
//! println!("{} seats free", planner.stats().available_seats);
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `database` - PostgreSQL persistence for every repository trait
//! - `server` - axum HTTP API surface
//!
//! # Architecture
//!
//! Promessa is organized as a workspace with focused crates:
//!
//! - `promessa_error` - Error types with source-location tracking
//! - `promessa_core` - Domain types (Guest, Table, WeddingTask, ...)
//! - `promessa_interface` - Repository and identity-provider traits
//! - `promessa_storage` - Device-local fallback store
//! - `promessa_database` - Diesel/PostgreSQL repositories
//! - `promessa_seating` - Seating planner, statistics and chart migration
//! - `promessa_planner` - Guest, checklist, budget and vendor services
//! - `promessa_server` - HTTP API server

#![forbid(unsafe_code)]

pub use promessa_core::*;
pub use promessa_error::*;
pub use promessa_interface::*;
pub use promessa_planner::*;
pub use promessa_seating::*;
pub use promessa_storage::*;

#[cfg(feature = "database")]
pub use promessa_database::*;

#[cfg(feature = "server")]
pub use promessa_server::*;
