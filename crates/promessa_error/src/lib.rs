//! Error types for the Promessa library.
//!
//! This crate provides the foundation error types used throughout the Promessa
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use promessa_error::{PromessaResult, ConfigError};
//!
//! fn read_setting() -> PromessaResult<String> {
//!     Err(ConfigError::new("DATABASE_URL not set"))?
//! }
//!
//! match read_setting() {
//!     Ok(value) => println!("Got: {}", value),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod planner;
mod seating;
mod server;
mod storage;

pub use auth::{AuthError, AuthErrorKind};
pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{PromessaError, PromessaErrorKind, PromessaResult};
pub use planner::{PlannerError, PlannerErrorKind};
pub use seating::{SeatingError, SeatingErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
