//! HTTP API for Promessa.
//!
//! Exposes guests, seating, checklist, budget, vendor and account routes over
//! axum. Requests authenticate with a bearer token resolved through the
//! [`promessa_interface::IdentityProvider`] collaborator; every handler is
//! scoped to the authenticated user.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod error;
mod identity;
mod routes;
mod server;
mod state;

pub use auth::CurrentUser;
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use identity::InMemoryIdentity;
pub use routes::create_router;
pub use server::serve;
pub use state::AppState;
