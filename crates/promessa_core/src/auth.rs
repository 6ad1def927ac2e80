//! Session and role types carried by the identity collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a user participates in the application.
///
/// Carried as a `user_roles` row keyed by user id. A failed lookup falls back
/// to `Couple`; see `RoleRepository::role_for_user` for the caveat.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// The couple planning their wedding
    #[default]
    Couple,
    /// A vendor account
    Vendor,
}

/// Email/password credentials for sign-up and sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// An authenticated session issued by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user
    pub user_id: Uuid,
    /// Account email
    pub email: String,
    /// Bearer token presented on subsequent requests
    pub access_token: String,
    /// Expiry of the access token
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session's token has passed its expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
