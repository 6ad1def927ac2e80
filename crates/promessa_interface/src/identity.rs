//! Identity collaborator contract.

use async_trait::async_trait;
use promessa_core::{Credentials, Session};
use promessa_error::PromessaResult;
use uuid::Uuid;

/// The external identity provider: account lifecycle and session lookup.
///
/// Session refresh housekeeping is owned by the provider itself; this
/// interface only validates what it is handed.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account and open a session for it.
    async fn sign_up(
        &self,
        credentials: Credentials,
        metadata: serde_json::Value,
    ) -> PromessaResult<Session>;

    /// Open a session for an existing account.
    async fn sign_in(&self, credentials: Credentials) -> PromessaResult<Session>;

    /// Invalidate the session behind an access token.
    async fn sign_out(&self, access_token: &str) -> PromessaResult<()>;

    /// Resolve an access token to its session, failing on unknown or expired
    /// tokens.
    async fn current_session(&self, access_token: &str) -> PromessaResult<Session>;

    /// Update profile metadata for a user.
    async fn update_metadata(
        &self,
        user_id: Uuid,
        metadata: serde_json::Value,
    ) -> PromessaResult<()>;
}
