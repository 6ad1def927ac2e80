//! In-process identity provider.
//!
//! The production deployment fronts a managed identity service behind the
//! [`IdentityProvider`] trait. This implementation keeps accounts and
//! sessions in process memory for local runs and tests; passwords are stored
//! as SHA-256 digests and sessions expire after a fixed lifetime.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use promessa_core::{Credentials, Session};
use promessa_error::{AuthError, AuthErrorKind, PromessaResult};
use promessa_interface::IdentityProvider;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

const SESSION_LIFETIME_HOURS: i64 = 24;

struct Account {
    user_id: Uuid,
    password_hash: [u8; 32],
    metadata: serde_json::Value,
}

/// Accounts and sessions held in process memory.
#[derive(Default)]
pub struct InMemoryIdentity {
    accounts: Mutex<HashMap<String, Account>>,
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemoryIdentity {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    fn hash(password: &str) -> [u8; 32] {
        Sha256::digest(password.as_bytes()).into()
    }

    fn open_session(&self, user_id: Uuid, email: &str) -> Session {
        let session = Session {
            user_id,
            email: email.to_string(),
            access_token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::hours(SESSION_LIFETIME_HOURS),
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(session.access_token.clone(), session.clone());
        session
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentity {
    #[tracing::instrument(skip(self, credentials, metadata))]
    async fn sign_up(
        &self,
        credentials: Credentials,
        metadata: serde_json::Value,
    ) -> PromessaResult<Session> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&credentials.email) {
            return Err(AuthError::new(AuthErrorKind::Provider(format!(
                "account already exists for {}",
                credentials.email
            )))
            .into());
        }
        let user_id = Uuid::new_v4();
        accounts.insert(
            credentials.email.clone(),
            Account {
                user_id,
                password_hash: Self::hash(&credentials.password),
                metadata,
            },
        );
        drop(accounts);
        Ok(self.open_session(user_id, &credentials.email))
    }

    #[tracing::instrument(skip(self, credentials))]
    async fn sign_in(&self, credentials: Credentials) -> PromessaResult<Session> {
        let user_id = {
            let accounts = self.accounts.lock().unwrap();
            let account = accounts
                .get(&credentials.email)
                .ok_or_else(|| AuthError::new(AuthErrorKind::InvalidCredentials))?;
            if account.password_hash != Self::hash(&credentials.password) {
                return Err(AuthError::new(AuthErrorKind::InvalidCredentials).into());
            }
            account.user_id
        };
        Ok(self.open_session(user_id, &credentials.email))
    }

    async fn sign_out(&self, access_token: &str) -> PromessaResult<()> {
        self.sessions.lock().unwrap().remove(access_token);
        Ok(())
    }

    async fn current_session(&self, access_token: &str) -> PromessaResult<Session> {
        self.sessions
            .lock()
            .unwrap()
            .get(access_token)
            .cloned()
            .ok_or_else(|| AuthError::new(AuthErrorKind::InvalidCredentials).into())
    }

    async fn update_metadata(
        &self,
        user_id: Uuid,
        metadata: serde_json::Value,
    ) -> PromessaResult<()> {
        let mut accounts = self.accounts.lock().unwrap();
        for account in accounts.values_mut() {
            if account.user_id == user_id {
                account.metadata = metadata;
                return Ok(());
            }
        }
        Err(AuthError::new(AuthErrorKind::Provider(format!(
            "no account for user {user_id}"
        )))
        .into())
    }
}
