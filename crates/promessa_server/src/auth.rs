//! Bearer-token session extraction.

use crate::{ApiError, AppState};
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use promessa_core::Session;
use promessa_error::{AuthError, AuthErrorKind};
use uuid::Uuid;

/// The authenticated caller, resolved from the `Authorization: Bearer` header
/// through the identity collaborator.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The session behind the presented token
    pub session: Session,
}

impl CurrentUser {
    /// The authenticated user's id.
    pub fn user_id(&self) -> Uuid {
        self.session.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| auth_err(AuthErrorKind::MissingCredentials))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| auth_err(AuthErrorKind::MissingCredentials))?;
        let session = state.identity.current_session(token).await?;
        if session.is_expired() {
            return Err(auth_err(AuthErrorKind::SessionExpired));
        }
        Ok(Self { session })
    }
}

#[track_caller]
fn auth_err(kind: AuthErrorKind) -> ApiError {
    promessa_error::PromessaError::from(AuthError::new(kind)).into()
}
