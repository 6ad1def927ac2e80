//! Account and session routes.

use crate::{ApiResult, AppState, CurrentUser};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post, put};
use axum::Router;
use promessa_core::{Credentials, Role, Session};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct SignUpRequest {
    email: String,
    password: String,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    metadata: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RoleRequest {
    role: Role,
}

#[derive(Debug, Deserialize)]
struct MetadataRequest {
    metadata: serde_json::Value,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in))
        .route("/auth/signout", post(sign_out))
        .route("/auth/session", get(current_session))
        .route("/account/role", get(get_role).put(set_role))
        .route("/account/metadata", put(set_metadata))
}

async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> ApiResult<(StatusCode, Json<Session>)> {
    let credentials = Credentials {
        email: request.email,
        password: request.password,
    };
    let session = state
        .identity
        .sign_up(credentials, request.metadata)
        .await?;
    // The role row is best effort; the reader defaults to couple anyway.
    if let Some(role) = request.role {
        state.roles.set_role(session.user_id, role).await?;
    }
    Ok((StatusCode::CREATED, Json(session)))
}

async fn sign_in(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<Json<Session>> {
    Ok(Json(state.identity.sign_in(credentials).await?))
}

async fn sign_out(State(state): State<AppState>, user: CurrentUser) -> ApiResult<StatusCode> {
    state.identity.sign_out(&user.session.access_token).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn current_session(user: CurrentUser) -> Json<Session> {
    Json(user.session)
}

async fn get_role(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<serde_json::Value>> {
    let role = state.roles.role_for_user(user.user_id()).await?;
    Ok(Json(json!({ "role": role })))
}

async fn set_role(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<RoleRequest>,
) -> ApiResult<StatusCode> {
    state.roles.set_role(user.user_id(), request.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_metadata(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<MetadataRequest>,
) -> ApiResult<StatusCode> {
    state
        .identity
        .update_metadata(user.user_id(), request.metadata)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
