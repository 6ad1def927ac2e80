//! Guest directory routes.

use crate::{ApiResult, AppState, CurrentUser};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use promessa_core::{GroupMember, Guest, GuestUpdate, NewGroupMember, NewGuest};
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/guests", get(list).post(create))
        .route("/guests/:id", get(fetch).patch(update).delete(remove))
        .route("/guests/:id/members", post(add_member))
        .route("/members/:id", delete(remove_member))
}

async fn list(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Json<Vec<Guest>>> {
    Ok(Json(state.guest_directory(user.user_id()).guests().await?))
}

async fn fetch(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(guest_id): Path<Uuid>,
) -> ApiResult<Json<Guest>> {
    Ok(Json(
        state.guest_directory(user.user_id()).guest(guest_id).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(guest): Json<NewGuest>,
) -> ApiResult<(StatusCode, Json<Guest>)> {
    let created = state.guest_directory(user.user_id()).create(guest).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(guest_id): Path<Uuid>,
    Json(update): Json<GuestUpdate>,
) -> ApiResult<Json<Guest>> {
    Ok(Json(
        state
            .guest_directory(user.user_id())
            .update(guest_id, update)
            .await?,
    ))
}

async fn remove(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(guest_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.guest_directory(user.user_id()).delete(guest_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_member(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(guest_id): Path<Uuid>,
    Json(member): Json<NewGroupMember>,
) -> ApiResult<(StatusCode, Json<GroupMember>)> {
    let created = state
        .guest_directory(user.user_id())
        .add_member(guest_id, member)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn remove_member(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(member_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .guest_directory(user.user_id())
        .remove_member(member_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
