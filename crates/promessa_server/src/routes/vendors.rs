//! Vendor routes.

use crate::{ApiResult, AppState, CurrentUser};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use promessa_core::{NewVendor, Vendor, VendorUpdate};
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vendors", get(list).post(create))
        .route(
            "/vendors/:id",
            axum::routing::patch(update).delete(remove),
        )
}

async fn list(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Json<Vec<Vendor>>> {
    Ok(Json(state.vendor_book(user.user_id()).vendors().await?))
}

async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(vendor): Json<NewVendor>,
) -> ApiResult<(StatusCode, Json<Vendor>)> {
    let created = state.vendor_book(user.user_id()).create(vendor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(vendor_id): Path<Uuid>,
    Json(update): Json<VendorUpdate>,
) -> ApiResult<Json<Vendor>> {
    Ok(Json(
        state
            .vendor_book(user.user_id())
            .update(vendor_id, update)
            .await?,
    ))
}

async fn remove(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(vendor_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.vendor_book(user.user_id()).delete(vendor_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
