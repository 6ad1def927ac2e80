//! Budget routes.

use crate::{ApiResult, AppState, CurrentUser};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use promessa_core::{BudgetItem, BudgetItemUpdate, BudgetSettings, BudgetSummary, NewBudgetItem};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct SettingsRequest {
    total_budget: f64,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/budget/items", get(list_items).post(create_item))
        .route(
            "/budget/items/:id",
            axum::routing::patch(update_item).delete(delete_item),
        )
        .route("/budget/settings", get(get_settings).put(put_settings))
        .route("/budget/summary", get(summary))
}

async fn list_items(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<BudgetItem>>> {
    Ok(Json(state.budget(user.user_id()).items().await?))
}

async fn create_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(item): Json<NewBudgetItem>,
) -> ApiResult<(StatusCode, Json<BudgetItem>)> {
    let created = state.budget(user.user_id()).create_item(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(item_id): Path<Uuid>,
    Json(update): Json<BudgetItemUpdate>,
) -> ApiResult<Json<BudgetItem>> {
    Ok(Json(
        state
            .budget(user.user_id())
            .update_item(item_id, update)
            .await?,
    ))
}

async fn delete_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.budget(user.user_id()).delete_item(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_settings(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<BudgetSettings>> {
    Ok(Json(state.budget(user.user_id()).settings().await?))
}

async fn put_settings(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<SettingsRequest>,
) -> ApiResult<Json<BudgetSettings>> {
    Ok(Json(
        state
            .budget(user.user_id())
            .set_total_budget(request.total_budget)
            .await?,
    ))
}

async fn summary(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<BudgetSummary>> {
    Ok(Json(state.budget(user.user_id()).summary().await?))
}
