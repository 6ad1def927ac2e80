//! Seating chart routes.
//!
//! Every request loads a fresh [`promessa_seating::SeatingPlanner`] for the
//! caller, which also runs the one-time local-chart migration when the remote
//! store is still empty for them.

use crate::{ApiResult, AppState, CurrentUser};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use promessa_core::{AssignOutcome, AssignTarget, NewTable, Table, TableUpdate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct AssignRequest {
    person_id: Uuid,
    target: AssignTarget,
}

#[derive(Debug, Deserialize)]
struct AssignGroupRequest {
    guest_id: Uuid,
    table_id: Uuid,
}

#[derive(Debug, Serialize)]
struct ChartResponse {
    tables: Vec<Table>,
    stats: promessa_seating::SeatingStats,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/seating", get(chart))
        .route("/seating/tables", post(add_table))
        .route("/seating/tables/default", post(add_default_table))
        .route(
            "/seating/tables/:id",
            axum::routing::patch(update_table).delete(remove_table),
        )
        .route("/seating/assignments", post(assign))
        .route("/seating/assignments/group", post(assign_group))
}

async fn chart(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Json<ChartResponse>> {
    let planner = state.seating_planner(user.user_id()).await?;
    Ok(Json(ChartResponse {
        stats: planner.stats(),
        tables: planner.tables().to_vec(),
    }))
}

async fn add_table(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(table): Json<NewTable>,
) -> ApiResult<(StatusCode, Json<Table>)> {
    let mut planner = state.seating_planner(user.user_id()).await?;
    let created = planner.add_table(table).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn add_default_table(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<(StatusCode, Json<Table>)> {
    let mut planner = state.seating_planner(user.user_id()).await?;
    let created = planner.add_default_table().await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_table(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(table_id): Path<Uuid>,
    Json(update): Json<TableUpdate>,
) -> ApiResult<Json<Table>> {
    let mut planner = state.seating_planner(user.user_id()).await?;
    Ok(Json(planner.update_table(table_id, update).await?))
}

async fn remove_table(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(table_id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let mut planner = state.seating_planner(user.user_id()).await?;
    let displaced = planner.remove_table(table_id).await?;
    Ok(Json(json!({ "displaced": displaced })))
}

async fn assign(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<AssignRequest>,
) -> ApiResult<Json<AssignOutcome>> {
    let mut planner = state.seating_planner(user.user_id()).await?;
    Ok(Json(
        planner.assign(request.person_id, request.target).await?,
    ))
}

async fn assign_group(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<AssignGroupRequest>,
) -> ApiResult<Json<AssignOutcome>> {
    let mut planner = state.seating_planner(user.user_id()).await?;
    Ok(Json(
        planner
            .assign_group(request.guest_id, request.table_id)
            .await?,
    ))
}
