//! Checklist routes: tasks and timelines.

use crate::{ApiResult, AppState, CurrentUser};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use promessa_core::{ChecklistProgress, NewTask, NewTimeline, TaskUpdate, Timeline, WeddingTask};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct RenameRequest {
    name: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/progress", get(progress))
        .route(
            "/tasks/:id",
            axum::routing::patch(update_task).delete(delete_task),
        )
        .route("/tasks/:id/toggle", post(toggle_task))
        .route("/timelines", get(list_timelines).post(create_timeline))
        .route(
            "/timelines/:id",
            axum::routing::patch(rename_timeline).delete(delete_timeline),
        )
        .route("/timelines/:id/move-up", post(move_up))
        .route("/timelines/:id/move-down", post(move_down))
}

async fn list_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<WeddingTask>>> {
    Ok(Json(state.checklist(user.user_id()).tasks().await?))
}

async fn progress(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<ChecklistProgress>> {
    Ok(Json(state.checklist(user.user_id()).progress().await?))
}

async fn create_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(task): Json<NewTask>,
) -> ApiResult<(StatusCode, Json<WeddingTask>)> {
    let created = state.checklist(user.user_id()).create_task(task).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(update): Json<TaskUpdate>,
) -> ApiResult<Json<WeddingTask>> {
    Ok(Json(
        state
            .checklist(user.user_id())
            .update_task(task_id, update)
            .await?,
    ))
}

async fn toggle_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<WeddingTask>> {
    Ok(Json(
        state.checklist(user.user_id()).toggle_complete(task_id).await?,
    ))
}

async fn delete_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.checklist(user.user_id()).delete_task(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_timelines(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<Timeline>>> {
    Ok(Json(state.checklist(user.user_id()).timelines().await?))
}

async fn create_timeline(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(timeline): Json<NewTimeline>,
) -> ApiResult<(StatusCode, Json<Timeline>)> {
    let created = state
        .checklist(user.user_id())
        .create_timeline(timeline)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn rename_timeline(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(timeline_id): Path<Uuid>,
    Json(request): Json<RenameRequest>,
) -> ApiResult<Json<Timeline>> {
    Ok(Json(
        state
            .checklist(user.user_id())
            .rename_timeline(timeline_id, &request.name)
            .await?,
    ))
}

async fn move_up(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(timeline_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Timeline>>> {
    Ok(Json(state.checklist(user.user_id()).move_up(timeline_id).await?))
}

async fn move_down(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(timeline_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Timeline>>> {
    Ok(Json(
        state.checklist(user.user_id()).move_down(timeline_id).await?,
    ))
}

async fn delete_timeline(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(timeline_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Timeline>>> {
    Ok(Json(
        state
            .checklist(user.user_id())
            .delete_timeline(timeline_id)
            .await?,
    ))
}
