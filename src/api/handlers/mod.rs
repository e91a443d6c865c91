use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::{GatewayClient, GatewayError, StoryDraft};
use crate::api::AppState;
use crate::board::{BoardSnapshot, BurndownPoint, ColumnTasks};
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Map a gateway failure to a client response.
///
/// A malformed attachment is the caller's fault; everything else is the
/// upstream service's. Full errors are logged server-side either way.
fn gateway_error(e: GatewayError) -> (StatusCode, String) {
    match e {
        GatewayError::MalformedAttachment(_) => {
            tracing::warn!("Rejected AI request: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        _ => {
            tracing::error!("AI gateway failure: {}", e);
            (StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

/// Resolve the configured gateway, or tell the client AI is unavailable.
fn gateway(state: &AppState) -> Result<&GatewayClient, (StatusCode, String)> {
    state.gateway.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "AI gateway is not configured".to_string(),
    ))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Board Views
// ============================================================

pub async fn get_board(State(state): State<AppState>) -> Json<BoardSnapshot> {
    Json(state.board.snapshot())
}

pub async fn get_columns(State(state): State<AppState>) -> Json<Vec<ColumnTasks>> {
    Json(state.board.columns())
}

pub async fn get_burndown(State(state): State<AppState>) -> Json<Vec<BurndownPoint>> {
    Json(state.board.burndown())
}

// ============================================================
// Tasks
// ============================================================

pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTaskInput>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, String)> {
    state
        .board
        .add_task(input)
        .map(|t| (StatusCode::CREATED, Json(t)))
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, (StatusCode, String)> {
    state
        .board
        .get_task(id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Task not found".to_string()))
}

/// Replace a task wholesale. An unknown id is a no-op, not an error; the
/// board tolerates stale references from the view layer.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<Task>,
) -> StatusCode {
    state.board.update_task(Task { id, ..input });
    StatusCode::NO_CONTENT
}

pub async fn delete_task(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    state.board.delete_task(id);
    StatusCode::NO_CONTENT
}

/// Body for the drag-and-drop completion call.
#[derive(Debug, Serialize, Deserialize)]
pub struct MoveTaskInput {
    pub column: ColumnId,
}

pub async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<MoveTaskInput>,
) -> StatusCode {
    state.board.move_task(id, input.column);
    StatusCode::NO_CONTENT
}

// ============================================================
// Sprint
// ============================================================

pub async fn get_sprint(State(state): State<AppState>) -> Json<Sprint> {
    Json(state.board.sprint())
}

/// Replace the sprint. Date ordering is validated here, at the boundary;
/// the board itself stores whatever it is given.
pub async fn update_sprint(
    State(state): State<AppState>,
    Json(sprint): Json<Sprint>,
) -> Result<StatusCode, (StatusCode, String)> {
    if sprint.end_date <= sprint.start_date {
        return Err((
            StatusCode::BAD_REQUEST,
            "end_date must be after start_date".to_string(),
        ));
    }
    state.board.update_sprint(sprint);
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Attachments
// ============================================================

pub async fn add_attachment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(attachment): Json<Attachment>,
) -> StatusCode {
    state.board.add_attachment(id, attachment);
    StatusCode::NO_CONTENT
}

pub async fn remove_attachment(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> StatusCode {
    state.board.remove_attachment(id, index);
    StatusCode::NO_CONTENT
}

// ============================================================
// AI
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateStoriesInput {
    pub feature_idea: String,
}

pub async fn generate_stories(
    State(state): State<AppState>,
    Json(input): Json<GenerateStoriesInput>,
) -> Result<Json<Vec<StoryDraft>>, (StatusCode, String)> {
    let gateway = gateway(&state)?;
    gateway
        .generate_user_stories(&input.feature_idea)
        .await
        .map(Json)
        .map_err(gateway_error)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RetrospectiveInput {
    pub went_well: Vec<String>,
    pub could_improve: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RetrospectiveSummary {
    pub summary: String,
}

pub async fn summarize_retrospective(
    State(state): State<AppState>,
    Json(input): Json<RetrospectiveInput>,
) -> Result<Json<RetrospectiveSummary>, (StatusCode, String)> {
    let gateway = gateway(&state)?;
    gateway
        .summarize_retrospective(&input.went_well, &input.could_improve)
        .await
        .map(|summary| Json(RetrospectiveSummary { summary }))
        .map_err(gateway_error)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttachmentAnalysis {
    pub analysis: String,
}

pub async fn analyze_attachments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AttachmentAnalysis>, (StatusCode, String)> {
    let task = state
        .board
        .get_task(id)
        .ok_or((StatusCode::NOT_FOUND, "Task not found".to_string()))?;

    let gateway = gateway(&state)?;
    gateway
        .analyze_task_attachments(&task.title, &task.attachments)
        .await
        .map(|analysis| Json(AttachmentAnalysis { analysis }))
        .map_err(gateway_error)
}
