mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::ai::GatewayClient;
use crate::board::Board;

pub use handlers::{
    AttachmentAnalysis, GenerateStoriesInput, MoveTaskInput, RetrospectiveInput,
    RetrospectiveSummary,
};

/// Shared state for the API: the board plus the optional AI gateway.
#[derive(Clone)]
pub struct AppState {
    pub board: Board,
    pub gateway: Option<GatewayClient>,
}

pub fn create_router(board: Board, gateway: Option<GatewayClient>) -> Router {
    let api = Router::new()
        // Board views
        .route("/board", get(handlers::get_board))
        .route("/board/columns", get(handlers::get_columns))
        .route("/board/burndown", get(handlers::get_burndown))
        // Tasks
        .route("/tasks", post(handlers::create_task))
        .route("/tasks/{id}", get(handlers::get_task))
        .route("/tasks/{id}", put(handlers::update_task))
        .route("/tasks/{id}", delete(handlers::delete_task))
        .route("/tasks/{id}/move", post(handlers::move_task))
        .route("/tasks/{id}/attachments", post(handlers::add_attachment))
        .route("/tasks/{id}/attachments/{index}", delete(handlers::remove_attachment))
        .route("/tasks/{id}/attachments/analysis", post(handlers::analyze_attachments))
        // Sprint
        .route("/sprint", get(handlers::get_sprint))
        .route("/sprint", put(handlers::update_sprint))
        // AI
        .route("/ai/stories", post(handlers::generate_stories))
        .route("/ai/retrospective", post(handlers::summarize_retrospective))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { board, gateway })
}
