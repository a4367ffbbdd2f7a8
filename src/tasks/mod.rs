pub mod store;
pub mod types;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::shared::error::ApiError;
use crate::shared::state::AppState;

pub use store::TaskStore;
pub use types::{
    CreateTaskRequest, DeleteResponse, Task, TaskListResponse, TaskResponse, UpdateTaskRequest,
};

/// Handler for listing all tasks
pub async fn handle_task_list(State(state): State<Arc<AppState>>) -> Json<TaskListResponse> {
    let tasks = state.task_store.list().await;
    Json(TaskListResponse { tasks })
}

/// Handler for task creation
pub async fn handle_task_create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> (StatusCode, Json<TaskResponse>) {
    let task = state.task_store.create(payload).await;
    (StatusCode::CREATED, Json(TaskResponse { task }))
}

/// Handler for task update. Only `completed` can change.
pub async fn handle_task_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    match state.task_store.set_completed(id, payload.completed).await {
        Some(task) => Ok(Json(TaskResponse { task })),
        None => Err(ApiError::TaskNotFound),
    }
}

/// Handler for task deletion. Reports success whether or not the id existed.
pub async fn handle_task_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Json<DeleteResponse> {
    state.task_store.remove(id).await;
    Json(DeleteResponse {
        message: "Task deleted".to_string(),
    })
}

/// Configure task store routes
pub fn configure_task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/tasks",
            get(handle_task_list).post(handle_task_create),
        )
        .route(
            "/api/tasks/{id}",
            put(handle_task_update).delete(handle_task_delete),
        )
}
