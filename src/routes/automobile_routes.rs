use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::automobile_controller::AutomobileController;
use crate::dto::api_response::ApiResponse;
use crate::dto::automobile_dto::{
    AutomobileFilters, AutomobileResponse, CreateAutomobileRequest, UpdateAutomobileRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_automobile_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_automobile))
        .route("/", get(list_automobiles))
        .route("/:id", get(get_automobile))
        .route("/:id", put(update_automobile))
        .route("/:id", delete(delete_automobile))
}

async fn create_automobile(
    State(state): State<AppState>,
    Json(request): Json<CreateAutomobileRequest>,
) -> Result<Json<ApiResponse<AutomobileResponse>>, AppError> {
    let controller = AutomobileController::new(state.automobiles.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_automobiles(
    State(state): State<AppState>,
    Query(filters): Query<AutomobileFilters>,
) -> Result<Json<Vec<AutomobileResponse>>, AppError> {
    let controller = AutomobileController::new(state.automobiles.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_automobile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AutomobileResponse>, AppError> {
    let controller = AutomobileController::new(state.automobiles.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_automobile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAutomobileRequest>,
) -> Result<Json<ApiResponse<AutomobileResponse>>, AppError> {
    let controller = AutomobileController::new(state.automobiles.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_automobile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AutomobileController::new(state.automobiles.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Automóvil eliminado exitosamente"
    })))
}
