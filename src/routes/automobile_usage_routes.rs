use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;

use crate::dto::automobile_usage_dto::UsageEnvelope;
use crate::models::AutomobileUsage;
use crate::state::AppState;
use crate::utils::errors::UsageError;

pub fn create_automobile_usage_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_usages).post(register_usage))
        .route("/:id", put(update_usage))
}

async fn list_usages(State(state): State<AppState>) -> Json<UsageEnvelope<Vec<AutomobileUsage>>> {
    Json(UsageEnvelope::new(state.usages.get_all().await))
}

// El payload llega crudo: la validación de forma es del servicio, no del
// extractor, así que cualquier JSON objeto es aceptado en esta capa.
async fn register_usage(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<UsageEnvelope<AutomobileUsage>>, UsageError> {
    let usage = state.usages.register(&payload).await?;
    Ok(Json(UsageEnvelope::new(usage)))
}

async fn update_usage(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<UsageEnvelope<AutomobileUsage>>, UsageError> {
    let usage = state.usages.update(&id, &payload).await?;
    Ok(Json(UsageEnvelope::new(usage)))
}
