//! Automobile Usage API
//!
//! Registro de uso de automóviles por conductores: CRUD de conductores y
//! automóviles, más el servicio de dominio que controla que un conductor
//! tenga como máximo un uso abierto a la vez.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir la aplicación completa (rutas + CORS + estado compartido)
pub fn build_app(state: AppState, config: &EnvironmentConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API de uso de automóviles funcionando correctamente!",
        "status": "ok"
    }))
}
