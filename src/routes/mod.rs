//! Rutas de la API

pub mod automobile_routes;
pub mod automobile_usage_routes;
pub mod driver_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/driver", driver_routes::create_driver_router())
        .nest("/api/automobile", automobile_routes::create_automobile_router())
        .nest(
            "/api/automobile-usage",
            automobile_usage_routes::create_automobile_usage_router(),
        )
}
