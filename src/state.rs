//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::repositories::automobile_repository::AutomobileRepository;
use crate::repositories::automobile_usage_repository::AutomobileUsageRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::services::automobile_usage_service::AutomobileUsageService;

#[derive(Clone)]
pub struct AppState {
    pub drivers: DriverRepository,
    pub automobiles: AutomobileRepository,
    pub usages: Arc<AutomobileUsageService>,
}

impl AppState {
    pub fn new() -> Self {
        let drivers = DriverRepository::new();
        let automobiles = AutomobileRepository::new();
        let store = AutomobileUsageRepository::new();

        // El servicio de uso consume los repositorios a través de sus traits:
        // el store de usos y los lookups de conductor/automóvil.
        let usages = Arc::new(AutomobileUsageService::new(
            Arc::new(store),
            Arc::new(drivers.clone()),
            Arc::new(automobiles.clone()),
        ));

        Self {
            drivers,
            automobiles,
            usages,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
