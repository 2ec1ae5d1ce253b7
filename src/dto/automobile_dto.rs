use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Automobile;

// Request para crear un automóvil
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutomobileRequest {
    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 2, max = 50))]
    pub color: String,
}

// Request para actualizar un automóvil existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutomobileRequest {
    #[validate(length(min = 5, max = 20))]
    pub license_plate: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub color: Option<String>,
}

// Filtros para búsqueda de automóviles
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomobileFilters {
    pub license_plate: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
}

// Response de automóvil
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomobileResponse {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub color: String,
}

impl From<Automobile> for AutomobileResponse {
    fn from(automobile: Automobile) -> Self {
        Self {
            id: automobile.id,
            license_plate: automobile.license_plate,
            brand: automobile.brand,
            color: automobile.color,
        }
    }
}
