//! Modelo de Automobile

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Automóvil registrado en el sistema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Automobile {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub color: String,
}
