//! Modelo de Driver

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conductor registrado en el sistema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
}
