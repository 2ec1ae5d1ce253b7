//! Validación de payloads de uso de automóviles
//!
//! Funciones puras sobre el payload crudo (`serde_json::Value`): la capa
//! HTTP todavía no validó la forma del body. Los campos se copian a
//! estructuras tipadas, así que cualquier campo extra del payload queda
//! descartado acá y nunca llega al store.

use serde_json::Value;

use crate::models::{UsageDate, UsagePatch};
use crate::utils::errors::UsageError;

/// Datos de alta ya validados
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationData {
    pub start_date: UsageDate,
    pub driver_id: String,
    pub automobile_id: String,
    pub reason: String,
}

fn non_empty_str<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Validar el payload de alta de un uso.
///
/// `startDate`, `driverId`, `automobileId` y `reason` tienen que estar
/// presentes y no vacíos; recién después se chequea el formato de fecha.
pub fn validate_registration(payload: &Value) -> Result<RegistrationData, UsageError> {
    let start_date = non_empty_str(payload, "startDate").ok_or(UsageError::InvalidUsageData)?;
    let driver_id = non_empty_str(payload, "driverId").ok_or(UsageError::InvalidUsageData)?;
    let automobile_id =
        non_empty_str(payload, "automobileId").ok_or(UsageError::InvalidUsageData)?;
    let reason = non_empty_str(payload, "reason").ok_or(UsageError::InvalidUsageData)?;

    let start_date = start_date
        .parse()
        .map_err(|_| UsageError::InvalidDateFormat)?;

    Ok(RegistrationData {
        start_date,
        driver_id: driver_id.to_string(),
        automobile_id: automobile_id.to_string(),
        reason: reason.to_string(),
    })
}

/// Validar el payload de cierre de un uso.
///
/// La actualización existe únicamente para cerrar un uso: sin un
/// `endDate` con formato válido no hay nada que actualizar, cualquier
/// otro contenido del payload se reporta igual.
pub fn validate_update(payload: &Value) -> Result<UsagePatch, UsageError> {
    let end_date = payload
        .get("endDate")
        .and_then(Value::as_str)
        .ok_or(UsageError::InvalidDateFormat)?;

    let end_date = end_date
        .parse()
        .map_err(|_| UsageError::InvalidDateFormat)?;

    Ok(UsagePatch { end_date })
}
