//! Modelo de AutomobileUsage
//!
//! Un registro de uso representa la ocupación de un automóvil por un
//! conductor durante un intervalo. El registro guarda snapshots del
//! conductor y del automóvil tomados al momento del alta: renombrar o
//! eliminar el conductor después no modifica los usos ya registrados.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

lazy_static! {
    static ref USAGE_DATE_RE: Regex = Regex::new(r"^(\d{2})/(\d{2})/(\d{2})$").unwrap();
}

/// Fecha de calendario en formato `DD/MM/YY`.
///
/// El año de dos dígitos se interpreta siempre en el siglo 2000–2099
/// (`23` → 2023). La validación acepta cualquier valor que cumpla el
/// patrón `DD/MM/YY`; no se verifica validez de calendario (`31/02/23`
/// pasa). El orden es de calendario sobre la tupla (año, mes, día),
/// nunca el orden lexicográfico del string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UsageDate {
    // El orden de los campos define el Ord derivado: año, mes, día.
    year: u8,
    month: u8,
    day: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid DD/MM/YY date: {0}")]
pub struct ParseUsageDateError(pub String);

impl UsageDate {
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Año completo bajo la convención de siglo fijo (2000–2099)
    pub fn full_year(&self) -> u16 {
        2000 + u16::from(self.year)
    }
}

impl FromStr for UsageDate {
    type Err = ParseUsageDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = USAGE_DATE_RE
            .captures(s)
            .ok_or_else(|| ParseUsageDateError(s.to_string()))?;

        // Los grupos capturan exactamente dos dígitos: el parse no falla
        Ok(Self {
            year: caps[3].parse().unwrap(),
            month: caps[2].parse().unwrap(),
            day: caps[1].parse().unwrap(),
        })
    }
}

impl fmt::Display for UsageDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:02}", self.day, self.month, self.year)
    }
}

impl Serialize for UsageDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UsageDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// Snapshot del conductor embebido en un registro de uso
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriverSnapshot {
    pub id: Uuid,
    pub name: String,
}

/// Snapshot del automóvil embebido en un registro de uso
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomobileSnapshot {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub color: String,
}

impl From<crate::models::Driver> for DriverSnapshot {
    fn from(driver: crate::models::Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
        }
    }
}

impl From<crate::models::Automobile> for AutomobileSnapshot {
    fn from(automobile: crate::models::Automobile) -> Self {
        Self {
            id: automobile.id,
            license_plate: automobile.license_plate,
            brand: automobile.brand,
            color: automobile.color,
        }
    }
}

/// Registro de uso de un automóvil.
///
/// Sin `end_date` el uso está abierto (el conductor sigue asignado al
/// automóvil). `end_date` se fija una única vez al cerrar el uso.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomobileUsage {
    pub id: Uuid,
    pub start_date: UsageDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<UsageDate>,
    pub driver: DriverSnapshot,
    pub automobile: AutomobileSnapshot,
    pub reason: String,
}

impl AutomobileUsage {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Campos de un registro de uso nuevo; el store asigna el id
#[derive(Debug, Clone)]
pub struct NewAutomobileUsage {
    pub start_date: UsageDate,
    pub driver: DriverSnapshot,
    pub automobile: AutomobileSnapshot,
    pub reason: String,
}

/// Parche de actualización: el único campo mutable de un uso es `end_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsagePatch {
    pub end_date: UsageDate,
}
