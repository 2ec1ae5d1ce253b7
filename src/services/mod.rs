//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: la
//! validación de payloads de uso y el servicio de dominio que orquesta
//! lookups, invariantes y escritura al store.

pub mod automobile_usage_service;
pub mod usage_validation;

pub use automobile_usage_service::*;
pub use usage_validation::*;
