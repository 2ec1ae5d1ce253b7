//! Repositorios en memoria
//!
//! Cada repositorio es dueño de su colección (`Arc<RwLock<Vec<_>>>`) y se
//! comparte clonándolo; el estado interior es el mismo entre clones.

pub mod automobile_repository;
pub mod automobile_usage_repository;
pub mod driver_repository;
