use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Driver, DriverSnapshot};
use crate::services::automobile_usage_service::DriverLookup;

/// Repositorio en memoria de conductores
#[derive(Clone)]
pub struct DriverRepository {
    drivers: Arc<RwLock<Vec<Driver>>>,
}

impl DriverRepository {
    pub fn new() -> Self {
        Self {
            drivers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn get_all(&self) -> Vec<Driver> {
        self.drivers.read().await.clone()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Driver> {
        self.drivers
            .read()
            .await
            .iter()
            .find(|driver| driver.id == id)
            .cloned()
    }

    pub async fn filter_by_name(&self, name: &str) -> Vec<Driver> {
        self.drivers
            .read()
            .await
            .iter()
            .filter(|driver| driver.name == name)
            .cloned()
            .collect()
    }

    pub async fn save(&self, name: String) -> Driver {
        let driver = Driver {
            id: Uuid::new_v4(),
            name,
        };

        self.drivers.write().await.push(driver.clone());
        driver
    }

    pub async fn update(&self, id: Uuid, name: String) -> Option<Driver> {
        let mut drivers = self.drivers.write().await;
        let driver = drivers.iter_mut().find(|driver| driver.id == id)?;
        driver.name = name;
        Some(driver.clone())
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        let mut drivers = self.drivers.write().await;
        let before = drivers.len();
        drivers.retain(|driver| driver.id != id);
        drivers.len() < before
    }
}

impl Default for DriverRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DriverLookup for DriverRepository {
    async fn resolve(&self, id: &str) -> Option<DriverSnapshot> {
        let id = Uuid::parse_str(id).ok()?;
        self.find_by_id(id).await.map(DriverSnapshot::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_unique_ids() {
        let repository = DriverRepository::new();

        let john = repository.save("John".to_string()).await;
        let doe = repository.save("Doe".to_string()).await;

        assert_ne!(john.id, doe.id);
        assert_eq!(repository.get_all().await.len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repository = DriverRepository::new();
        let driver = repository.save("John".to_string()).await;

        let updated = repository.update(driver.id, "Johnny".to_string()).await;
        assert_eq!(updated.unwrap().name, "Johnny");

        assert!(repository.delete(driver.id).await);
        assert!(!repository.delete(driver.id).await);
        assert!(repository.find_by_id(driver.id).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_rejects_malformed_and_unknown_ids() {
        let repository = DriverRepository::new();
        let driver = repository.save("John".to_string()).await;

        let snapshot = repository.resolve(&driver.id.to_string()).await.unwrap();
        assert_eq!(snapshot.name, "John");

        assert!(repository.resolve("123").await.is_none());
        assert!(repository.resolve(&Uuid::new_v4().to_string()).await.is_none());
    }
}
