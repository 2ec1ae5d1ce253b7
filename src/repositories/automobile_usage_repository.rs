use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{AutomobileUsage, NewAutomobileUsage, UsagePatch};

/// Store de registros de uso consumido por el servicio de dominio.
///
/// Los registros nunca se eliminan; `update_by_id` solo mezcla el parche
/// de cierre (`end_date`). Insert y update toman el write lock, así que
/// observan un snapshot consistente frente a lecturas concurrentes.
#[async_trait]
pub trait AutomobileUsageStore: Send + Sync {
    /// Todos los registros, en orden de inserción
    async fn get_all(&self) -> Vec<AutomobileUsage>;

    /// Registros del conductor que siguen abiertos (sin `end_date`)
    async fn find_open_by_driver(&self, driver_id: Uuid) -> Vec<AutomobileUsage>;

    async fn find_by_id(&self, id: Uuid) -> Option<AutomobileUsage>;

    /// Asigna un id nuevo, agrega el registro y devuelve lo almacenado
    async fn insert(&self, new_usage: NewAutomobileUsage) -> AutomobileUsage;

    /// Mezcla el parche en el registro; `None` si el id no existe
    async fn update_by_id(&self, id: Uuid, patch: UsagePatch) -> Option<AutomobileUsage>;
}

/// Implementación en memoria del store de usos
#[derive(Clone)]
pub struct AutomobileUsageRepository {
    usages: Arc<RwLock<Vec<AutomobileUsage>>>,
}

impl AutomobileUsageRepository {
    pub fn new() -> Self {
        Self {
            usages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for AutomobileUsageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AutomobileUsageStore for AutomobileUsageRepository {
    async fn get_all(&self) -> Vec<AutomobileUsage> {
        self.usages.read().await.clone()
    }

    async fn find_open_by_driver(&self, driver_id: Uuid) -> Vec<AutomobileUsage> {
        self.usages
            .read()
            .await
            .iter()
            .filter(|usage| usage.driver.id == driver_id && usage.is_open())
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<AutomobileUsage> {
        self.usages
            .read()
            .await
            .iter()
            .find(|usage| usage.id == id)
            .cloned()
    }

    async fn insert(&self, new_usage: NewAutomobileUsage) -> AutomobileUsage {
        let usage = AutomobileUsage {
            id: Uuid::new_v4(),
            start_date: new_usage.start_date,
            end_date: None,
            driver: new_usage.driver,
            automobile: new_usage.automobile,
            reason: new_usage.reason,
        };

        self.usages.write().await.push(usage.clone());
        usage
    }

    async fn update_by_id(&self, id: Uuid, patch: UsagePatch) -> Option<AutomobileUsage> {
        let mut usages = self.usages.write().await;
        let usage = usages.iter_mut().find(|usage| usage.id == id)?;
        usage.end_date = Some(patch.end_date);
        Some(usage.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AutomobileSnapshot, DriverSnapshot};

    fn new_usage(driver_id: Uuid, start_date: &str) -> NewAutomobileUsage {
        NewAutomobileUsage {
            start_date: start_date.parse().unwrap(),
            driver: DriverSnapshot {
                id: driver_id,
                name: "John".to_string(),
            },
            automobile: AutomobileSnapshot {
                id: Uuid::new_v4(),
                license_plate: "AAA1A11".to_string(),
                brand: "Foo".to_string(),
                color: "Blue".to_string(),
            },
            reason: "Test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids_and_keeps_order() {
        let store = AutomobileUsageRepository::new();
        let driver_id = Uuid::new_v4();

        let first = store.insert(new_usage(driver_id, "11/12/23")).await;
        let second = store.insert(new_usage(Uuid::new_v4(), "12/12/23")).await;

        assert_ne!(first.id, second.id);

        let all = store.get_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
    }

    #[tokio::test]
    async fn test_find_open_by_driver_ignores_closed_and_other_drivers() {
        let store = AutomobileUsageRepository::new();
        let driver_id = Uuid::new_v4();

        let usage = store.insert(new_usage(driver_id, "11/12/23")).await;
        store.insert(new_usage(Uuid::new_v4(), "12/12/23")).await;

        assert_eq!(store.find_open_by_driver(driver_id).await.len(), 1);

        store
            .update_by_id(
                usage.id,
                UsagePatch {
                    end_date: "15/12/23".parse().unwrap(),
                },
            )
            .await
            .unwrap();

        assert!(store.find_open_by_driver(driver_id).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_end_date_only_and_never_removes() {
        let store = AutomobileUsageRepository::new();
        let inserted = store.insert(new_usage(Uuid::new_v4(), "11/12/23")).await;

        let updated = store
            .update_by_id(
                inserted.id,
                UsagePatch {
                    end_date: "15/12/23".parse().unwrap(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, inserted.id);
        assert_eq!(updated.start_date, inserted.start_date);
        assert_eq!(updated.reason, inserted.reason);
        assert_eq!(updated.end_date.unwrap().to_string(), "15/12/23");
        assert_eq!(store.get_all().await.len(), 1);

        assert!(store
            .update_by_id(
                Uuid::new_v4(),
                UsagePatch {
                    end_date: "15/12/23".parse().unwrap(),
                },
            )
            .await
            .is_none());
    }
}
