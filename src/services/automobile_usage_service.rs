//! Servicio de dominio de uso de automóviles
//!
//! Orquesta la validación del payload, la resolución de conductor y
//! automóvil, el control de exclusividad (un conductor tiene como máximo
//! un uso abierto) y la escritura al store. Toda falla se devuelve como
//! `UsageError`; ningún camino panickea ni corta el proceso.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::{AutomobileSnapshot, AutomobileUsage, DriverSnapshot, NewAutomobileUsage};
use crate::repositories::automobile_usage_repository::AutomobileUsageStore;
use crate::services::usage_validation::{validate_registration, validate_update};
use crate::utils::errors::UsageError;

/// Lookup de conductores consumido por el servicio
#[async_trait]
pub trait DriverLookup: Send + Sync {
    /// Resolver un id a un snapshot del conductor, o `None` si no existe
    async fn resolve(&self, id: &str) -> Option<DriverSnapshot>;
}

/// Lookup de automóviles consumido por el servicio
#[async_trait]
pub trait AutomobileLookup: Send + Sync {
    async fn resolve(&self, id: &str) -> Option<AutomobileSnapshot>;
}

pub struct AutomobileUsageService {
    store: Arc<dyn AutomobileUsageStore>,
    drivers: Arc<dyn DriverLookup>,
    automobiles: Arc<dyn AutomobileLookup>,
    // Serializa el chequeo de uso abierto + insert: dos altas concurrentes
    // del mismo conductor no pueden ver las dos "sin uso abierto".
    registration_gate: Mutex<()>,
}

impl AutomobileUsageService {
    pub fn new(
        store: Arc<dyn AutomobileUsageStore>,
        drivers: Arc<dyn DriverLookup>,
        automobiles: Arc<dyn AutomobileLookup>,
    ) -> Self {
        Self {
            store,
            drivers,
            automobiles,
            registration_gate: Mutex::new(()),
        }
    }

    /// Listar todos los usos registrados, en orden de alta
    pub async fn get_all(&self) -> Vec<AutomobileUsage> {
        self.store.get_all().await
    }

    /// Registrar un uso nuevo.
    ///
    /// El registro queda abierto (sin `endDate`) y embebe los snapshots
    /// del conductor y del automóvil resueltos en este momento. Un id que
    /// no resuelve se reporta como dato inválido, igual que un campo
    /// faltante.
    pub async fn register(&self, payload: &Value) -> Result<AutomobileUsage, UsageError> {
        let data = validate_registration(payload)?;

        let driver = self
            .drivers
            .resolve(&data.driver_id)
            .await
            .ok_or(UsageError::InvalidUsageData)?;
        let automobile = self
            .automobiles
            .resolve(&data.automobile_id)
            .await
            .ok_or(UsageError::InvalidUsageData)?;

        let _gate = self.registration_gate.lock().await;

        if !self.store.find_open_by_driver(driver.id).await.is_empty() {
            debug!("conductor {} ya tiene un uso abierto", driver.id);
            return Err(UsageError::DriverAlreadyHasUsage);
        }

        let usage = self
            .store
            .insert(NewAutomobileUsage {
                start_date: data.start_date,
                driver,
                automobile,
                reason: data.reason,
            })
            .await;

        info!(
            "uso registrado: conductor {} -> automóvil {} ({})",
            usage.driver.id, usage.automobile.license_plate, usage.start_date
        );
        Ok(usage)
    }

    /// Cerrar un uso fijando su `endDate`.
    ///
    /// El cierre con una fecha anterior al inicio se rechaza sin tocar el
    /// store. Un id desconocido (o que ni siquiera es un UUID) se reporta
    /// como uso no encontrado.
    pub async fn update(&self, id: &str, payload: &Value) -> Result<AutomobileUsage, UsageError> {
        let patch = validate_update(payload)?;

        let id = uuid::Uuid::parse_str(id).map_err(|_| UsageError::UsageNotFound)?;
        let usage = self
            .store
            .find_by_id(id)
            .await
            .ok_or(UsageError::UsageNotFound)?;

        if patch.end_date < usage.start_date {
            return Err(UsageError::InvalidEndDate);
        }

        let updated = self
            .store
            .update_by_id(id, patch)
            .await
            .ok_or(UsageError::UsageNotFound)?;

        info!("uso {} cerrado ({})", updated.id, patch.end_date);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Automobile, Driver};
    use crate::repositories::automobile_repository::AutomobileRepository;
    use crate::repositories::automobile_usage_repository::AutomobileUsageRepository;
    use crate::repositories::driver_repository::DriverRepository;
    use serde_json::json;

    struct Fixture {
        service: Arc<AutomobileUsageService>,
        drivers: DriverRepository,
        automobiles: AutomobileRepository,
    }

    fn fixture() -> Fixture {
        let drivers = DriverRepository::new();
        let automobiles = AutomobileRepository::new();
        let store = AutomobileUsageRepository::new();

        let service = Arc::new(AutomobileUsageService::new(
            Arc::new(store),
            Arc::new(drivers.clone()),
            Arc::new(automobiles.clone()),
        ));

        Fixture {
            service,
            drivers,
            automobiles,
        }
    }

    async fn sample_driver(fixture: &Fixture) -> Driver {
        fixture.drivers.save("John".to_string()).await
    }

    async fn sample_automobile(fixture: &Fixture) -> Automobile {
        fixture
            .automobiles
            .save("AAA1A11".to_string(), "Foo".to_string(), "Blue".to_string())
            .await
    }

    fn registration(driver: &Driver, automobile: &Automobile, start_date: &str) -> Value {
        json!({
            "startDate": start_date,
            "driverId": driver.id.to_string(),
            "automobileId": automobile.id.to_string(),
            "reason": "Test",
        })
    }

    #[tokio::test]
    async fn test_get_all_returns_empty_when_nothing_registered() {
        let f = fixture();
        assert!(f.service.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_returns_all_usages() {
        let f = fixture();
        let john = sample_driver(&f).await;
        let doe = f.drivers.save("Doe".to_string()).await;
        let auto1 = sample_automobile(&f).await;
        let auto2 = f
            .automobiles
            .save("AAA1A12".to_string(), "Foo".to_string(), "Red".to_string())
            .await;

        f.service
            .register(&registration(&john, &auto1, "11/12/23"))
            .await
            .unwrap();
        f.service
            .register(&registration(&doe, &auto2, "12/12/23"))
            .await
            .unwrap();

        let all = f.service.get_all().await;
        assert_eq!(all.len(), 2);

        // Dos llamadas sin mutaciones en el medio devuelven lo mismo
        assert_eq!(f.service.get_all().await, all);
    }

    #[tokio::test]
    async fn test_register_embeds_snapshots_and_keeps_reason() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let usage = f
            .service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        assert_eq!(usage.start_date.to_string(), "11/12/23");
        assert!(usage.is_open());
        assert_eq!(usage.reason, "Test");
        assert_eq!(usage.driver.id, driver.id);
        assert_eq!(usage.driver.name, "John");
        assert_eq!(usage.automobile.id, automobile.id);
        assert_eq!(usage.automobile.license_plate, "AAA1A11");
        assert_eq!(usage.automobile.brand, "Foo");
        assert_eq!(usage.automobile.color, "Blue");
    }

    #[tokio::test]
    async fn test_register_snapshots_survive_driver_edits() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let usage = f
            .service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        f.drivers
            .update(driver.id, "Renamed".to_string())
            .await
            .unwrap();
        f.automobiles.delete(automobile.id).await;

        let stored = &f.service.get_all().await[0];
        assert_eq!(stored.id, usage.id);
        assert_eq!(stored.driver.name, "John");
        assert_eq!(stored.automobile.license_plate, "AAA1A11");
    }

    #[tokio::test]
    async fn test_register_rejects_missing_data() {
        let f = fixture();
        assert_eq!(
            f.service.register(&json!({})).await,
            Err(UsageError::InvalidUsageData)
        );
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_date() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let result = f
            .service
            .register(&registration(&driver, &automobile, "1111111"))
            .await;

        assert_eq!(result, Err(UsageError::InvalidDateFormat));
    }

    #[tokio::test]
    async fn test_register_rejects_unresolved_driver_or_automobile() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let unknown_driver = json!({
            "startDate": "11/12/23",
            "driverId": uuid::Uuid::new_v4().to_string(),
            "automobileId": automobile.id.to_string(),
            "reason": "Test",
        });
        assert_eq!(
            f.service.register(&unknown_driver).await,
            Err(UsageError::InvalidUsageData)
        );

        let malformed_automobile = json!({
            "startDate": "11/12/23",
            "driverId": driver.id.to_string(),
            "automobileId": "not-a-uuid",
            "reason": "Test",
        });
        assert_eq!(
            f.service.register(&malformed_automobile).await,
            Err(UsageError::InvalidUsageData)
        );
    }

    #[tokio::test]
    async fn test_register_rejects_second_open_usage_for_driver() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        f.service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        let result = f
            .service
            .register(&registration(&driver, &automobile, "12/12/23"))
            .await;

        assert_eq!(result, Err(UsageError::DriverAlreadyHasUsage));
        assert_eq!(f.service.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_register_allowed_again_after_closing() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let usage = f
            .service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        f.service
            .update(&usage.id.to_string(), &json!({ "endDate": "15/12/23" }))
            .await
            .unwrap();

        let second = f
            .service
            .register(&registration(&driver, &automobile, "16/12/23"))
            .await
            .unwrap();

        assert_eq!(second.start_date.to_string(), "16/12/23");
        assert!(second.is_open());
    }

    #[tokio::test]
    async fn test_register_ignores_extra_payload_fields() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let mut payload = registration(&driver, &automobile, "11/12/23");
        payload["foo"] = json!("Bad input");

        let usage = f.service.register(&payload).await.unwrap();
        let serialized = serde_json::to_value(&usage).unwrap();
        assert!(serialized.get("foo").is_none());
    }

    #[tokio::test]
    async fn test_update_closes_an_open_usage() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let usage = f
            .service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        let closed = f
            .service
            .update(&usage.id.to_string(), &json!({ "endDate": "15/12/23" }))
            .await
            .unwrap();

        assert_eq!(closed.id, usage.id);
        assert_eq!(closed.start_date.to_string(), "11/12/23");
        assert_eq!(closed.end_date.unwrap().to_string(), "15/12/23");
        assert_eq!(closed.reason, "Test");
    }

    #[tokio::test]
    async fn test_update_rejects_empty_or_unrelated_payload() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let usage = f
            .service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        assert_eq!(
            f.service.update(&usage.id.to_string(), &json!({})).await,
            Err(UsageError::InvalidDateFormat)
        );
        assert_eq!(
            f.service
                .update(&usage.id.to_string(), &json!({ "foo": "Test" }))
                .await,
            Err(UsageError::InvalidDateFormat)
        );
        assert_eq!(
            f.service
                .update(&usage.id.to_string(), &json!({ "endDate": "0000000" }))
                .await,
            Err(UsageError::InvalidDateFormat)
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        f.service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        assert_eq!(
            f.service
                .update(&uuid::Uuid::new_v4().to_string(), &json!({ "endDate": "15/12/23" }))
                .await,
            Err(UsageError::UsageNotFound)
        );

        // Un id que ni siquiera es un UUID tampoco encuentra nada
        assert_eq!(
            f.service.update("123", &json!({ "endDate": "15/12/23" })).await,
            Err(UsageError::UsageNotFound)
        );
    }

    #[tokio::test]
    async fn test_update_rejects_end_date_before_start_date() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let usage = f
            .service
            .register(&registration(&driver, &automobile, "11/12/23"))
            .await
            .unwrap();

        let result = f
            .service
            .update(&usage.id.to_string(), &json!({ "endDate": "10/12/23" }))
            .await;

        assert_eq!(result, Err(UsageError::InvalidEndDate));

        // El registro queda intacto y abierto
        let stored = &f.service.get_all().await[0];
        assert!(stored.is_open());
    }

    #[tokio::test]
    async fn test_update_compares_dates_by_calendar_order() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let usage = f
            .service
            .register(&registration(&driver, &automobile, "31/12/23"))
            .await
            .unwrap();

        // Como string "02/01/24" < "31/12/23"; como fecha es posterior
        let closed = f
            .service
            .update(&usage.id.to_string(), &json!({ "endDate": "02/01/24" }))
            .await
            .unwrap();

        assert_eq!(closed.end_date.unwrap().to_string(), "02/01/24");
    }

    #[tokio::test]
    async fn test_concurrent_registrations_keep_single_open_usage() {
        let f = fixture();
        let driver = sample_driver(&f).await;
        let automobile = sample_automobile(&f).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = f.service.clone();
            let payload = registration(&driver, &automobile, "11/12/23");
            handles.push(tokio::spawn(async move { service.register(&payload).await }));
        }

        let mut ok = 0;
        let mut already = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(UsageError::DriverAlreadyHasUsage) => already += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(already, 7);
        assert_eq!(f.service.get_all().await.len(), 1);
    }
}
