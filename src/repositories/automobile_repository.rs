use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Automobile, AutomobileSnapshot};
use crate::services::automobile_usage_service::AutomobileLookup;

/// Repositorio en memoria de automóviles
#[derive(Clone)]
pub struct AutomobileRepository {
    automobiles: Arc<RwLock<Vec<Automobile>>>,
}

impl AutomobileRepository {
    pub fn new() -> Self {
        Self {
            automobiles: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn get_all(&self) -> Vec<Automobile> {
        self.automobiles.read().await.clone()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Automobile> {
        self.automobiles
            .read()
            .await
            .iter()
            .find(|auto| auto.id == id)
            .cloned()
    }

    /// Listar aplicando los filtros presentes (matrícula, marca, color)
    pub async fn filter_by(
        &self,
        license_plate: Option<&str>,
        brand: Option<&str>,
        color: Option<&str>,
    ) -> Vec<Automobile> {
        self.automobiles
            .read()
            .await
            .iter()
            .filter(|auto| license_plate.map_or(true, |plate| auto.license_plate == plate))
            .filter(|auto| brand.map_or(true, |brand| auto.brand == brand))
            .filter(|auto| color.map_or(true, |color| auto.color == color))
            .cloned()
            .collect()
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> bool {
        self.automobiles
            .read()
            .await
            .iter()
            .any(|auto| auto.license_plate == license_plate)
    }

    pub async fn save(&self, license_plate: String, brand: String, color: String) -> Automobile {
        let automobile = Automobile {
            id: Uuid::new_v4(),
            license_plate,
            brand,
            color,
        };

        self.automobiles.write().await.push(automobile.clone());
        automobile
    }

    pub async fn update(
        &self,
        id: Uuid,
        license_plate: Option<String>,
        brand: Option<String>,
        color: Option<String>,
    ) -> Option<Automobile> {
        let mut automobiles = self.automobiles.write().await;
        let automobile = automobiles.iter_mut().find(|auto| auto.id == id)?;

        if let Some(license_plate) = license_plate {
            automobile.license_plate = license_plate;
        }
        if let Some(brand) = brand {
            automobile.brand = brand;
        }
        if let Some(color) = color {
            automobile.color = color;
        }

        Some(automobile.clone())
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        let mut automobiles = self.automobiles.write().await;
        let before = automobiles.len();
        automobiles.retain(|auto| auto.id != id);
        automobiles.len() < before
    }
}

impl Default for AutomobileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AutomobileLookup for AutomobileRepository {
    async fn resolve(&self, id: &str) -> Option<AutomobileSnapshot> {
        let id = Uuid::parse_str(id).ok()?;
        self.find_by_id(id).await.map(AutomobileSnapshot::from)
    }
}
