use uuid::Uuid;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::driver_dto::{
    CreateDriverRequest, DriverFilters, DriverResponse, UpdateDriverRequest,
};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(repository: DriverRepository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> AppResult<ApiResponse<DriverResponse>> {
        // Validar campos
        request.validate()?;

        let driver = self.repository.save(request.name).await;

        Ok(ApiResponse::success_with_message(
            driver.into(),
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, filters: DriverFilters) -> AppResult<Vec<DriverResponse>> {
        let drivers = match filters.name {
            Some(name) => self.repository.filter_by_name(&name).await,
            None => self.repository.get_all().await,
        };

        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<DriverResponse> {
        let driver = self
            .repository
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        Ok(driver.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> AppResult<ApiResponse<DriverResponse>> {
        request.validate()?;

        let driver = self
            .repository
            .update(id, request.name)
            .await
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            driver.into(),
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await {
            return Err(not_found_error("Driver", &id.to_string()));
        }
        Ok(())
    }
}
