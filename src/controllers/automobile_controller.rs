use uuid::Uuid;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::dto::automobile_dto::{
    AutomobileFilters, AutomobileResponse, CreateAutomobileRequest, UpdateAutomobileRequest,
};
use crate::repositories::automobile_repository::AutomobileRepository;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppResult};
use crate::utils::validation::validate_license_plate;

pub struct AutomobileController {
    repository: AutomobileRepository,
}

impl AutomobileController {
    pub fn new(repository: AutomobileRepository) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: CreateAutomobileRequest,
    ) -> AppResult<ApiResponse<AutomobileResponse>> {
        // Validar campos
        request.validate()?;
        validate_license_plate(&request.license_plate)
            .map_err(|_| validation_error("licensePlate", "invalid license plate format"))?;

        // Verificar que la matrícula no exista
        if self
            .repository
            .license_plate_exists(&request.license_plate)
            .await
        {
            return Err(conflict_error(
                "Automobile",
                "licensePlate",
                &request.license_plate,
            ));
        }

        let automobile = self
            .repository
            .save(request.license_plate, request.brand, request.color)
            .await;

        Ok(ApiResponse::success_with_message(
            automobile.into(),
            "Automóvil creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, filters: AutomobileFilters) -> AppResult<Vec<AutomobileResponse>> {
        let automobiles = self
            .repository
            .filter_by(
                filters.license_plate.as_deref(),
                filters.brand.as_deref(),
                filters.color.as_deref(),
            )
            .await;

        Ok(automobiles
            .into_iter()
            .map(AutomobileResponse::from)
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<AutomobileResponse> {
        let automobile = self
            .repository
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Automobile", &id.to_string()))?;

        Ok(automobile.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAutomobileRequest,
    ) -> AppResult<ApiResponse<AutomobileResponse>> {
        request.validate()?;

        if let Some(license_plate) = &request.license_plate {
            validate_license_plate(license_plate)
                .map_err(|_| validation_error("licensePlate", "invalid license plate format"))?;
        }

        let automobile = self
            .repository
            .update(id, request.license_plate, request.brand, request.color)
            .await
            .ok_or_else(|| not_found_error("Automobile", &id.to_string()))?;

        Ok(ApiResponse::success_with_message(
            automobile.into(),
            "Automóvil actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await {
            return Err(not_found_error("Automobile", &id.to_string()));
        }
        Ok(())
    }
}
