use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::{AppError, Professional, Service};
use shared_store::Store;

use crate::models::{CreateServiceRequest, UpdateServiceRequest};

pub struct CatalogService {
    store: Store,
}

impl CatalogService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn create_service(
        &self,
        company_id: Uuid,
        request: CreateServiceRequest,
    ) -> Result<Service, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Service name must not be empty".to_string(),
            ));
        }
        if request.duration_minutes <= 0 {
            return Err(AppError::ValidationError(
                "Service duration must be a positive number of minutes".to_string(),
            ));
        }

        let now = Utc::now();
        let service = Service {
            id: Uuid::new_v4(),
            company_id,
            name: request.name,
            description: request.description,
            duration_minutes: request.duration_minutes,
            price: request.price,
            created_at: now,
            updated_at: now,
        };

        debug!("Creating service {} for company {}", service.id, company_id);
        self.store.insert_service(service.clone()).await;
        Ok(service)
    }

    pub async fn list_services(&self, company_id: Uuid) -> Vec<Service> {
        self.store.list_services(company_id).await
    }

    pub async fn get_service(
        &self,
        company_id: Uuid,
        service_id: Uuid,
    ) -> Result<Service, AppError> {
        self.store
            .get_service(company_id, service_id)
            .await
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn update_service(
        &self,
        company_id: Uuid,
        service_id: Uuid,
        request: UpdateServiceRequest,
    ) -> Result<Service, AppError> {
        let mut service = self.get_service(company_id, service_id).await?;

        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Service name must not be empty".to_string(),
                ));
            }
            service.name = name;
        }
        if let Some(description) = request.description {
            service.description = Some(description);
        }
        if let Some(duration) = request.duration_minutes {
            if duration <= 0 {
                return Err(AppError::ValidationError(
                    "Service duration must be a positive number of minutes".to_string(),
                ));
            }
            service.duration_minutes = duration;
        }
        if let Some(price) = request.price {
            service.price = Some(price);
        }
        service.updated_at = Utc::now();

        if !self.store.replace_service(service.clone()).await {
            return Err(AppError::NotFound("Service not found".to_string()));
        }
        Ok(service)
    }

    pub async fn delete_service(
        &self,
        company_id: Uuid,
        service_id: Uuid,
    ) -> Result<(), AppError> {
        if !self.store.remove_service(company_id, service_id).await {
            return Err(AppError::NotFound("Service not found".to_string()));
        }
        debug!("Deleted service {} for company {}", service_id, company_id);
        Ok(())
    }

    /// Professionals of the tenant who offer the given service. Feeds the
    /// public booking flow's professional picker.
    pub async fn professionals_for_service(
        &self,
        company_id: Uuid,
        service_id: Uuid,
    ) -> Result<Vec<Professional>, AppError> {
        // Validate the reference so a bad id reads as 404, not an empty list.
        self.get_service(company_id, service_id).await?;

        let professional_ids = self.store.professional_ids_for_service(service_id).await;
        let mut professionals = Vec::with_capacity(professional_ids.len());
        for professional_id in professional_ids {
            if let Some(professional) = self
                .store
                .get_professional(company_id, professional_id)
                .await
            {
                professionals.push(professional);
            }
        }
        Ok(professionals)
    }
}
