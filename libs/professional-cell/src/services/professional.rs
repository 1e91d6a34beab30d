use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::{Professional, Service};
use shared_store::Store;

use crate::models::{CreateProfessionalRequest, ScheduleError, UpdateProfessionalRequest};

pub struct ProfessionalService {
    store: Store,
}

impl ProfessionalService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn create_professional(
        &self,
        company_id: Uuid,
        request: CreateProfessionalRequest,
    ) -> Result<Professional, ScheduleError> {
        if request.display_name.trim().is_empty() {
            return Err(ScheduleError::ValidationError(
                "Professional name must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let professional = Professional {
            id: Uuid::new_v4(),
            company_id,
            display_name: request.display_name,
            email: request.email,
            bio: request.bio,
            specialties: request.specialties.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        debug!(
            "Creating professional {} for company {}",
            professional.id, company_id
        );
        self.store.insert_professional(professional.clone()).await;

        if let Some(service_ids) = request.service_ids {
            let service_ids = self.validate_service_ids(company_id, service_ids).await?;
            self.store
                .set_professional_services(professional.id, service_ids)
                .await;
        }

        Ok(professional)
    }

    pub async fn list_professionals(&self, company_id: Uuid) -> Vec<Professional> {
        self.store.list_professionals(company_id).await
    }

    pub async fn get_professional(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
    ) -> Result<Professional, ScheduleError> {
        self.store
            .get_professional(company_id, professional_id)
            .await
            .ok_or(ScheduleError::ProfessionalNotFound)
    }

    pub async fn update_professional(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
        request: UpdateProfessionalRequest,
    ) -> Result<Professional, ScheduleError> {
        let mut professional = self.get_professional(company_id, professional_id).await?;

        if let Some(display_name) = request.display_name {
            if display_name.trim().is_empty() {
                return Err(ScheduleError::ValidationError(
                    "Professional name must not be empty".to_string(),
                ));
            }
            professional.display_name = display_name;
        }
        if let Some(email) = request.email {
            professional.email = email;
        }
        if let Some(bio) = request.bio {
            professional.bio = Some(bio);
        }
        if let Some(specialties) = request.specialties {
            professional.specialties = specialties;
        }
        professional.updated_at = Utc::now();

        if !self.store.replace_professional(professional.clone()).await {
            return Err(ScheduleError::ProfessionalNotFound);
        }

        if let Some(service_ids) = request.service_ids {
            let service_ids = self.validate_service_ids(company_id, service_ids).await?;
            self.store
                .set_professional_services(professional_id, service_ids)
                .await;
        }

        Ok(professional)
    }

    pub async fn delete_professional(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
    ) -> Result<(), ScheduleError> {
        if !self
            .store
            .remove_professional(company_id, professional_id)
            .await
        {
            return Err(ScheduleError::ProfessionalNotFound);
        }
        debug!(
            "Deleted professional {} for company {}",
            professional_id, company_id
        );
        Ok(())
    }

    pub async fn assign_services(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
        service_ids: Vec<Uuid>,
    ) -> Result<Vec<Uuid>, ScheduleError> {
        self.get_professional(company_id, professional_id).await?;
        let service_ids = self.validate_service_ids(company_id, service_ids).await?;
        self.store
            .set_professional_services(professional_id, service_ids.clone())
            .await;
        Ok(service_ids)
    }

    pub async fn services_for_professional(
        &self,
        company_id: Uuid,
        professional_id: Uuid,
    ) -> Result<Vec<Service>, ScheduleError> {
        self.get_professional(company_id, professional_id).await?;

        let service_ids = self
            .store
            .service_ids_for_professional(professional_id)
            .await;
        let mut services = Vec::with_capacity(service_ids.len());
        for service_id in service_ids {
            if let Some(service) = self.store.get_service(company_id, service_id).await {
                services.push(service);
            }
        }
        Ok(services)
    }

    /// Links may only reference services of the same tenant.
    async fn validate_service_ids(
        &self,
        company_id: Uuid,
        service_ids: Vec<Uuid>,
    ) -> Result<Vec<Uuid>, ScheduleError> {
        for service_id in &service_ids {
            if self.store.get_service(company_id, *service_id).await.is_none() {
                return Err(ScheduleError::ValidationError(format!(
                    "Unknown service: {}",
                    service_id
                )));
            }
        }
        Ok(service_ids)
    }
}
