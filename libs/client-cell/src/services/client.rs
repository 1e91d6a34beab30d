use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::{AppError, Client};
use shared_store::Store;

use crate::models::{CreateClientRequest, UpdateClientRequest};

pub struct ClientService {
    store: Store,
}

impl ClientService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn create_client(
        &self,
        company_id: Uuid,
        request: CreateClientRequest,
    ) -> Result<Client, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Client name must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let client = Client {
            id: Uuid::new_v4(),
            company_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            created_at: now,
            updated_at: now,
        };

        debug!("Creating client {} for company {}", client.id, company_id);
        self.store.insert_client(client.clone()).await;
        Ok(client)
    }

    pub async fn list_clients(&self, company_id: Uuid) -> Vec<Client> {
        self.store.list_clients(company_id).await
    }

    pub async fn get_client(&self, company_id: Uuid, client_id: Uuid) -> Result<Client, AppError> {
        self.store
            .get_client(company_id, client_id)
            .await
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
    }

    pub async fn update_client(
        &self,
        company_id: Uuid,
        client_id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<Client, AppError> {
        let mut client = self.get_client(company_id, client_id).await?;

        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Client name must not be empty".to_string(),
                ));
            }
            client.name = name;
        }
        if let Some(email) = request.email {
            client.email = Some(email);
        }
        if let Some(phone) = request.phone {
            client.phone = Some(phone);
        }
        client.updated_at = Utc::now();

        if !self.store.replace_client(client.clone()).await {
            return Err(AppError::NotFound("Client not found".to_string()));
        }
        Ok(client)
    }

    pub async fn delete_client(&self, company_id: Uuid, client_id: Uuid) -> Result<(), AppError> {
        if !self.store.remove_client(company_id, client_id).await {
            return Err(AppError::NotFound("Client not found".to_string()));
        }
        debug!("Deleted client {} for company {}", client_id, company_id);
        Ok(())
    }
}
