use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{AppError, TenantId};
use shared_store::Store;

use crate::models::{CreateClientRequest, UpdateClientRequest};
use crate::services::client::ClientService;

#[axum::debug_handler]
pub async fn create_client(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<Value>, AppError> {
    let client = ClientService::new(store)
        .create_client(company_id, request)
        .await?;
    Ok(Json(json!(client)))
}

#[axum::debug_handler]
pub async fn list_clients(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
) -> Result<Json<Value>, AppError> {
    let clients = ClientService::new(store).list_clients(company_id).await;
    let total = clients.len();
    Ok(Json(json!({
        "clients": clients,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn get_client(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let client = ClientService::new(store)
        .get_client(company_id, client_id)
        .await?;
    Ok(Json(json!(client)))
}

#[axum::debug_handler]
pub async fn update_client(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(client_id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<Value>, AppError> {
    let client = ClientService::new(store)
        .update_client(company_id, client_id, request)
        .await?;
    Ok(Json(json!(client)))
}

#[axum::debug_handler]
pub async fn delete_client(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(client_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    ClientService::new(store)
        .delete_client(company_id, client_id)
        .await?;
    Ok(Json(json!({ "deleted": client_id })))
}
