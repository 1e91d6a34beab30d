use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{AppError, TenantId};
use shared_store::Store;

use crate::models::{CreateServiceRequest, UpdateServiceRequest};
use crate::services::catalog::CatalogService;

#[axum::debug_handler]
pub async fn create_service(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Json(request): Json<CreateServiceRequest>,
) -> Result<Json<Value>, AppError> {
    let service = CatalogService::new(store)
        .create_service(company_id, request)
        .await?;
    Ok(Json(json!(service)))
}

#[axum::debug_handler]
pub async fn list_services(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
) -> Result<Json<Value>, AppError> {
    let services = CatalogService::new(store).list_services(company_id).await;
    let total = services.len();
    Ok(Json(json!({
        "services": services,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn get_service(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = CatalogService::new(store)
        .get_service(company_id, service_id)
        .await?;
    Ok(Json(json!(service)))
}

#[axum::debug_handler]
pub async fn update_service(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(service_id): Path<Uuid>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Value>, AppError> {
    let service = CatalogService::new(store)
        .update_service(company_id, service_id, request)
        .await?;
    Ok(Json(json!(service)))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    CatalogService::new(store)
        .delete_service(company_id, service_id)
        .await?;
    Ok(Json(json!({ "deleted": service_id })))
}

#[axum::debug_handler]
pub async fn get_service_professionals(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let professionals = CatalogService::new(store)
        .professionals_for_service(company_id, service_id)
        .await?;
    let total = professionals.len();
    Ok(Json(json!({
        "professionals": professionals,
        "total": total
    })))
}
