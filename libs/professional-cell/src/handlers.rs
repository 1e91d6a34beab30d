use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{AppError, TenantId};
use shared_store::Store;

use crate::models::{
    AssignServicesRequest, CreateAvailabilityRequest, CreateProfessionalRequest,
    UpdateAvailabilityRequest, UpdateProfessionalRequest,
};
use crate::services::{professional::ProfessionalService, schedule::ScheduleService};

// ==============================================================================
// PROFESSIONAL MANAGEMENT
// ==============================================================================

#[axum::debug_handler]
pub async fn create_professional(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Json(request): Json<CreateProfessionalRequest>,
) -> Result<Json<Value>, AppError> {
    let professional = ProfessionalService::new(store)
        .create_professional(company_id, request)
        .await?;
    Ok(Json(json!(professional)))
}

#[axum::debug_handler]
pub async fn list_professionals(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
) -> Result<Json<Value>, AppError> {
    let professionals = ProfessionalService::new(store)
        .list_professionals(company_id)
        .await;
    let total = professionals.len();
    Ok(Json(json!({
        "professionals": professionals,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn get_professional(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let professional = ProfessionalService::new(store)
        .get_professional(company_id, professional_id)
        .await?;
    Ok(Json(json!(professional)))
}

#[axum::debug_handler]
pub async fn update_professional(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<UpdateProfessionalRequest>,
) -> Result<Json<Value>, AppError> {
    let professional = ProfessionalService::new(store)
        .update_professional(company_id, professional_id, request)
        .await?;
    Ok(Json(json!(professional)))
}

#[axum::debug_handler]
pub async fn delete_professional(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    ProfessionalService::new(store)
        .delete_professional(company_id, professional_id)
        .await?;
    Ok(Json(json!({ "deleted": professional_id })))
}

// ==============================================================================
// SERVICE LINKS
// ==============================================================================

#[axum::debug_handler]
pub async fn assign_services(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<AssignServicesRequest>,
) -> Result<Json<Value>, AppError> {
    let service_ids = ProfessionalService::new(store)
        .assign_services(company_id, professional_id, request.service_ids)
        .await?;
    Ok(Json(json!({
        "professional_id": professional_id,
        "service_ids": service_ids
    })))
}

#[axum::debug_handler]
pub async fn get_professional_services(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let services = ProfessionalService::new(store)
        .services_for_professional(company_id, professional_id)
        .await?;
    let total = services.len();
    Ok(Json(json!({
        "services": services,
        "total": total
    })))
}

// ==============================================================================
// WEEKLY AVAILABILITY
// ==============================================================================

#[axum::debug_handler]
pub async fn create_availability(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
    Json(request): Json<CreateAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    let window = ScheduleService::new(store)
        .create_window(company_id, professional_id, request)
        .await?;
    Ok(Json(json!(window)))
}

#[axum::debug_handler]
pub async fn get_availability(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let windows = ScheduleService::new(store)
        .list_windows(company_id, professional_id)
        .await?;
    let total = windows.len();
    Ok(Json(json!({
        "availability": windows,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path((professional_id, window_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    let window = ScheduleService::new(store)
        .update_window(company_id, professional_id, window_id, request)
        .await?;
    Ok(Json(json!(window)))
}

#[axum::debug_handler]
pub async fn delete_availability(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path((professional_id, window_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    ScheduleService::new(store)
        .delete_window(company_id, professional_id, window_id)
        .await?;
    Ok(Json(json!({ "deleted": window_id })))
}
