use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{AppError, TenantId};
use shared_store::Store;

use crate::models::{
    AppointmentSearchQuery, BookAppointmentRequest, CancelAppointmentRequest,
    RescheduleAppointmentRequest, SummaryQuery, UpdateAppointmentRequest,
};
use crate::services::booking::BookingService;

#[axum::debug_handler]
pub async fn book_appointment(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = BookingService::new(store)
        .book_appointment(company_id, request)
        .await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn search_appointments(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Query(query): Query<AppointmentSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = BookingService::new(store)
        .search_appointments(company_id, query)
        .await;
    let total = appointments.len();
    Ok(Json(json!({
        "appointments": appointments,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn get_appointment_summary(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Value>, AppError> {
    let summary = BookingService::new(store)
        .summarize_appointments(company_id, query.from_date, query.to_date)
        .await;
    Ok(Json(json!(summary)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = BookingService::new(store)
        .get_appointment(company_id, appointment_id)
        .await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = BookingService::new(store)
        .update_appointment(company_id, appointment_id, request)
        .await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<CancelAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = BookingService::new(store)
        .cancel_appointment(company_id, appointment_id, request)
        .await?;
    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = BookingService::new(store)
        .reschedule_appointment(company_id, appointment_id, request)
        .await?;
    Ok(Json(json!(appointment)))
}
