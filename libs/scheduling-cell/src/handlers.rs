use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{AppError, TenantId};
use shared_store::Store;

use crate::models::SlotQuery;
use crate::services::slots;

/// `GET /professionals/{professional_id}/available-slots?date=&service_id=`
///
/// Returns HTTP 200 with an empty list for every no-data condition; the
/// booking UI shows the same neutral message either way.
pub async fn get_available_slots(
    State(store): State<Store>,
    TenantId(company_id): TenantId,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let snapshot = store.scheduling_snapshot(company_id, professional_id).await;

    let available_slots = slots::compute_available_slots(
        professional_id,
        query.date,
        query.service_id,
        &snapshot.windows,
        &snapshot.appointments,
        &snapshot.services,
    );

    let total = available_slots.len();

    Ok(Json(json!({
        "professional_id": professional_id,
        "date": query.date,
        "service_id": query.service_id,
        "available_slots": available_slots,
        "total": total
    })))
}
