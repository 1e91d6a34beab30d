use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::AppError;

pub const TENANT_HEADER: &str = "x-company-id";

/// The company a request is scoped to.
///
/// Every collection in the store is partitioned by company; handlers resolve
/// the tenant once from the `x-company-id` header and pass already-scoped
/// data downward. This carries no authentication semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantId(pub Uuid);

impl<S> FromRequestParts<S> for TenantId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(TENANT_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::BadRequest(format!("missing {} header", TENANT_HEADER)))?;

        let company_id = Uuid::parse_str(raw)
            .map_err(|_| AppError::BadRequest(format!("invalid {} header", TENANT_HEADER)))?;

        Ok(TenantId(company_id))
    }
}
