//! API request handlers

use axum::{
    Json,
    extract::{Query, State},
};
use utoipa::openapi::OpenApi;

use super::error::ApiResult;
use super::types::{AppState, BulkRequest, BulkResponse, MxQuery};
use crate::mx::{MailExchanger, resolve_bulk, resolve_mx};

/// List the MX records for a single domain
///
/// List the MX records for a single domain. For many domains, use the bulk endpoint instead.
#[utoipa::path(
    get,
    path = "/mx",
    operation_id = "getMX",
    tag = "mx",
    params(MxQuery),
    responses(
        (status = 200, description = "Mail exchangers sorted by preference, then host", body = [MailExchanger]),
        (status = 400, description = "Missing or empty domain parameter", body = ErrorResponse),
        (status = 502, description = "MX lookup failed", body = ErrorResponse)
    )
)]
pub async fn get_mx(
    State(state): State<AppState>,
    Query(query): Query<MxQuery>,
) -> ApiResult<Json<Vec<MailExchanger>>> {
    let exchangers = resolve_mx(state.resolver(), &query.domain)
        .await
        .inspect_err(|err| tracing::warn!(domain = %query.domain, error = %err, "MX lookup failed"))?;
    Ok(Json(exchangers))
}

/// List the MX records for many domains
///
/// List the MX records for up to 50 domains.
#[utoipa::path(
    post,
    path = "/mx/bulk",
    operation_id = "getMXBulk",
    tag = "mx",
    request_body = BulkRequest,
    responses(
        (status = 200, description = "Mail exchangers of every domain that resolved", body = BulkResponse),
        (status = 400, description = "Empty or oversized domain list", body = ErrorResponse)
    )
)]
pub async fn get_mx_bulk(
    State(state): State<AppState>,
    Json(request): Json<BulkRequest>,
) -> ApiResult<Json<BulkResponse>> {
    let result = resolve_bulk(state.resolver(), &request.domains).await?;
    tracing::info!(
        requested = request.domains.len(),
        resolved = result.len(),
        "bulk MX lookup finished"
    );
    Ok(Json(result.into()))
}

/// OpenAPI document of this service
pub async fn openapi_json(State(state): State<AppState>) -> Json<OpenApi> {
    Json(state.openapi.as_ref().clone())
}
