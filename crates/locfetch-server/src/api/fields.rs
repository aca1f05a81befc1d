use axum::{body::Bytes, extract::State, Extension, Json};
use locfetch_core::{FieldUpdateRequest, ValidationError};
use serde::Serialize;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct UpdateFieldResponse {
    pub success: bool,
    pub data: Value,
}

/// `POST /api/update-sitecore-field`
///
/// The body is parsed leniently: anything that is not a JSON object with a
/// non-empty `itemId` and `fieldName` is a 400 and no upstream call is made.
pub(super) async fn update_sitecore_field(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<UpdateFieldResponse>, ApiError> {
    let request: FieldUpdateRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(request_id = %req_id.0, error = %e, "unparseable field update body");
        ValidationError::MissingParameters
    })?;
    let update = request.validate().inspect_err(|_| {
        tracing::warn!(request_id = %req_id.0, "field update missing itemId or fieldName");
    })?;

    let data = state.sitecore.update_field(&update).await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "field update failed");
        ApiError::from(e)
    })?;

    tracing::info!(
        request_id = %req_id.0,
        item_id = %update.item_id,
        field = %update.field_name,
        "field updated"
    );

    Ok(Json(UpdateFieldResponse {
        success: true,
        data,
    }))
}

/// Any verb other than `POST` on the field-update route.
pub(super) async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
