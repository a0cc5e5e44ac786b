//! Receipt route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tower::ServiceExt;
use uuid::Uuid;

use super::dto::{PointsResponse, ReceiptIdResponse, ReceiptPayload};
use super::error::{ApiError, ApiResult};
use crate::{
    commands::{self, DomainLogic, GetPointsRequest, ProcessReceiptRequest},
    ports::database::{self, DatabasePort},
};

/// Submit a receipt for processing
pub async fn process_receipt<D>(
    State(domain): State<DomainLogic<D>>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> ApiResult<Json<ReceiptIdResponse>>
where
    D: DatabasePort + Send + Sync + 'static,
{
    let Json(payload) =
        payload.map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;

    let res = domain
        .oneshot(ProcessReceiptRequest {
            receipt: payload.into(),
        })
        .await?;

    Ok(Json(ReceiptIdResponse {
        id: res.receipt_id.to_string(),
    }))
}

/// Get the points awarded to a stored receipt
pub async fn get_points<D>(
    State(domain): State<DomainLogic<D>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>>
where
    D: DatabasePort + Send + Sync + 'static,
{
    // Identifiers are always UUIDs, so anything else cannot be stored
    let receipt_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::ReceiptNotFound(id.clone()))?;

    let res = domain
        .oneshot(GetPointsRequest { receipt_id })
        .await
        .map_err(|err| match err {
            commands::Error::Database(database::Error::ReceiptNotFound(_)) => {
                ApiError::ReceiptNotFound(id)
            }
            err => err.into(),
        })?;

    Ok(Json(PointsResponse {
        points: res.points.total(),
    }))
}
