//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::dto::ErrorResponse;
use crate::{commands, ports::database};

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be bound into a receipt
    #[error("Invalid JSON: {0}")]
    MalformedRequest(String),

    #[error("Receipt with ID {0} not found")]
    ReceiptNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<commands::Error> for ApiError {
    fn from(err: commands::Error) -> Self {
        match err {
            commands::Error::Database(database::Error::ReceiptNotFound(receipt_id)) => {
                ApiError::ReceiptNotFound(receipt_id.to_string())
            }
            err => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
