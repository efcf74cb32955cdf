//! The error type every handler and pipeline step returns.
//!
//! Errors render as `{ "status": <code>, "message": <text> }`.

use crate::dish_actor::DishError;
use crate::order_actor::OrderError;
use axum::{
    extract::rejection::JsonRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: Method, path: String },
    /// The detail is logged, never sent to the client.
    #[error("Something went wrong!")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(%detail, "Internal error");
        }
        let status = self.status();
        let body = ErrorBody {
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DishError> for ApiError {
    fn from(err: DishError) -> Self {
        match err {
            DishError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DishError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => ApiError::NotFound(err.to_string()),
            OrderError::Delivered | OrderError::NotPending { .. } => {
                ApiError::InvalidRequest(err.to_string())
            }
            OrderError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}
