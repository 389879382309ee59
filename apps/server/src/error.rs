use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Every failure a route can surface to a client.
///
/// Messages are client-facing. Upstream causes are logged where the error is
/// built and never stored here.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Bad or missing caller input, rejected before any upstream call.
    #[error("{0}")]
    Validation(String),
    /// The upstream answered but had nothing for the requested identifier.
    #[error("{0}")]
    NotFound(String),
    /// The upstream call failed or returned an unusable payload.
    #[error("{0}")]
    Upstream(String),
    /// A local resource could not be read.
    #[error("{0}")]
    DataUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::DataUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
