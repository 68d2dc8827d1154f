use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::core::HrError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl HrError {
    pub fn status(&self) -> StatusCode {
        match self {
            HrError::NotFound(_) => StatusCode::NOT_FOUND,
            HrError::Validation(_) => StatusCode::BAD_REQUEST,
            HrError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            HrError::NotFound(_) => "not_found",
            HrError::Validation(_) => "input_error",
            HrError::Transport(_) => "transport_error",
        }
    }
}

/// Unreadable request bodies (bad JSON, missing fields, non-ISO dates) are
/// input errors like any other.
impl From<JsonRejection> for HrError {
    fn from(rejection: JsonRejection) -> Self {
        HrError::Validation(rejection.body_text())
    }
}

impl IntoResponse for HrError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            HrError::Validation(message) => message.clone(),
            HrError::Transport(message) => {
                error!(error = %message, "backing store unavailable");
                "backing store unavailable".to_string()
            }
            HrError::NotFound(_) => self.to_string(),
        };

        let body = Json(ErrorResponse {
            error: message,
            code: self.code().to_string(),
        });

        (status, body).into_response()
    }
}
