use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::{DUPLICATE_EMAIL, ErrorResponse, INTERNAL_ERROR};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        match self {
            AppError::InvalidInput(msg) => {
                tracing::info!(code = code.as_str(), message = %msg, "Rejected submission");
                error_resp(StatusCode::BAD_REQUEST, msg)
            }
            AppError::DuplicateEmail => {
                tracing::info!(code = code.as_str(), "Rejected submission");
                error_resp(StatusCode::CONFLICT, DUPLICATE_EMAIL.to_string())
            }
            AppError::Database(_) | AppError::Export(_) | AppError::Internal(_) => {
                // Details stay in the log; the caller only gets the generic message.
                tracing::error!(code = code.as_str(), error = ?self, "Request failed");
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        }
    }
}

fn error_resp(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
