use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("account not found")]
    AccountNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("an account with this card already exists")]
    DuplicateAccount,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("no tag in the field")]
    NoTag,

    #[error("no reader attached")]
    ReaderUnavailable,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::AccountNotFound | AppError::ProductNotFound | AppError::NoTag => {
                StatusCode::NOT_FOUND
            }
            AppError::DuplicateAccount | AppError::InsufficientFunds => StatusCode::CONFLICT,
            AppError::NonPositiveAmount => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ReaderUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
