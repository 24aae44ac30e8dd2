use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("Users list is null or empty")]
    NotInitialized,
    #[error("Users by email not found")]
    NotFound,
    #[error("Offset can't be < 0 and limit can't be <= 0")]
    InvalidPage,
    #[error("Data with this parameters doesn't exist")]
    EmptyPage,
    #[error("Missing user name or email")]
    MissingField,
}

impl IntoResponse for UserError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            UserError::NotInitialized => StatusCode::NOT_FOUND,
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::InvalidPage => StatusCode::BAD_REQUEST,
            UserError::EmptyPage => StatusCode::NOT_FOUND,
            UserError::MissingField => StatusCode::BAD_REQUEST,
        };
        tracing::debug!("{status_code} - {self}");

        (status_code, Json(json!({ "error_info": self.to_string() }))).into_response()
    }
}
