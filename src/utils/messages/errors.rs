use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MessageError {
    #[error("Messages not found")]
    NotFound,
    #[error("Missing subject or message")]
    MissingField,
    #[error("Malformed message parameters")]
    MalformedParameters,
    #[error("Sender {0} doesn't exist")]
    UnknownSender(i64),
    #[error("Receiver {0} doesn't exist")]
    UnknownReceiver(i64),
}

impl IntoResponse for MessageError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            MessageError::NotFound => StatusCode::NOT_FOUND,
            MessageError::MissingField => StatusCode::BAD_REQUEST,
            MessageError::MalformedParameters => StatusCode::BAD_REQUEST,
            MessageError::UnknownSender(_) => StatusCode::BAD_REQUEST,
            MessageError::UnknownReceiver(_) => StatusCode::BAD_REQUEST,
        };
        tracing::debug!("{status_code} - {self}");

        (status_code, Json(json!({ "error_info": self.to_string() }))).into_response()
    }
}
