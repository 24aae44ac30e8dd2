use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Error in writing .json files. {0:#}")]
    Write(anyhow::Error),
    #[error("Error in reading .json files. {0:#}")]
    Read(anyhow::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            StorageError::FileNotFound(path) => {
                tracing::debug!("Missing storage file {path:?}");
                StatusCode::NOT_FOUND
            }
            StorageError::Write(e) | StorageError::Read(e) => {
                tracing::warn!("Storage failure: {e:?}");
                StatusCode::BAD_REQUEST
            }
        };

        (status_code, Json(json!({ "error_info": self.to_string() }))).into_response()
    }
}
