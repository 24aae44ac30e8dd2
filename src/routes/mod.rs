use axum::{
    debug_handler, extract::State, http::HeaderValue, http::Uri, response::IntoResponse,
    routing::get, Json, Router,
};
use hyper::{header::CONTENT_TYPE, StatusCode};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::{configuration::Settings, state::AppState, utils::store::Store};

pub mod docs;
pub mod messages;
pub mod storage;
pub mod users;

pub fn app(config: &Settings) -> Router {
    let origin = config
        .app
        .origin
        .parse::<HeaderValue>()
        .expect("Invalid origin");
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_check))
        .merge(docs::router())
        .merge(storage::router())
        .merge(users::router())
        .merge(messages::router())
        .fallback(not_found)
        .with_state(AppState::new(config))
        .layer(cors)
}

#[debug_handler(state = AppState)]
async fn health_check(State(store): State<Store>) -> impl IntoResponse {
    let collections = store.read().await;
    Json(json!({
        "status": "all backend services are working properly",
        "users": collections.users.as_ref().map(Vec::len),
        "messages": collections.messages.as_ref().map(Vec::len),
    }))
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!("Unknown endpoint {uri}");
    let message = format!("endpoint '{}' isn't used", uri.path());
    (StatusCode::NOT_FOUND, Json(json!({ "error_info": message })))
}
