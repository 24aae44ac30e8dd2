use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    state::AppState,
    utils::{messages::models::Message, users::models::User},
};

use super::{messages, storage, users};

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        storage::post_random_generation,
        storage::get_load_data,
        storage::get_save_data,
        users::get_users,
        users::get_users_by_query,
        users::post_add_user,
        messages::get_messages_by_sender,
        messages::get_messages_by_receiver,
        messages::get_conversation,
        messages::post_add_message,
    ),
    components(schemas(User, Message)),
    tags(
        (name = "storage", description = "Random data and json files"),
        (name = "users", description = "User lookups and registration"),
        (name = "messages", description = "Message lookups and sending")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.info.title = "MessageAPI".into();
        doc.info.version = "v1".into();
        doc.info.description = Some("Users and messages kept in memory and dumped to json".into());
        doc
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/swagger", get(openapi_document))
        .route(OPENAPI_PATH, get(openapi_document))
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::document())
}
