use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    state::AppState,
    utils::{
        generator::Generator,
        storage::{errors::StorageError, load_into, regenerate, save_from, JsonStorage},
        store::Store,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/random", post(post_random_generation))
        .route("/loadDataFromJson", get(get_load_data))
        .route("/saveDataToJson", get(get_save_data))
}

/// Generate random users and messages, then save them.
#[utoipa::path(
    post,
    path = "/random",
    tag = "storage",
    responses(
        (status = 200, description = "Generated and saved"),
        (status = 400, description = "Error in writing .json files")
    )
)]
pub async fn post_random_generation(
    State(store): State<Store>,
    State(storage): State<JsonStorage>,
    State(generator): State<Generator>,
) -> Result<Json<Value>, StorageError> {
    let (users, messages) = regenerate(&store, &storage, &generator).await?;
    Ok(Json(
        json!({ "info": "Success", "users": users, "messages": messages }),
    ))
}

#[utoipa::path(
    get,
    path = "/loadDataFromJson",
    tag = "storage",
    responses(
        (status = 200, description = "Collections replaced with the saved ones"),
        (status = 400, description = "Error in reading .json files"),
        (status = 404, description = "File not found")
    )
)]
pub async fn get_load_data(
    State(store): State<Store>,
    State(storage): State<JsonStorage>,
) -> Result<Json<Value>, StorageError> {
    let (users, messages) = load_into(&store, &storage).await?;
    Ok(Json(json!({ "users": users, "messages": messages })))
}

#[utoipa::path(
    get,
    path = "/saveDataToJson",
    tag = "storage",
    responses(
        (status = 200, description = "Collections saved"),
        (status = 400, description = "Error in writing .json files")
    )
)]
pub async fn get_save_data(
    State(store): State<Store>,
    State(storage): State<JsonStorage>,
) -> Result<Json<Value>, StorageError> {
    save_from(&store, &storage).await?;
    Ok(Json(json!({ "info": "Success" })))
}
