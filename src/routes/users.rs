use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    state::AppState,
    utils::{
        store::Store,
        users::{
            add_user, errors::UserError, fetch_user_by_email, fetch_users, fetch_users_page,
            models::{User, UsersQuery},
        },
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/users/:query", get(get_users_by_query))
        .route("/users/add/:params", post(post_add_user))
}

/// Get all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Current users", body = [User]),
        (status = 404, description = "Users list is null or empty")
    )
)]
pub async fn get_users(State(store): State<Store>) -> Result<Json<Vec<User>>, UserError> {
    Ok(Json(fetch_users(&store).await?))
}

/// Get a page of users as `{limit}&{offset}`, or a user by email.
#[utoipa::path(
    get,
    path = "/users/{query}",
    tag = "users",
    params(("query" = String, Path, description = "`{limit}&{offset}` or an email")),
    responses(
        (status = 200, description = "A page of users, or one user for an email", body = [User]),
        (status = 400, description = "Offset < 0 or limit <= 0"),
        (status = 404, description = "Empty page or no user with this email")
    )
)]
pub async fn get_users_by_query(
    State(store): State<Store>,
    Path(query): Path<String>,
) -> Result<Response, UserError> {
    let response = match UsersQuery::from(query) {
        UsersQuery::Page { limit, offset } => {
            Json(fetch_users_page(&store, limit, offset).await?).into_response()
        }
        UsersQuery::Email(email) => Json(fetch_user_by_email(&store, &email).await?).into_response(),
    };
    Ok(response)
}

/// Add a user, the id is the current user count.
#[utoipa::path(
    post,
    path = "/users/add/{params}",
    tag = "users",
    params(("params" = String, Path, description = "`{userName}&{email}`")),
    responses(
        (status = 200, description = "User was successfully added"),
        (status = 400, description = "Missing user name or email")
    )
)]
pub async fn post_add_user(
    State(store): State<Store>,
    Path(params): Path<String>,
) -> Result<Json<Value>, UserError> {
    let (user_name, email) = params.split_once('&').ok_or(UserError::MissingField)?;
    let user = add_user(&store, user_name, email).await?;
    Ok(Json(
        json!({ "info": "User was successfully added.", "user": user }),
    ))
}
