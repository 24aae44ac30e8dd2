use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    state::AppState,
    utils::{
        messages::{
            add_message,
            errors::MessageError,
            fetch_messages,
            models::{Message, MessageFilter, NewMessage},
        },
        store::Store,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages/:sender_id", get(get_messages_by_sender))
        .route("/messages/add/:params", post(post_add_message))
        .route("/:receiver_id/messages", get(get_messages_by_receiver))
        .route("/:receiver_id/messages/:sender_id", get(get_conversation))
}

fn parse_id(raw: &str) -> Result<i64, MessageError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| MessageError::MalformedParameters)
}

#[utoipa::path(
    get,
    path = "/messages/{sender_id}",
    tag = "messages",
    params(("sender_id" = i64, Path, description = "Sender's user id")),
    responses(
        (status = 200, description = "Messages sent by the user", body = [Message]),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Messages not found")
    )
)]
pub async fn get_messages_by_sender(
    State(store): State<Store>,
    Path(sender_id): Path<String>,
) -> Result<Json<Vec<Message>>, MessageError> {
    let filter = MessageFilter::Sender(parse_id(&sender_id)?);
    Ok(Json(fetch_messages(&store, filter).await?))
}

#[utoipa::path(
    get,
    path = "/{receiver_id}/messages",
    tag = "messages",
    params(("receiver_id" = i64, Path, description = "Receiver's user id")),
    responses(
        (status = 200, description = "Messages received by the user", body = [Message]),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Messages not found")
    )
)]
pub async fn get_messages_by_receiver(
    State(store): State<Store>,
    Path(receiver_id): Path<String>,
) -> Result<Json<Vec<Message>>, MessageError> {
    let filter = MessageFilter::Receiver(parse_id(&receiver_id)?);
    Ok(Json(fetch_messages(&store, filter).await?))
}

#[utoipa::path(
    get,
    path = "/{receiver_id}/messages/{sender_id}",
    tag = "messages",
    params(
        ("receiver_id" = i64, Path, description = "Receiver's user id"),
        ("sender_id" = i64, Path, description = "Sender's user id")
    ),
    responses(
        (status = 200, description = "Messages from sender to receiver", body = [Message]),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Messages not found")
    )
)]
pub async fn get_conversation(
    State(store): State<Store>,
    Path((receiver_id, sender_id)): Path<(String, String)>,
) -> Result<Json<Vec<Message>>, MessageError> {
    let filter = MessageFilter::Conversation {
        sender_id: parse_id(&sender_id)?,
        receiver_id: parse_id(&receiver_id)?,
    };
    Ok(Json(fetch_messages(&store, filter).await?))
}

/// Add a message between two existing users.
#[utoipa::path(
    post,
    path = "/messages/add/{params}",
    tag = "messages",
    params(("params" = String, Path, description = "`{subject}&{message}&{senderId}&{receiverId}`")),
    responses(
        (status = 200, description = "Message was successfully added"),
        (status = 400, description = "Missing field, malformed id, or unknown sender/receiver")
    )
)]
pub async fn post_add_message(
    State(store): State<Store>,
    Path(params): Path<String>,
) -> Result<Json<Value>, MessageError> {
    let new = NewMessage::parse(&params).ok_or(MessageError::MissingField)?;
    let sender_id = parse_id(&new.sender_id)?;
    let receiver_id = parse_id(&new.receiver_id)?;

    let message = add_message(&store, &new.subject, &new.body, sender_id, receiver_id).await?;
    Ok(Json(
        json!({ "info": "Message was successfully added.", "message": message }),
    ))
}
