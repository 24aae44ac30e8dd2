use tracing::debug;

use self::{
    errors::MessageError,
    models::{Message, MessageFilter},
};

use super::store::Store;

pub mod errors;
pub mod models;

/// Linear scan over the current messages. An empty result is reported as
/// not found.
pub async fn fetch_messages(
    store: &Store,
    filter: MessageFilter,
) -> Result<Vec<Message>, MessageError> {
    let collections = store.read().await;
    let messages = collections
        .messages
        .as_ref()
        .ok_or(MessageError::NotFound)?;

    let found: Vec<Message> = messages
        .iter()
        .filter(|message| filter.matches(message))
        .cloned()
        .collect();

    if found.is_empty() {
        debug!("No messages for {filter:?}");
        return Err(MessageError::NotFound);
    }

    Ok(found)
}

pub async fn add_message(
    store: &Store,
    subject: &str,
    body: &str,
    sender_id: i64,
    receiver_id: i64,
) -> Result<Message, MessageError> {
    if subject.trim().is_empty() || body.trim().is_empty() {
        return Err(MessageError::MissingField);
    }

    let mut collections = store.write().await;
    if !collections.has_user(sender_id) {
        return Err(MessageError::UnknownSender(sender_id));
    }
    if !collections.has_user(receiver_id) {
        return Err(MessageError::UnknownReceiver(receiver_id));
    }

    let message = Message::new(subject, body, sender_id, receiver_id);
    collections
        .messages
        .get_or_insert_with(Vec::new)
        .push(message.clone());

    debug!("Added message from {sender_id} to {receiver_id}");
    Ok(message)
}
