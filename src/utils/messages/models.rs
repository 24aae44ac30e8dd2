use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Letters synthetic bodies are drawn from.
pub const BODY_ALPHABET: &[u8] = b"QWERTYUIOPASDFGHJKLZXCVBNMqwertyuiopasdfghjklzxcvbnm";

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub subject: String,
    #[serde(alias = "message")]
    pub body: String,
    pub sender_id: i64,
    pub receiver_id: i64,
}

impl Message {
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        sender_id: i64,
        receiver_id: i64,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            sender_id,
            receiver_id,
        }
    }

    pub fn random_body<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
        (0..length)
            .map(|_| BODY_ALPHABET[rng.gen_range(0..BODY_ALPHABET.len())] as char)
            .collect()
    }
}

/// Which id fields a message lookup compares against.
#[derive(Debug, Clone, Copy)]
pub enum MessageFilter {
    Sender(i64),
    Receiver(i64),
    Conversation { sender_id: i64, receiver_id: i64 },
}

impl MessageFilter {
    pub fn matches(&self, message: &Message) -> bool {
        match *self {
            MessageFilter::Sender(id) => message.sender_id == id,
            MessageFilter::Receiver(id) => message.receiver_id == id,
            MessageFilter::Conversation {
                sender_id,
                receiver_id,
            } => message.sender_id == sender_id && message.receiver_id == receiver_id,
        }
    }
}

/// Parts of a `{subject}&{message}&{senderId}&{receiverId}` path segment.
#[derive(Debug, PartialEq, Eq)]
pub struct NewMessage {
    pub subject: String,
    pub body: String,
    pub sender_id: String,
    pub receiver_id: String,
}

impl NewMessage {
    /// The last two parts are the ids, the first is the subject and the body
    /// keeps any `&` left in between.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tail = raw.rsplitn(3, '&');
        let receiver_id = tail.next()?;
        let sender_id = tail.next()?;
        let (subject, body) = tail.next()?.split_once('&')?;
        Some(Self {
            subject: subject.into(),
            body: body.into(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
        })
    }
}
