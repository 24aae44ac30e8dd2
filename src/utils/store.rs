use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{messages::models::Message, users::models::User};

/// In-memory collections. `None` until first populated.
#[derive(Debug, Default)]
pub struct Collections {
    pub users: Option<Vec<User>>,
    pub messages: Option<Vec<Message>>,
}

impl Collections {
    pub fn replace(&mut self, users: Vec<User>, messages: Vec<Message>) {
        self.users = Some(users);
        self.messages = Some(messages);
    }

    pub fn has_user(&self, id: i64) -> bool {
        self.users
            .as_ref()
            .map_or(false, |users| users.iter().any(|user| user.id == id))
    }
}

#[derive(Clone, Default)]
pub struct Store(Arc<RwLock<Collections>>);

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.0.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.0.write().await
    }
}
