use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::configuration::StorageSettings;

use self::errors::StorageError;

use super::{
    generator::Generator, messages::models::Message, store::Store, users::models::User,
};

pub mod errors;

/// A record stored as a flat JSON object. Keys read from disk are matched
/// against `FIELDS` ignoring ASCII case.
pub trait Record: Serialize + DeserializeOwned {
    const FIELDS: &'static [&'static str];
}

impl Record for User {
    const FIELDS: &'static [&'static str] = &["id", "userName", "email"];
}

impl Record for Message {
    const FIELDS: &'static [&'static str] =
        &["subject", "body", "message", "senderId", "receiverId"];
}

#[derive(Clone, Debug)]
pub struct JsonStorage {
    users_path: PathBuf,
    messages_path: PathBuf,
}

impl JsonStorage {
    pub fn new(settings: &StorageSettings) -> Self {
        Self {
            users_path: settings.users_path(),
            messages_path: settings.messages_path(),
        }
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    pub fn messages_path(&self) -> &Path {
        &self.messages_path
    }

    /// Overwrites both files with the given collections.
    pub async fn save(&self, users: &[User], messages: &[Message]) -> Result<(), StorageError> {
        write_collection(&self.users_path, users)
            .await
            .map_err(StorageError::Write)?;
        write_collection(&self.messages_path, messages)
            .await
            .map_err(StorageError::Write)?;

        debug!("Saved {} users and {} messages", users.len(), messages.len());
        Ok(())
    }

    /// Both files must exist before either is read.
    pub async fn load(&self) -> Result<(Vec<User>, Vec<Message>), StorageError> {
        for path in [&self.users_path, &self.messages_path] {
            let exists = fs::try_exists(path)
                .await
                .with_context(|| format!("Failed to check {}", path.display()))
                .map_err(StorageError::Read)?;
            if !exists {
                return Err(StorageError::FileNotFound(path.clone()));
            }
        }

        let users = read_collection(&self.users_path)
            .await
            .map_err(StorageError::Read)?;
        let messages = read_collection(&self.messages_path)
            .await
            .map_err(StorageError::Read)?;

        Ok((users, messages))
    }
}

/// Replaces the in-memory state with fresh random data and persists it.
/// The new state stays in place even if saving fails.
pub async fn regenerate(
    store: &Store,
    storage: &JsonStorage,
    generator: &Generator,
) -> Result<(usize, usize), StorageError> {
    let (mut users, messages) = generator.generate().await;
    users.sort_by(|a, b| a.email.cmp(&b.email));
    let counts = (users.len(), messages.len());

    let mut collections = store.write().await;
    collections.replace(users, messages);
    storage
        .save(
            collections.users.as_deref().unwrap_or_default(),
            collections.messages.as_deref().unwrap_or_default(),
        )
        .await?;

    info!("Generated {} users and {} messages", counts.0, counts.1);
    Ok(counts)
}

pub async fn load_into(store: &Store, storage: &JsonStorage) -> Result<(usize, usize), StorageError> {
    let mut collections = store.write().await;
    let (users, messages) = storage.load().await?;
    let counts = (users.len(), messages.len());
    collections.replace(users, messages);

    info!("Loaded {} users and {} messages", counts.0, counts.1);
    Ok(counts)
}

/// Uninitialized collections are written as empty arrays.
pub async fn save_from(store: &Store, storage: &JsonStorage) -> Result<(), StorageError> {
    let collections = store.read().await;
    storage
        .save(
            collections.users.as_deref().unwrap_or_default(),
            collections.messages.as_deref().unwrap_or_default(),
        )
        .await
}

async fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_vec(items).context("Failed to serialize collection")?;
    fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

async fn read_collection<T: Record>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let raw: Vec<Value> = serde_json::from_slice(&content)
        .with_context(|| format!("Malformed json in {}", path.display()))?;

    raw.into_iter()
        .map(|value| serde_json::from_value(fold_keys(value, T::FIELDS)))
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| format!("Invalid record in {}", path.display()))
}

fn fold_keys(value: Value, fields: &[&str]) -> Value {
    let Value::Object(object) = value else {
        return value;
    };
    let folded: Map<String, Value> = object
        .into_iter()
        .map(|(key, value)| {
            let key = fields
                .iter()
                .find(|field| field.eq_ignore_ascii_case(&key))
                .map_or(key, |field| field.to_string());
            (key, value)
        })
        .collect();
    Value::Object(folded)
}
