use tracing::debug;

use self::{errors::UserError, models::User};

use super::store::Store;

pub mod errors;
pub mod models;

pub async fn fetch_users(store: &Store) -> Result<Vec<User>, UserError> {
    store
        .read()
        .await
        .users
        .clone()
        .ok_or(UserError::NotInitialized)
}

pub async fn fetch_users_page(
    store: &Store,
    limit: i64,
    offset: i64,
) -> Result<Vec<User>, UserError> {
    let collections = store.read().await;
    let users = collections.users.as_ref().ok_or(UserError::NotInitialized)?;

    if limit <= 0 || offset < 0 {
        return Err(UserError::InvalidPage);
    }

    let page: Vec<User> = users
        .iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    if page.is_empty() {
        return Err(UserError::EmptyPage);
    }

    Ok(page)
}

/// Exact, case-sensitive match. The first matching user wins.
pub async fn fetch_user_by_email(store: &Store, email: &str) -> Result<User, UserError> {
    if email.trim().is_empty() {
        return Err(UserError::NotFound);
    }

    let collections = store.read().await;
    let users = collections.users.as_ref().ok_or(UserError::NotInitialized)?;
    users
        .iter()
        .find(|user| user.email == email)
        .cloned()
        .ok_or(UserError::NotFound)
}

pub async fn add_user(store: &Store, user_name: &str, email: &str) -> Result<User, UserError> {
    let (user_name, email) = (user_name.trim(), email.trim());
    if user_name.is_empty() || email.is_empty() {
        return Err(UserError::MissingField);
    }

    let mut collections = store.write().await;
    let users = collections.users.get_or_insert_with(Vec::new);
    let user = User::new(users.len() as i64, user_name, email);
    users.push(user.clone());

    debug!("Added user {} with id {}", user.email, user.id);
    Ok(user)
}
