use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            email: email.into(),
        }
    }
}

/// A `/users/{..}` path segment, either `{limit}&{offset}` or an email.
#[derive(Debug, PartialEq, Eq)]
pub enum UsersQuery {
    Page { limit: i64, offset: i64 },
    Email(String),
}

impl From<String> for UsersQuery {
    fn from(raw: String) -> Self {
        let page = raw.split_once('&').and_then(|(limit, offset)| {
            Some(UsersQuery::Page {
                limit: limit.trim().parse().ok()?,
                offset: offset.trim().parse().ok()?,
            })
        });
        page.unwrap_or(UsersQuery::Email(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_needs_two_integers() {
        assert_eq!(
            UsersQuery::from("2&0".to_string()),
            UsersQuery::Page {
                limit: 2,
                offset: 0
            }
        );
        assert_eq!(
            UsersQuery::from("-1&3".to_string()),
            UsersQuery::Page {
                limit: -1,
                offset: 3
            }
        );
        assert_eq!(
            UsersQuery::from("tom&jerry@x.com".to_string()),
            UsersQuery::Email("tom&jerry@x.com".into())
        );
        assert_eq!(
            UsersQuery::from("a@x.com".to_string()),
            UsersQuery::Email("a@x.com".into())
        );
    }
}
