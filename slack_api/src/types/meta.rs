use serde::{Deserialize, Serialize};

use super::{Message, User};

/// The `ok`/`error` envelope present on every Slack Web API response.
#[derive(Serialize, Deserialize, Debug)]
pub struct Status {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

/// One page of `conversations.replies`.
#[derive(Serialize, Deserialize, Debug)]
pub struct RepliesPage {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

impl RepliesPage {
    /// Returns the cursor for the next page, if Slack reported more results.
    pub fn next_cursor(&self) -> Option<&str> {
        let cursor = self.response_metadata.next_cursor.as_str();
        if self.has_more && !cursor.is_empty() {
            Some(cursor)
        } else {
            None
        }
    }
}

/// Result of `users.info`. A batched lookup answers with `users`, a
/// single-user lookup with `user`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UsersInfo {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub user: Option<User>,
}

impl UsersInfo {
    pub fn into_users(self) -> Vec<User> {
        let mut users = self.users;
        if let Some(user) = self.user {
            users.push(user);
        }
        users
    }
}
