//! Turns a Slack thread into an ordered list of authored catalog links.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use slack_api::types::{Message, User};

use crate::error::OrderError;
use crate::extract::extract_links;
use crate::types::AuthoredLink;

/// Source of thread messages and user profiles.
#[async_trait]
pub trait ConversationProvider: Send + Sync {
    /// All messages of the thread rooted at `ts`, root first.
    async fn thread_messages(
        &self,
        channel_id: &str,
        ts: &str,
    ) -> Result<Vec<Message>, slack_api::Error>;

    /// Profiles for `user_ids`, looked up in one call.
    async fn resolve_users(&self, user_ids: &[String]) -> Result<Vec<User>, slack_api::Error>;
}

#[async_trait]
impl ConversationProvider for slack_api::Client {
    async fn thread_messages(
        &self,
        channel_id: &str,
        ts: &str,
    ) -> Result<Vec<Message>, slack_api::Error> {
        self.get_thread_messages(channel_id, ts).await
    }

    async fn resolve_users(&self, user_ids: &[String]) -> Result<Vec<User>, slack_api::Error> {
        self.get_users_info(user_ids).await
    }
}

pub struct ThreadLinkCollector<P> {
    provider: P,
    domain: String,
}

impl<P: ConversationProvider> ThreadLinkCollector<P> {
    /// Creates a collector keeping only links that contain `domain`.
    pub fn new(provider: P, domain: &str) -> Self {
        Self {
            provider,
            domain: domain.to_string(),
        }
    }

    /// Collects one [`AuthoredLink`] per link mention, in message order and
    /// then in order of appearance within each message.
    pub async fn collect(&self, channel_id: &str, ts: &str) -> Result<Vec<AuthoredLink>, OrderError> {
        let messages = self.provider.thread_messages(channel_id, ts).await?;
        if messages.is_empty() {
            return Err(OrderError::EmptyThread {
                channel_id: channel_id.to_string(),
                ts: ts.to_string(),
            });
        }
        tracing::info!("Fetched {} messages from thread {}", messages.len(), ts);

        let mut author_ids = Vec::new();
        let mut seen = HashSet::new();
        let mut mentions: Vec<(&str, Vec<String>)> = Vec::with_capacity(messages.len());
        for message in &messages {
            let Some(user) = message.user.as_deref() else {
                tracing::debug!("Skipping message {} without an author", message.ts);
                continue;
            };
            if seen.insert(user) {
                author_ids.push(user.to_string());
            }
            mentions.push((user, extract_links(&message.blocks, &self.domain)));
        }

        if author_ids.is_empty() {
            tracing::info!("Thread {} has no messages from users", ts);
            return Ok(Vec::new());
        }

        let users = self.provider.resolve_users(&author_ids).await?;
        if users.is_empty() {
            return Err(OrderError::NoUsers);
        }
        let names: HashMap<&str, String> = users
            .iter()
            .map(|user| (user.id.as_str(), display_name(user)))
            .collect();

        let mut links = Vec::new();
        for (user, urls) in mentions {
            if urls.is_empty() {
                continue;
            }
            let author = names
                .get(user)
                .ok_or_else(|| OrderError::UnresolvedUser(user.to_string()))?;
            for url in urls {
                links.push(AuthoredLink {
                    author: author.clone(),
                    url,
                });
            }
        }
        tracing::info!("Found {} links from {} authors", links.len(), author_ids.len());
        Ok(links)
    }
}

/// First and last name joined by a space.
pub fn display_name(user: &User) -> String {
    format!("{} {}", user.profile.first_name, user.profile.last_name)
}
