//! HTTP client for the Slack Web API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, RepliesQuery, UsersInfoQuery},
    types::{Message, RepliesPage, Status, User, UsersInfo},
    Error,
};

/// HTTP client for the Slack Web API.
///
/// Authenticates with a user token plus the browser session cookie `d`,
/// which Slack requires for `xoxc-` tokens. Each request builds a fresh
/// `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://slack.com/api`.
    base_api_url: String,
    token: String,
    cookie_value: String,
}

impl Client {
    /// Creates a new client pointing at the production Slack API.
    pub fn new(token: &str, cookie_value: &str) -> Self {
        Self::with_base_url("https://slack.com/api", token, cookie_value)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: &str, cookie_value: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            cookie_value: cookie_value.to_string(),
        }
    }

    fn get_url(&self, method: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/{}", &self.base_api_url, method).as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            },
        )?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, method: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(method, query)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .bearer_auth(&self.token)
            .header("cookie", format!("d={}", self.cookie_value))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to call {}: {}", method, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("{} failed with status {}: {}", method, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let envelope = serde_json::from_str::<Status>(&body).map_err(|e| {
            tracing::error!("Failed to parse {} envelope: {} | body: {}", method, e, truncate_body(&body));
            Error::RequestFailed
        })?;
        if !envelope.ok {
            let code = envelope.error.unwrap_or_else(|| "unknown_error".to_string());
            tracing::error!("{} returned error: {}", method, code);
            return Err(Error::Api(code));
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {}: {} | body: {}", method, e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches a single page of replies for the thread rooted at `query.ts`.
    pub async fn get_replies_page(&self, query: &RepliesQuery) -> Result<RepliesPage, Error> {
        self.get::<RepliesPage, RepliesQuery>("conversations.replies", query)
            .await
    }

    /// Fetches every message of a thread, root first, following pagination
    /// cursors until Slack reports no more pages.
    pub async fn get_thread_messages(
        &self,
        channel_id: &str,
        ts: &str,
    ) -> Result<Vec<Message>, Error> {
        let mut messages = Vec::new();
        let mut query = RepliesQuery::new(channel_id, ts);
        loop {
            let page = self.get_replies_page(&query).await?;
            let next = page.next_cursor().map(str::to_string);
            messages.extend(page.messages);
            match next {
                Some(cursor) => {
                    tracing::debug!("Fetching next replies page for {}", ts);
                    query = query.with_cursor(&cursor);
                }
                None => break,
            }
        }
        Ok(messages)
    }

    /// Looks up several users in one `users.info` call.
    pub async fn get_users_info(&self, user_ids: &[String]) -> Result<Vec<User>, Error> {
        let query = UsersInfoQuery::default().with_users(user_ids);
        let info = self
            .get::<UsersInfo, UsersInfoQuery>("users.info", &query)
            .await?;
        Ok(info.into_users())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
