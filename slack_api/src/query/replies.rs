use url::Url;

use super::Query;

/// Parameters for `conversations.replies`.
///
/// `ts` is the timestamp of the thread's root message, e.g. `1700000000.123456`.
#[derive(Clone, Debug, Default)]
pub struct RepliesQuery {
    pub channel: String,
    pub ts: String,
    /// Cursor returned in `response_metadata.next_cursor` of the previous page.
    pub cursor: Option<String>,
    /// Page size. `None` uses the API default.
    pub limit: Option<i64>,
    pub include_all_metadata: bool,
}

impl Query for RepliesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("channel", &self.channel)
            .append_pair("ts", &self.ts);
        if let Some(cursor) = &self.cursor {
            url.query_pairs_mut().append_pair("cursor", cursor);
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if self.include_all_metadata {
            url.query_pairs_mut()
                .append_pair("include_all_metadata", "true");
        }
        url
    }
}

impl RepliesQuery {
    pub fn new(channel: &str, ts: &str) -> Self {
        Self {
            channel: channel.to_string(),
            ts: ts.to_string(),
            include_all_metadata: true,
            ..Default::default()
        }
    }

    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = Some(cursor.to_string());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
