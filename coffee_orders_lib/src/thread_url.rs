//! Parsing of Slack thread permalinks.

use regex::Regex;
use url::Url;

/// Channel and root timestamp identifying a thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadRef {
    pub channel_id: String,
    pub ts: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ThreadUrlError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("not a Slack message link: {0}")]
    NotAMessageLink(String),
    #[error("malformed message timestamp: {0}")]
    BadTimestamp(String),
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Parses a permalink such as
/// `https://acme.slack.com/archives/C012AB3CD/p1700000000123456`.
///
/// The `p`-prefixed path segment becomes `1700000000.123456`. When the link
/// points at a reply, its `thread_ts` query parameter names the thread root
/// and is used instead.
pub fn parse_thread_url(input: &str) -> Result<ThreadRef, ThreadUrlError> {
    let url = Url::parse(input.trim())?;
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let (channel_id, raw_ts) = match segments.as_slice() {
        ["archives", channel, message, ..] => (*channel, *message),
        _ => return Err(ThreadUrlError::NotAMessageLink(input.to_string())),
    };

    if let Some((_, thread_ts)) = url.query_pairs().find(|(key, _)| key == "thread_ts") {
        return Ok(ThreadRef {
            channel_id: channel_id.to_string(),
            ts: thread_ts.into_owned(),
        });
    }

    let ts_re = Regex::new(r"^p(\d{10})(\d+)$")?;
    let caps = ts_re
        .captures(raw_ts)
        .ok_or_else(|| ThreadUrlError::BadTimestamp(raw_ts.to_string()))?;

    Ok(ThreadRef {
        channel_id: channel_id.to_string(),
        ts: format!("{}.{}", &caps[1], &caps[2]),
    })
}
