//! Values flowing through a single pipeline run.

use std::collections::HashMap;

use serde::Serialize;

/// A product link and the display name of the person who posted it.
///
/// The same `url` may appear in several values; every mention is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthoredLink {
    pub author: String,
    pub url: String,
}

impl AuthoredLink {
    pub fn new(author: &str, url: &str) -> Self {
        Self {
            author: author.to_string(),
            url: url.to_string(),
        }
    }
}

/// Scraped product details for one unique url. Empty fields mean the page
/// had no matching element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductMetadata {
    pub url: String,
    pub title: String,
    pub price: String,
    pub image_ref: String,
}

impl ProductMetadata {
    /// Placeholder used before enrichment and after a failed fetch.
    pub fn empty(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }
}

/// Every unique url of a run mapped to its metadata.
pub type UniqueUrlSet = HashMap<String, ProductMetadata>;

/// One line of the order report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "User")]
    pub author: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Link")]
    pub url: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Image")]
    pub image_ref: String,
}
