//! Concurrent metadata enrichment for collected links.
//!
//! Links are deduplicated by url, one task per unique url fetches its
//! metadata, and results fan back in over a single mpsc channel. The final
//! join re-imposes the original link order, so fetch completion order never
//! shows up in the report.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::catalog::MetadataFetcher;
use crate::types::{AuthoredLink, ProductMetadata, ReportRow, UniqueUrlSet};

/// Message sent from fetch tasks to the collecting loop.
struct FetchResult {
    url: String,
    metadata: ProductMetadata,
}

/// Builds the set of unique urls, each with placeholder metadata.
pub fn unique_url_set(links: &[AuthoredLink]) -> UniqueUrlSet {
    let mut set = UniqueUrlSet::with_capacity(links.len());
    for link in links {
        set.entry(link.url.clone())
            .or_insert_with(|| ProductMetadata::empty(&link.url));
    }
    set
}

/// Fetches metadata once per unique url and joins it back onto `links`.
///
/// A failed fetch is logged and leaves that url's fields empty; it never
/// aborts sibling fetches or the run.
pub async fn enrich<F>(links: &[AuthoredLink], fetcher: Arc<F>) -> Vec<ReportRow>
where
    F: MetadataFetcher + ?Sized + 'static,
{
    let mut resolved = unique_url_set(links);
    let expected = resolved.len();
    if expected == 0 {
        return Vec::new();
    }
    tracing::info!(
        "Fetching metadata for {} unique links ({} mentions)",
        expected,
        links.len()
    );

    let (tx, mut rx) = mpsc::channel::<FetchResult>(expected);
    let mut join_set = JoinSet::new();

    for url in resolved.keys().cloned() {
        let sender = tx.clone();
        let fetcher = Arc::clone(&fetcher);

        join_set.spawn(async move {
            let metadata = match fetcher.fetch_metadata(&url).await {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::warn!("Failed to fetch metadata for {}: {}", url, err);
                    ProductMetadata::empty(&url)
                }
            };
            let _ = sender.send(FetchResult { url, metadata }).await;
        });
    }
    drop(tx);

    let mut received = 0usize;
    while received < expected {
        match rx.recv().await {
            Some(result) => {
                received += 1;
                tracing::debug!("Resolved {} ({}/{})", result.url, received, expected);
                if let Some(entry) = resolved.get_mut(&result.url) {
                    *entry = result.metadata;
                }
            }
            None => {
                // Every sender is gone, so the remaining tasks panicked.
                tracing::warn!(
                    "{} of {} metadata fetches ended without a result",
                    expected - received,
                    expected
                );
                break;
            }
        }
    }

    join_rows(links, &resolved)
}

/// Joins each link with its url's metadata, keeping link order and count.
pub fn join_rows(links: &[AuthoredLink], resolved: &UniqueUrlSet) -> Vec<ReportRow> {
    links
        .iter()
        .map(|link| {
            let metadata = resolved.get(&link.url);
            ReportRow {
                author: link.author.clone(),
                title: metadata.map(|m| m.title.clone()).unwrap_or_default(),
                url: link.url.clone(),
                price: metadata.map(|m| m.price.clone()).unwrap_or_default(),
                image_ref: metadata.map(|m| m.image_ref.clone()).unwrap_or_default(),
            }
        })
        .collect()
}
