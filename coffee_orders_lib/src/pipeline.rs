//! End-to-end run: collect links, log in, enrich, write the report.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::CatalogSession;
use crate::collector::ThreadLinkCollector;
use crate::config::Config;
use crate::enrich::{enrich, unique_url_set};
use crate::error::OrderError;
use crate::report::write_report;
use crate::thread_url::ThreadRef;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub links: usize,
    pub unique_urls: usize,
    pub rows: usize,
}

/// Runs every stage in order; the first fatal error stops the run before
/// the next stage starts and no report is written.
pub async fn run(config: &Config, thread: &ThreadRef, output: &Path) -> Result<RunSummary, OrderError> {
    let slack = slack_api::Client::with_base_url(
        &config.slack_api_base_url,
        &config.slack_token,
        &config.slack_cookie_value,
    );
    let collector = ThreadLinkCollector::new(slack, &config.link_domain);
    let links = collector.collect(&thread.channel_id, &thread.ts).await?;
    let unique_urls = unique_url_set(&links).len();

    let rows = if links.is_empty() {
        tracing::info!("No {} links found, skipping catalog login", config.link_domain);
        Vec::new()
    } else {
        let session = CatalogSession::login(&config.catalog_base_url, &config.credentials()).await?;
        enrich(&links, Arc::new(session)).await
    };

    write_report(output, &rows)?;

    Ok(RunSummary {
        links: links.len(),
        unique_urls,
        rows: rows.len(),
    })
}
