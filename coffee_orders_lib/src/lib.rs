//! Library layer for Coffee Orders: collects catalog links from a Slack
//! thread, enriches them with product details scraped from a logged-in
//! catalog session, and writes the order report.

pub mod catalog;
pub mod collector;
pub mod config;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod thread_url;
pub mod types;
mod user_agent;

pub use slack_api;

pub use catalog::{CatalogError, CatalogSession, Credentials, MetadataFetcher};
pub use collector::{ConversationProvider, ThreadLinkCollector};
pub use config::{Config, ConfigError};
pub use error::OrderError;
pub use pipeline::RunSummary;
pub use report::ReportError;
pub use thread_url::{parse_thread_url, ThreadRef, ThreadUrlError};
pub use types::{AuthoredLink, ProductMetadata, ReportRow, UniqueUrlSet};
