//! Error types for the library layer.

use std::fmt;

use crate::catalog::CatalogError;
use crate::report::ReportError;

/// Errors that abort a run, wrapping upstream client errors and adding the
/// thread-level conditions the collector treats as fatal.
#[derive(Debug)]
pub enum OrderError {
    /// An error from the Slack client.
    Slack(slack_api::Error),
    /// The thread lookup returned no messages at all.
    EmptyThread { channel_id: String, ts: String },
    /// User resolution returned nobody for a non-empty set of authors.
    NoUsers,
    /// A link author was missing from the user resolution result.
    UnresolvedUser(String),
    /// Logging in to the catalog failed.
    Catalog(CatalogError),
    /// The report could not be written.
    Report(ReportError),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slack(e) => write!(f, "Slack error: {}", e),
            Self::EmptyThread { channel_id, ts } => {
                write!(f, "No messages found in thread {} of channel {}", ts, channel_id)
            }
            Self::NoUsers => write!(f, "No users found"),
            Self::UnresolvedUser(id) => write!(f, "Could not resolve user {}", id),
            Self::Catalog(e) => write!(f, "Catalog error: {}", e),
            Self::Report(e) => write!(f, "Report error: {}", e),
        }
    }
}

impl std::error::Error for OrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Slack(e) => Some(e),
            Self::Catalog(e) => Some(e),
            Self::Report(e) => Some(e),
            _ => None,
        }
    }
}

impl From<slack_api::Error> for OrderError {
    fn from(e: slack_api::Error) -> Self {
        Self::Slack(e)
    }
}

impl From<CatalogError> for OrderError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<ReportError> for OrderError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}
