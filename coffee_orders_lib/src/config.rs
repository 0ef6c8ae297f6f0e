//! Run configuration read from the environment.

use std::env;

use crate::catalog::{Credentials, DEFAULT_BASE_URL};

pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";
pub const DEFAULT_LINK_DOMAIN: &str = "kofio.cz";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Credentials and endpoints for one run.
#[derive(Clone)]
pub struct Config {
    pub slack_token: String,
    pub slack_cookie_value: String,
    pub catalog_username: String,
    pub catalog_password: String,
    pub slack_api_base_url: String,
    pub catalog_base_url: String,
    /// Only links containing this substring are collected.
    pub link_domain: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("catalog_username", &self.catalog_username)
            .field("slack_api_base_url", &self.slack_api_base_url)
            .field("catalog_base_url", &self.catalog_base_url)
            .field("link_domain", &self.link_domain)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Reads `SLACK_TOKEN`, `SLACK_COOKIE_VALUE`, `KOFIO_USER_NAME` and
    /// `KOFIO_PASSWORD`, plus the optional `SLACK_API_BASE_URL`,
    /// `KOFIO_BASE_URL` and `COFFEE_ORDERS_DOMAIN` overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|val| !val.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|val| !val.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            slack_token: required("SLACK_TOKEN")?,
            slack_cookie_value: required("SLACK_COOKIE_VALUE")?,
            catalog_username: required("KOFIO_USER_NAME")?,
            catalog_password: required("KOFIO_PASSWORD")?,
            slack_api_base_url: optional("SLACK_API_BASE_URL", DEFAULT_SLACK_API_URL),
            catalog_base_url: optional("KOFIO_BASE_URL", DEFAULT_BASE_URL),
            link_domain: optional("COFFEE_ORDERS_DOMAIN", DEFAULT_LINK_DOMAIN),
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.catalog_username.clone(),
            password: self.catalog_password.clone(),
        }
    }
}
