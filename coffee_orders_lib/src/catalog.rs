//! Logged-in scraping of product pages on the catalog site.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderValue, COOKIE};
use reqwest::StatusCode;
use scraper::{Html, Selector};
use url::Url;

use crate::types::ProductMetadata;
use crate::user_agent::get_user_agent;

/// Production catalog origin.
pub const DEFAULT_BASE_URL: &str = "https://www.kofio.cz/";

/// Request timeout for every catalog call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const LOGIN_PATH: &str = "auth/login";
const CSRF_COOKIE: &str = "csrf_cookie_name";
const CSRF_FIELD: &str = "csrf_test_name";

const IMAGE_SELECTOR: &str = ".product_profile_picture:not(.a-center) img";
const PRICE_SELECTOR: &str = ".price_selector";
const TITLE_SELECTOR: &str = ".product_page_heading_h1";

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    HttpStatus { status: StatusCode, url: String },
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("login page did not set the anti-forgery cookie")]
    MissingCsrfToken,
    #[error("login did not establish a session")]
    NoSession,
}

/// Catalog login. `Debug` never prints the password.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fetches product metadata for a single url.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch_metadata(&self, url: &str) -> Result<ProductMetadata, CatalogError>;
}

/// An authenticated catalog session.
///
/// Only obtainable through [`CatalogSession::login`]. The session cookies are
/// frozen into a single `Cookie` header at login, so concurrent fetches share
/// them read-only and responses never alter the session.
pub struct CatalogSession {
    http: reqwest::Client,
    base_url: Url,
    cookie_header: HeaderValue,
}

impl CatalogSession {
    /// Logs in: reads the anti-forgery cookie from the login page, then
    /// posts the credentials together with that token.
    pub async fn login(base_url: &str, credentials: &Credentials) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url)?;
        let login_url = base_url.join(LOGIN_PATH)?;
        let user_agent = get_user_agent();

        let jar = Arc::new(Jar::default());
        let login_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        let resp = login_client.get(login_url.clone()).send().await?;
        ensure_success(resp.status(), &login_url)?;
        let csrf_token = resp
            .cookies()
            .find(|cookie| cookie.name() == CSRF_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(CatalogError::MissingCsrfToken)?;
        tracing::debug!("Received anti-forgery token from {}", login_url);

        let mut submit_url = login_url.clone();
        submit_url.set_query(Some("back="));
        let form = [
            ("login", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
            (CSRF_FIELD, csrf_token.as_str()),
        ];
        let resp = login_client
            .post(submit_url.clone())
            .form(&form)
            .send()
            .await?;
        ensure_success(resp.status(), &submit_url)?;

        let cookie_header = jar.cookies(&base_url).ok_or(CatalogError::NoSession)?;
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        tracing::info!("Logged in to {} as {}", base_url, credentials.username);

        Ok(Self {
            http,
            base_url,
            cookie_header,
        })
    }

    /// Fetches a product page and scrapes its image, price and title.
    ///
    /// The session cookie is only sent to urls on the catalog's own host.
    pub async fn fetch_metadata(&self, url: &str) -> Result<ProductMetadata, CatalogError> {
        let page_url = Url::parse(url)?;
        let mut request = self.http.get(page_url.clone());
        if same_origin(&page_url, &self.base_url) {
            request = request.header(COOKIE, self.cookie_header.clone());
        }
        let resp = request.send().await?;
        ensure_success(resp.status(), &page_url)?;
        let html = resp.text().await?;
        Ok(parse_product_page(url, &html))
    }
}

#[async_trait]
impl MetadataFetcher for CatalogSession {
    async fn fetch_metadata(&self, url: &str) -> Result<ProductMetadata, CatalogError> {
        CatalogSession::fetch_metadata(self, url).await
    }
}

fn ensure_success(status: StatusCode, url: &Url) -> Result<(), CatalogError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CatalogError::HttpStatus {
            status,
            url: url.to_string(),
        })
    }
}

fn same_origin(a: &Url, b: &Url) -> bool {
    a.host_str() == b.host_str() && a.port_or_known_default() == b.port_or_known_default()
}

struct ProductSelectors {
    image: Selector,
    price: Selector,
    title: Selector,
}

fn selectors() -> &'static ProductSelectors {
    static SELECTORS: OnceLock<ProductSelectors> = OnceLock::new();
    SELECTORS.get_or_init(|| ProductSelectors {
        image: Selector::parse(IMAGE_SELECTOR).expect("valid image selector"),
        price: Selector::parse(PRICE_SELECTOR).expect("valid price selector"),
        title: Selector::parse(TITLE_SELECTOR).expect("valid title selector"),
    })
}

/// Extracts metadata from a rendered product page. Each field is looked up
/// on its own and left empty when its element is missing.
pub fn parse_product_page(url: &str, html: &str) -> ProductMetadata {
    let document = Html::parse_document(html);
    let selectors = selectors();

    let image_ref = document
        .select(&selectors.image)
        .next()
        .and_then(|img| {
            img.value()
                .attr("src")
                .filter(|src| !src.is_empty())
                .or_else(|| img.value().attr("data-src"))
        })
        .unwrap_or_default()
        .to_string();

    ProductMetadata {
        url: url.to_string(),
        title: first_text(&document, &selectors.title),
        price: first_text(&document, &selectors.price),
        image_ref,
    }
}

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
