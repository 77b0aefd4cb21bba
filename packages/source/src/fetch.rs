//! Document sources.
//!
//! The per-club driver and the enrichment pass only ever see a
//! [`DocumentSource`], so they can run against [`HttpSource`] in production
//! and an in-memory map in tests.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use scraper::Html;

use crate::SourceError;
use crate::retry;
use crate::settings::ScrapeSettings;

/// Something that can turn a URL into a parsed page.
pub trait DocumentSource {
    /// Fetches and parses the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the page cannot be fetched.
    fn fetch(&self, url: &str) -> Result<Html, SourceError>;
}

/// Fetches pages over HTTP with a browser-like identity.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    retries: u32,
}

impl HttpSource {
    /// Builds a client from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] if a header value is invalid, or
    /// [`SourceError::Http`] if the client cannot be built.
    pub fn new(settings: &ScrapeSettings) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        let accept_language =
            HeaderValue::from_str(&settings.accept_language).map_err(|e| SourceError::Config {
                message: format!("invalid Accept-Language header: {e}"),
            })?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            retries: settings.retries,
        })
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Html, SourceError> {
        let body = retry::send_text(|| self.client.get(url), self.retries)?;
        Ok(Html::parse_document(&body))
    }
}

/// In-memory pages keyed by URL, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySource {
    pages: std::collections::BTreeMap<String, String>,
    requests: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MemorySource {
    pub(crate) fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_owned(), html.to_owned());
        self
    }

    /// Every URL requested so far, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[cfg(test)]
impl DocumentSource for MemorySource {
    fn fetch(&self, url: &str) -> Result<Html, SourceError> {
        self.requests.borrow_mut().push(url.to_owned());
        self.pages
            .get(url)
            .map(|html| Html::parse_document(html))
            .ok_or_else(|| SourceError::Status {
                url: url.to_owned(),
                status: 404,
            })
    }
}
