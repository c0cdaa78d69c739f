//! The Jisho client: one fetch per query, then the matching extractor.
//!
//! # Example
//!
//! ```no_run
//! use jisho_core::Jisho;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let jisho = Jisho::new();
//!     let record = jisho.search_for_kanji("車").await?;
//!     if let Some(details) = record.details {
//!         println!("{:?} strokes", details.stroke_count);
//!     }
//!     Ok(())
//! }
//! ```

use crate::fetch::{FetchConfig, FetchedPage, fetch_json, fetch_page, fetch_url};
use crate::kanji::{KanjiRecord, parse_kanji_page};
use crate::phrase::{PhraseScrapeResult, parse_phrase_scrape_page};
use crate::search::RawApiResult;
use crate::sentences::{ExampleSearchResult, parse_example_page};
use crate::uri::Endpoints;
use crate::Result;

/// Endpoints and HTTP settings used by [`Jisho`].
///
/// ```rust
/// use jisho_core::JishoConfig;
///
/// let config = JishoConfig::builder().timeout(30).user_agent("my-app/0.1").build();
/// assert_eq!(config.fetch.timeout, 30);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JishoConfig {
    pub endpoints: Endpoints,
    pub fetch: FetchConfig,
}

impl JishoConfig {
    pub fn builder() -> JishoConfigBuilder {
        JishoConfigBuilder::new()
    }
}

/// Builder for [`JishoConfig`].
#[derive(Debug, Clone, Default)]
pub struct JishoConfigBuilder {
    config: JishoConfig,
}

impl JishoConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request timeout in seconds (default: 10).
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.fetch.timeout = value;
        self
    }

    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    pub fn endpoints(mut self, value: Endpoints) -> Self {
        self.config.endpoints = value;
        self
    }

    pub fn build(self) -> JishoConfig {
        self.config
    }
}

/// Client for the four jisho.org query kinds.
///
/// Holds configuration only; every call is independent and may run
/// concurrently with others.
#[derive(Debug, Clone, Default)]
pub struct Jisho {
    config: JishoConfig,
}

impl Jisho {
    /// Creates a client for jisho.org with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JishoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JishoConfig {
        &self.config
    }

    pub fn uri_for_phrase_search(&self, phrase: &str, page: Option<u32>) -> String {
        self.config.endpoints.phrase_search(phrase, page)
    }

    pub fn uri_for_kanji_search(&self, kanji: &str) -> String {
        self.config.endpoints.kanji_search(kanji)
    }

    pub fn uri_for_example_search(&self, phrase: &str) -> String {
        self.config.endpoints.example_search(phrase)
    }

    pub fn uri_for_phrase_scrape(&self, term: &str) -> String {
        self.config.endpoints.phrase_scrape(term)
    }

    /// Queries the word search API, optionally for a later results page.
    ///
    /// An undecodable body is a [`crate::JishoError::JsonError`].
    pub async fn search_for_phrase(&self, phrase: &str, page: Option<u32>) -> Result<RawApiResult> {
        let uri = self.uri_for_phrase_search(phrase, page);
        fetch_json(&uri, &self.config.fetch).await
    }

    /// Fetches and parses the kanji details page.
    pub async fn search_for_kanji(&self, kanji: &str) -> Result<KanjiRecord> {
        let uri = self.uri_for_kanji_search(kanji);
        let page_html = fetch_url(&uri, &self.config.fetch).await?;
        Ok(parse_kanji_page(&page_html, kanji, &self.config.endpoints))
    }

    /// Fetches and parses the example sentence search page.
    pub async fn search_for_examples(&self, phrase: &str) -> Result<ExampleSearchResult> {
        let uri = self.uri_for_example_search(phrase);
        let page_html = fetch_url(&uri, &self.config.fetch).await?;
        parse_example_page(&page_html, phrase, &self.config.endpoints)
    }

    /// Fetches and parses a word page. A 404 becomes a not-found record.
    pub async fn scrape_for_phrase(&self, term: &str) -> Result<PhraseScrapeResult> {
        let uri = self.uri_for_phrase_scrape(term);
        match fetch_page(&uri, &self.config.fetch).await? {
            FetchedPage::Found(page_html) => parse_phrase_scrape_page(&page_html, term, &self.config.endpoints),
            FetchedPage::NotFound => {
                tracing::debug!(term, "word page not found");
                Ok(PhraseScrapeResult::not_found(term))
            }
        }
    }
}
