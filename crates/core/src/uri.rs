//! Query URI construction.
//!
//! Four endpoints are queried: the word search API, the kanji and sentence
//! search pages (the same search path with a `#kanji` / `#sentences` token
//! encoded into the term) and the word detail page. The base URLs live in
//! [`Endpoints`] so they can be pointed elsewhere, e.g. at a mirror.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::{JishoError, Result};

pub const DEFAULT_API_BASE: &str = "https://jisho.org/api/v1/search/words";
pub const DEFAULT_SEARCH_BASE: &str = "https://jisho.org/search/";
pub const DEFAULT_WORD_BASE: &str = "https://jisho.org/word/";

/// Everything but ASCII alphanumerics and `-_.!~*'()` is escaped in a term.
const TERM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static DEFAULT_ENDPOINTS: LazyLock<Endpoints> = LazyLock::new(|| {
    Endpoints::new(DEFAULT_API_BASE, DEFAULT_SEARCH_BASE, DEFAULT_WORD_BASE)
        .expect("default endpoints are valid URLs")
});

/// Base URLs of the queried endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: Url,
    search_base: Url,
    word_base: Url,
}

impl Endpoints {
    /// Validates and stores the three base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`JishoError::InvalidUrl`] when a base does not parse or cannot
    /// carry path segments (e.g. `mailto:`).
    pub fn new(api_base: &str, search_base: &str, word_base: &str) -> Result<Self> {
        Ok(Self {
            api_base: parse_base(api_base)?,
            search_base: parse_base(search_base)?,
            word_base: parse_base(word_base)?,
        })
    }

    /// Word search API URI, with an optional results page.
    ///
    /// ```rust
    /// use jisho_core::Endpoints;
    ///
    /// let uri = Endpoints::default().phrase_search("車", Some(2));
    /// assert_eq!(uri, "https://jisho.org/api/v1/search/words?keyword=%E8%BB%8A&page=2");
    /// ```
    pub fn phrase_search(&self, phrase: &str, page: Option<u32>) -> String {
        let mut url = self.api_base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("keyword", phrase);
            if let Some(page) = page {
                pairs.append_pair("page", &page.to_string());
            }
        }
        url.to_string()
    }

    /// Kanji details page URI.
    ///
    /// ```rust
    /// use jisho_core::Endpoints;
    ///
    /// assert_eq!(
    ///     Endpoints::default().kanji_search("車"),
    ///     "https://jisho.org/search/%E8%BB%8A%23kanji"
    /// );
    /// ```
    pub fn kanji_search(&self, kanji: &str) -> String {
        with_term(&self.search_base, &format!("{}#kanji", kanji))
    }

    /// Example sentence search page URI.
    pub fn example_search(&self, phrase: &str) -> String {
        with_term(&self.search_base, &format!("{}#sentences", phrase))
    }

    /// Word detail page URI.
    pub fn phrase_scrape(&self, term: &str) -> String {
        with_term(&self.word_base, term)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        DEFAULT_ENDPOINTS.clone()
    }
}

fn parse_base(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|e| JishoError::InvalidUrl(format!("{}: {}", base, e)))?;
    if url.cannot_be_a_base() {
        return Err(JishoError::InvalidUrl(format!("{}: cannot be a base URL", base)));
    }
    Ok(url)
}

/// Appends `term` to the base path as a single escaped segment.
fn with_term(base: &Url, term: &str) -> String {
    let encoded = utf8_percent_encode(term, TERM_ENCODE_SET);
    let mut url = base.clone();
    url.set_path(&format!("{}/{}", base.path().trim_end_matches('/'), encoded));
    url.to_string()
}

/// Word search API URI on the default endpoints.
pub fn uri_for_phrase_search(phrase: &str, page: Option<u32>) -> String {
    Endpoints::default().phrase_search(phrase, page)
}

/// Kanji details page URI on the default endpoints.
pub fn uri_for_kanji_search(kanji: &str) -> String {
    Endpoints::default().kanji_search(kanji)
}

/// Example sentence page URI on the default endpoints.
pub fn uri_for_example_search(phrase: &str) -> String {
    Endpoints::default().example_search(phrase)
}

/// Word detail page URI on the default endpoints.
pub fn uri_for_phrase_scrape(term: &str) -> String {
    Endpoints::default().phrase_scrape(term)
}
