#[cfg(feature = "fetch")]
pub mod client;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod kanji;
pub mod markup;
pub mod parse;
pub mod phrase;
pub mod ruby;
pub mod search;
pub mod sentences;
pub mod uri;

#[cfg(feature = "fetch")]
pub use client::{Jisho, JishoConfig, JishoConfigBuilder};
pub use error::{JishoError, Result};
pub use fetch::{FetchConfig, FetchedPage, fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{fetch_json, fetch_page, fetch_url};
pub use formatters::{
    JsonConfig, JsonFormatter, TextConfig, TextFormatter, TextRender, convert_to_json, convert_to_text,
};
pub use kanji::{KanjiDetails, KanjiRecord, Radical, YomiExample, parse_kanji_page, parse_kanji_page_html};
#[doc(hidden)]
pub use markup::{anchor_texts, between, between_int, between_last};
pub use parse::Document;
pub use phrase::{
    AudioFile, OtherForm, PhraseDetails, PhraseMeaning, PhraseScrapeResult, PhraseSentence, SectionKind,
    parse_phrase_scrape_page, parse_phrase_scrape_page_html,
};
pub use ruby::{RubyText, Segment, SentencePiece, reconstruct};
pub use search::{RawApiEntry, RawApiResult, parse_search_response};
pub use sentences::{ExampleSearchResult, ExampleSentence, parse_example_page, parse_example_page_html};
pub use uri::{Endpoints, uri_for_example_search, uri_for_kanji_search, uri_for_phrase_scrape, uri_for_phrase_search};
