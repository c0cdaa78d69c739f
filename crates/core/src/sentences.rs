//! Example sentence page extraction.

use serde::Serialize;

use crate::Result;
use crate::parse::{Document, Element};
use crate::ruby::{SentencePiece, reconstruct, segments_from_element};
use crate::uri::Endpoints;

/// One example sentence with its readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleSentence {
    pub english: String,
    pub kanji: String,
    pub kana: String,
    pub pieces: Vec<SentencePiece>,
}

/// Result of an example sentence search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleSearchResult {
    pub query: String,
    pub found: bool,
    pub uri: String,
    pub phrase: String,
    pub results: Vec<ExampleSentence>,
}

fn parse_sentence_block(block: &Element<'_>) -> Result<ExampleSentence> {
    let english = block.text_of(".english")?.trim().to_string();

    let text = match block.select_first("ul")? {
        Some(list) => reconstruct(&segments_from_element(&list)?),
        None => Default::default(),
    };

    Ok(ExampleSentence { english, kanji: text.kanji, kana: text.kana, pieces: text.pieces })
}

/// Extracts every sentence block from an example sentence search page.
///
/// A page without sentences is a valid, empty result with `found: false`.
pub fn parse_example_page(page_html: &str, phrase: &str, endpoints: &Endpoints) -> Result<ExampleSearchResult> {
    let doc = Document::parse(page_html)?;

    let results = doc
        .select(".sentence_content")?
        .iter()
        .map(parse_sentence_block)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(phrase, sentences = results.len(), "parsed example page");

    Ok(ExampleSearchResult {
        query: phrase.to_string(),
        found: !results.is_empty(),
        uri: endpoints.example_search(phrase),
        phrase: phrase.to_string(),
        results,
    })
}

/// [`parse_example_page`] on the default jisho.org endpoints.
pub fn parse_example_page_html(page_html: &str, phrase: &str) -> Result<ExampleSearchResult> {
    parse_example_page(page_html, phrase, &Endpoints::default())
}
