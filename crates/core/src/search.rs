//! Records returned by the word search API.
//!
//! These mirror the API's JSON verbatim (snake_case field names included);
//! nothing is reshaped. Arrays the API sometimes omits default to empty.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level word search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawApiResult {
    pub meta: ApiMeta,
    #[serde(default)]
    pub data: Vec<RawApiEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMeta {
    pub status: u16,
}

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawApiEntry {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_common: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub jlpt: Vec<String>,
    #[serde(default)]
    pub japanese: Vec<JapaneseWord>,
    #[serde(default)]
    pub senses: Vec<WordSense>,
    #[serde(default)]
    pub attribution: Attribution,
}

/// A written form and/or reading. Kana-only words have no `word`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JapaneseWord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordSense {
    #[serde(default)]
    pub english_definitions: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub links: Vec<SenseLink>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub see_also: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub source: Vec<WordSource>,
    #[serde(default)]
    pub info: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SenseLink {
    pub text: String,
    pub url: String,
}

/// Loanword origin, e.g. `{ "language": "German", "word": "Arbeit" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordSource {
    pub language: String,
    #[serde(default)]
    pub word: String,
}

/// Which dictionaries the entry came from.
///
/// `dbpedia` is `false` or the DBpedia resource URL.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribution {
    #[serde(default)]
    pub jmdict: bool,
    #[serde(default)]
    pub jmnedict: bool,
    #[serde(default)]
    pub dbpedia: serde_json::Value,
}

/// Decodes a word search response, e.g. one saved to disk.
pub fn parse_search_response(json: &str) -> Result<RawApiResult> {
    Ok(serde_json::from_str(json)?)
}
