//! Word detail page extraction.
//!
//! The meanings column of a word page is a flat list of blocks. A
//! `.meaning-tags` block announces what the following blocks are: parts of
//! speech for definitions, or the "Other forms" / "Notes" sections. The walk
//! keeps that announcement in a [`SectionKind`] and reads each content block
//! accordingly.

use serde::Serialize;

use crate::Result;
use crate::parse::{Document, Element};
use crate::ruby::{SentencePiece, reconstruct, segments_from_element};
use crate::uri::Endpoints;

const SEE_ALSO_PREFIX: &str = "See also";

/// An example sentence attached to one meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseSentence {
    pub english: String,
    pub japanese: String,
    pub pieces: Vec<SentencePiece>,
}

/// One numbered meaning of a word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseMeaning {
    pub definition: String,
    pub definition_abstract: String,
    pub supplemental: Vec<String>,
    pub see_also_terms: Vec<String>,
    pub tags: Vec<String>,
    pub sentences: Vec<PhraseSentence>,
}

/// An alternative spelling listed under "Other forms".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherForm {
    pub kanji: String,
    pub kana: String,
}

/// A pronunciation recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioFile {
    pub uri: String,
    pub mimetype: String,
}

/// Everything extracted from a word page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseDetails {
    pub tags: Vec<String>,
    pub meanings: Vec<PhraseMeaning>,
    pub other_forms: Vec<OtherForm>,
    pub audio: Vec<AudioFile>,
    pub notes: Vec<String>,
}

/// Result of a word page scrape.
///
/// A word the site does not know carries only `query` and `found: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseScrapeResult {
    pub query: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(flatten)]
    pub details: Option<PhraseDetails>,
}

impl PhraseScrapeResult {
    /// The record for a word page that does not exist.
    pub fn not_found(query: &str) -> Self {
        Self { query: query.to_string(), found: false, uri: None, details: None }
    }
}

/// What the most recent `.meaning-tags` block announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// Definitions, tagged with these (lower-cased) word types.
    Meaning(Vec<String>),
    OtherForms,
    Notes,
}

impl Default for SectionKind {
    fn default() -> Self {
        Self::Meaning(Vec::new())
    }
}

impl SectionKind {
    /// Classifies a tag block's text, e.g. `"Noun, Suru verb"`.
    pub fn from_tag_text(text: &str) -> Self {
        let tags: Vec<String> = text.split(',').map(|tag| tag.trim().to_lowercase()).collect();

        match tags.first().map(String::as_str) {
            Some(first) if first.starts_with("other forms") => Self::OtherForms,
            Some(first) if first.starts_with("notes") => Self::Notes,
            _ => Self::Meaning(tags),
        }
    }
}

fn parse_other_forms(text: &str) -> Vec<OtherForm> {
    text.split('、')
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(|form| match form.split_once('【') {
            Some((kanji, kana)) => {
                OtherForm { kanji: kanji.trim().to_string(), kana: kana.replace('】', "").trim().to_string() }
            }
            None => OtherForm { kanji: form.to_string(), kana: String::new() },
        })
        .collect()
}

fn parse_notes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|note| !note.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits supplemental info into plain entries and "See also" targets.
fn split_supplemental(text: &str) -> (Vec<String>, Vec<String>) {
    let mut supplemental = Vec::new();
    let mut see_also = Vec::new();

    for entry in text.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        match entry.strip_prefix(SEE_ALSO_PREFIX) {
            Some(term) => see_also.push(term.trim().to_string()),
            None => supplemental.push(entry.to_string()),
        }
    }

    (supplemental, see_also)
}

fn parse_sentence(sentence: &Element<'_>) -> Result<PhraseSentence> {
    let english = sentence.text_of(".english")?.trim().to_string();

    let pieces = match sentence.select_first("ul")? {
        Some(list) => reconstruct(&segments_from_element(&list)?).pieces,
        None => Vec::new(),
    };

    let japanese: String = sentence
        .text_nodes_excluding(&[".english", ".furigana"])?
        .iter()
        .map(|text| text.trim())
        .collect();

    Ok(PhraseSentence { english, japanese, pieces })
}

fn parse_meaning(block: &Element<'_>, tags: &[String]) -> Result<PhraseMeaning> {
    let definition = block.text_of(".meaning-meaning")?.trim().to_string();

    let definition_abstract = match block.select_first(".meaning-abstract")? {
        Some(element) => element.text_excluding(&["a"])?.trim().to_string(),
        None => String::new(),
    };

    let (supplemental, see_also_terms) = split_supplemental(&block.text_of(".supplemental_info")?);

    let sentences = block
        .select(".sentences > .sentence")?
        .iter()
        .map(parse_sentence)
        .collect::<Result<Vec<_>>>()?;

    Ok(PhraseMeaning { definition, definition_abstract, supplemental, see_also_terms, tags: tags.to_vec(), sentences })
}

fn parse_meanings_column(doc: &Document, details: &mut PhraseDetails) -> Result<()> {
    let Some(wrapper) = doc.select_first(".concept_light-meanings > div")? else {
        return Ok(());
    };

    let mut section = SectionKind::default();

    for child in wrapper.children() {
        if child.has_class("meaning-tags") {
            section = SectionKind::from_tag_text(&child.text());
            tracing::trace!(?section, "meaning section");
            continue;
        }

        match &section {
            SectionKind::OtherForms => details.other_forms = parse_other_forms(&child.text()),
            SectionKind::Notes => details.notes = parse_notes(&child.text()),
            SectionKind::Meaning(tags) => details.meanings.push(parse_meaning(&child, tags)?),
        }
    }

    Ok(())
}

fn parse_tags(doc: &Document) -> Result<Vec<String>> {
    Ok(doc
        .select(".concept_light-tag")?
        .iter()
        .map(|tag| tag.text().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect())
}

/// Forces protocol-relative and plain http sources onto https.
fn secure_uri(src: &str) -> String {
    if let Some(rest) = src.strip_prefix("//") {
        format!("https://{}", rest)
    } else if let Some(rest) = src.strip_prefix("http://") {
        format!("https://{}", rest)
    } else {
        src.to_string()
    }
}

fn parse_audio(doc: &Document) -> Result<Vec<AudioFile>> {
    Ok(doc
        .select("audio > source")?
        .iter()
        .filter_map(|source| {
            let src = source.attr("src")?;
            Some(AudioFile { uri: secure_uri(src), mimetype: source.attr("type").unwrap_or_default().to_string() })
        })
        .collect())
}

/// Extracts tags, meanings, other forms, notes and audio from a word page.
///
/// The page is assumed to exist; a missing word is detected by the caller
/// from the 404 status.
pub fn parse_phrase_scrape_page(page_html: &str, query: &str, endpoints: &Endpoints) -> Result<PhraseScrapeResult> {
    let doc = Document::parse(page_html)?;

    let mut details = PhraseDetails { tags: parse_tags(&doc)?, audio: parse_audio(&doc)?, ..Default::default() };
    parse_meanings_column(&doc, &mut details)?;

    tracing::debug!(query, meanings = details.meanings.len(), "parsed word page");

    Ok(PhraseScrapeResult {
        query: query.to_string(),
        found: true,
        uri: Some(endpoints.phrase_scrape(query)),
        details: Some(details),
    })
}

/// [`parse_phrase_scrape_page`] on the default jisho.org endpoints.
pub fn parse_phrase_scrape_page_html(page_html: &str, query: &str) -> Result<PhraseScrapeResult> {
    parse_phrase_scrape_page(page_html, query, &Endpoints::default())
}
