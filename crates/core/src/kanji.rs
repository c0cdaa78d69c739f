//! Kanji details page extraction.
//!
//! The kanji page is read as raw markup: each field sits between fixed label
//! strings, so [`crate::markup`] marker searches recover it without a DOM.
//! A missing section only empties its own field.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::markup::{anchor_texts, between, between_int, between_last, clean, decode_entities};
use crate::uri::Endpoints;

const ONYOMI_LOCATOR: &str = "On";
const KUNYOMI_LOCATOR: &str = "Kun";

const STROKE_ORDER_DIAGRAM_BASE_URI: &str = "https://classic.jisho.org/static/images/stroke_diagrams/";
const STROKE_ORDER_GIF_BASE_URI: &str = "https://raw.githubusercontent.com/mistval/kanji_images/master/gifs/";

const FREQUENCY_SUFFIX: &str = "of 2500 most used kanji in newspapers";

static SVG_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"//[^\s"'<>]*?\.cloudfront\.net/[^\s"'<>]*?\.svg"#).expect("valid svg regex"));

static COMPOUND_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<li>(.*?)</li>").expect("valid compound item regex"));

/// A reading compound listed on the kanji page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YomiExample {
    pub example: String,
    pub reading: String,
    pub meaning: String,
}

/// The radical a kanji is indexed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Radical {
    pub symbol: String,
    /// Alternate shapes of the radical, e.g. `氵` for `水`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forms: Option<Vec<String>>,
    pub meaning: String,
}

/// Everything extracted from a page that contains the queried glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taught_in: Option<String>,
    /// School grade as a number, when `taught_in` names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jlpt_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newspaper_frequency_rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    pub kunyomi: Vec<String>,
    pub onyomi: Vec<String>,
    pub onyomi_examples: Vec<YomiExample>,
    pub kunyomi_examples: Vec<YomiExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radical: Option<Radical>,
    pub parts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_order_diagram_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_order_svg_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_order_gif_uri: Option<String>,
}

/// Result of a kanji lookup.
///
/// `details` is present exactly when `found` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanjiRecord {
    pub query: String,
    pub found: bool,
    pub uri: String,
    #[serde(flatten)]
    pub details: Option<KanjiDetails>,
}

fn contains_kanji_glyph(page_html: &str, kanji: &str) -> bool {
    let glyph_token = format!(r#"<h1 class="character" data-area-name="print" lang="ja">{}</h1>"#, kanji);
    page_html.contains(&glyph_token)
}

fn get_yomi(page_html: &str, locator: &str) -> Vec<String> {
    between(page_html, &format!("<dt>{}:</dt>", locator), "</dl>")
        .map(|section| anchor_texts(&section))
        .unwrap_or_default()
}

fn parse_compound(item: &str) -> Option<YomiExample> {
    let lines: Vec<&str> = item.lines().map(str::trim).filter(|line| !line.is_empty()).collect();

    let [example, reading, meaning] = lines.as_slice() else {
        tracing::debug!(lines = lines.len(), item, "skipping malformed reading compound");
        return None;
    };

    Some(YomiExample {
        example: example.to_string(),
        reading: reading.replace(['【', '】'], "").trim().to_string(),
        meaning: decode_entities(meaning),
    })
}

fn get_yomi_examples(page_html: &str, locator: &str) -> Vec<YomiExample> {
    let locator_string = format!("<h2>{} reading compounds</h2>", locator);
    let Some(start) = page_html.find(&locator_string) else {
        return Vec::new();
    };
    let section = &page_html[start + locator_string.len()..];
    let Some(end) = section.find("</ul>") else {
        return Vec::new();
    };

    COMPOUND_ITEM
        .captures_iter(&section[..end])
        .filter_map(|caps| parse_compound(&caps[1]))
        .collect()
}

fn get_radical(page_html: &str) -> Option<Radical> {
    const MEANING_START: &str = r#"<span class="radical_meaning">"#;
    const SPAN_END: &str = "</span>";

    let meaning_start = page_html.find(MEANING_START)? + MEANING_START.len();
    let meaning_end = meaning_start + page_html[meaning_start..].find(SPAN_END)?;
    let meaning = clean(&page_html[meaning_start..meaning_end]);
    if meaning.is_empty() {
        return None;
    }

    let symbol_start = meaning_end + SPAN_END.len();
    let symbol_end = symbol_start + page_html[symbol_start..].find(SPAN_END)?;
    let symbols = clean(&page_html[symbol_start..symbol_end]);

    let mut chars = symbols.chars();
    let symbol = chars.next()?.to_string();
    let rest = chars.as_str();
    if rest.is_empty() {
        return Some(Radical { symbol, forms: None, meaning });
    }

    let forms = rest
        .replace(['(', ')'], "")
        .split(',')
        .map(str::trim)
        .filter(|form| !form.is_empty())
        .map(str::to_string)
        .collect();

    Some(Radical { symbol, forms: Some(forms), meaning })
}

fn get_parts(page_html: &str) -> Vec<String> {
    let mut parts = between(page_html, "<dt>Parts:</dt>", "</dl>")
        .map(|section| anchor_texts(&section))
        .unwrap_or_default();
    parts.sort();
    parts
}

fn get_newspaper_frequency_rank(page_html: &str) -> Option<u32> {
    let section = between_last(page_html, "<strong>", FREQUENCY_SUFFIX)?;
    section.split('<').next()?.trim().parse().ok()
}

fn get_stroke_count(page_html: &str) -> Option<u32> {
    between_last(page_html, "<strong>", "</strong> strokes")?.parse().ok()
}

fn get_svg_uri(page_html: &str, code_point: u32) -> Option<String> {
    let file_suffix = format!("{:x}.svg", code_point);
    SVG_URI
        .find_iter(page_html)
        .map(|m| m.as_str())
        .find(|uri| uri.ends_with(&file_suffix))
        .map(|uri| format!("https:{}", uri))
}

fn get_diagram_uri(code_point: u32) -> String {
    format!("{}{}_frames.png", STROKE_ORDER_DIAGRAM_BASE_URI, code_point)
}

fn get_gif_uri(code_point: u32) -> String {
    format!("{}{:x}.gif", STROKE_ORDER_GIF_BASE_URI, code_point)
}

/// Extracts kanji details from a kanji page, reporting its URI on the
/// given endpoints.
pub fn parse_kanji_page(page_html: &str, kanji: &str, endpoints: &Endpoints) -> KanjiRecord {
    let uri = endpoints.kanji_search(kanji);

    if !contains_kanji_glyph(page_html, kanji) {
        return KanjiRecord { query: kanji.to_string(), found: false, uri, details: None };
    }

    let code_point = kanji.chars().next().map(u32::from);

    let details = KanjiDetails {
        taught_in: between(page_html, "taught in <strong>", "</strong>"),
        grade_number: between_int(page_html, "taught in <strong>grade ", "</strong>"),
        jlpt_level: between(page_html, "JLPT level <strong>", "</strong>"),
        newspaper_frequency_rank: get_newspaper_frequency_rank(page_html),
        stroke_count: get_stroke_count(page_html),
        meaning: between(page_html, r#"<div class="kanji-details__main-meanings">"#, "</div>")
            .map(|meaning| decode_entities(&meaning)),
        kunyomi: get_yomi(page_html, KUNYOMI_LOCATOR),
        onyomi: get_yomi(page_html, ONYOMI_LOCATOR),
        onyomi_examples: get_yomi_examples(page_html, ONYOMI_LOCATOR),
        kunyomi_examples: get_yomi_examples(page_html, KUNYOMI_LOCATOR),
        radical: get_radical(page_html),
        parts: get_parts(page_html),
        stroke_order_diagram_uri: code_point.map(get_diagram_uri),
        stroke_order_svg_uri: code_point.and_then(|cp| get_svg_uri(page_html, cp)),
        stroke_order_gif_uri: code_point.map(get_gif_uri),
    };

    KanjiRecord { query: kanji.to_string(), found: true, uri, details: Some(details) }
}

/// [`parse_kanji_page`] on the default jisho.org endpoints.
///
/// ```rust
/// use jisho_core::parse_kanji_page_html;
///
/// let record = parse_kanji_page_html("<html><body>No matches</body></html>", "車");
/// assert!(!record.found);
/// assert!(record.details.is_none());
/// ```
pub fn parse_kanji_page_html(page_html: &str, kanji: &str) -> KanjiRecord {
    parse_kanji_page(page_html, kanji, &Endpoints::default())
}
