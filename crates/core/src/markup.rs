//! Marker-based substring extraction over raw page markup.
//!
//! Kanji pages are read without a DOM: each field sits between fixed label
//! strings, so a couple of marker searches recover it. Every helper returns
//! `None` (or an empty list) when a marker is missing; callers treat that as
//! "field not present on this page".

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

/// `<a ...>` followed by its first run of text.
static ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<a\b[^>]*>([^<]*)").expect("valid anchor regex"));

/// Removes line breaks and surrounding whitespace.
pub fn clean(text: &str) -> String {
    text.replace(['\r', '\n'], "").trim().to_string()
}

/// Returns the text between the first `start` marker and the first `end`
/// marker after it, cleaned with [`clean`].
///
/// # Example
///
/// ```rust
/// use jisho_core::markup::between;
///
/// assert_eq!(between("a[x]b", "[", "]"), Some("x".to_string()));
/// assert_eq!(between("ab", "[", "]"), None);
/// ```
pub fn between(text: &str, start: &str, end: &str) -> Option<String> {
    let start_index = text.find(start)? + start.len();
    let end_index = start_index + text[start_index..].find(end)?;
    Some(clean(&text[start_index..end_index]))
}

/// Returns the text between the last `start` marker that precedes the first
/// `end` marker, and that `end` marker.
///
/// Useful when several identical opening markers appear before the one
/// suffix that identifies the field.
///
/// ```rust
/// use jisho_core::markup::between_last;
///
/// let html = "<strong>7</strong> strokes <strong>333</strong> of 2500";
/// assert_eq!(between_last(html, "<strong>", "</strong> of 2500"), Some("333".to_string()));
/// ```
pub fn between_last(text: &str, start: &str, end: &str) -> Option<String> {
    let end_index = text.find(end)?;
    let start_index = text[..end_index].rfind(start)? + start.len();
    Some(clean(&text[start_index..end_index]))
}

/// [`between`] parsed as an integer. Non-numeric text yields `None`.
pub fn between_int(text: &str, start: &str, end: &str) -> Option<u32> {
    between(text, start, end)?.parse().ok()
}

/// Inner text of every anchor in `fragment`, in document order.
///
/// Only the text run directly after the opening tag is taken, so markup
/// nested inside an anchor does not leak into the result.
///
/// ```rust
/// use jisho_core::markup::anchor_texts;
///
/// let fragment = r#"<a href="/search/a">くるま</a>、<a href="/search/b">シャ</a>"#;
/// assert_eq!(anchor_texts(fragment), vec!["くるま", "シャ"]);
/// assert!(anchor_texts("<dd>none</dd>").is_empty());
/// ```
pub fn anchor_texts(fragment: &str) -> Vec<String> {
    ANCHOR.captures_iter(fragment).map(|caps| clean(&caps[1])).collect()
}

/// Decodes HTML character references such as `&quot;` or `&#39;`.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(text).root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a[x]b", "[", "]", Some("x"))]
    #[case("ab", "[", "]", None)]
    #[case("a[xb", "[", "]", None)]
    #[case("a]x[b", "[", "]", None)]
    #[case("<p>\n  taught in grade 1\n</p>", "<p>", "</p>", Some("taught in grade 1"))]
    #[case("[one][two]", "[", "]", Some("one"))]
    fn test_between(#[case] text: &str, #[case] start: &str, #[case] end: &str, #[case] expected: Option<&str>) {
        assert_eq!(between(text, start, end).as_deref(), expected);
    }

    #[test]
    fn test_between_last_picks_closest_start() {
        let html = "<strong>grade 1</strong> <strong>N5</strong>\n<strong>333</strong></span> of 2500";
        assert_eq!(between_last(html, "<strong>", "</strong></span> of 2500").as_deref(), Some("333"));
    }

    #[test]
    fn test_between_last_missing_markers() {
        assert_eq!(between_last("no markers here", "<strong>", "strokes"), None);
        assert_eq!(between_last("7</strong> strokes", "<strong>", "</strong> strokes"), None);
    }

    #[test]
    fn test_between_int() {
        assert_eq!(between_int("<b>7</b>", "<b>", "</b>"), Some(7));
        assert_eq!(between_int("<b>seven</b>", "<b>", "</b>"), None);
        assert_eq!(between_int("<i>7</i>", "<b>", "</b>"), None);
    }

    #[test]
    fn test_anchor_texts_nested_markup() {
        let fragment = r#"<a href="/x">外<span>ignored</span></a> <a class="y" href="/z">  内  </a>"#;
        assert_eq!(anchor_texts(fragment), vec!["外", "内"]);
    }

    #[test]
    fn test_anchor_texts_ignores_similar_tags() {
        let fragment = r#"<abbr>no</abbr><audio>no</audio><a href="/k">車</a>"#;
        assert_eq!(anchor_texts(fragment), vec!["車"]);
    }

    #[test]
    fn test_anchor_texts_empty() {
        assert!(anchor_texts("").is_empty());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("&quot;car&quot; &amp; wheel"), "\"car\" & wheel");
        assert_eq!(decode_entities("it&#39;s"), "it's");
        assert_eq!(decode_entities("plain"), "plain");
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("\r\n  車 \n"), "車");
    }
}
