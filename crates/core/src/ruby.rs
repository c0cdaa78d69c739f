//! Furigana (ruby text) reconstruction.
//!
//! Jisho renders a Japanese sentence as a list of segments. A segment is
//! either plain text or a base run (`unlifted`) with furigana over it
//! (`lifted`). [`reconstruct`] folds the segments into the kanji form, a
//! kana reading and the per-segment pieces.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::parse::{Element, Node};

/// One furigana/base-text run of a sentence.
///
/// `lifted` is empty for runs without furigana.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentencePiece {
    pub lifted: String,
    pub unlifted: String,
}

/// A sentence segment as rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text without furigana.
    Plain(String),
    /// Base text with its furigana reading.
    Ruby { lifted: String, unlifted: String },
}

/// The kanji form, kana form and pieces of one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RubyText {
    pub kanji: String,
    pub kana: String,
    pub pieces: Vec<SentencePiece>,
}

/// Whether `c` counts as a kanji when splitting okurigana off a base run.
///
/// The range runs from extension A to the end of the unified block, so the
/// Yijing hexagram symbols (U+4DC0..U+4DFF) between them are included.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{3400}'..='\u{9FBF}')
}

/// Trailing characters of `unlifted` that furigana does not cover.
///
/// Scans backward from the end and stops at the first CJK ideograph. The
/// first character is never part of the ending: it is the annotated base.
fn uncovered_ending(unlifted: &str) -> &str {
    let base_len = unlifted.chars().next().map_or(0, char::len_utf8);
    let ending_len: usize = unlifted[base_len..]
        .chars()
        .rev()
        .take_while(|c| !is_cjk_ideograph(*c))
        .map(char::len_utf8)
        .sum();
    &unlifted[unlifted.len() - ending_len..]
}

/// Folds sentence segments into kanji and kana forms.
///
/// Joining the `unlifted` text of every piece gives back `kanji`.
///
/// ```rust
/// use jisho_core::ruby::{Segment, reconstruct};
///
/// let text = reconstruct(&[
///     Segment::Ruby { lifted: "い".into(), unlifted: "行きます".into() },
///     Segment::Plain("。".into()),
/// ]);
/// assert_eq!(text.kanji, "行きます。");
/// assert_eq!(text.kana, "いきます。");
/// ```
pub fn reconstruct(segments: &[Segment]) -> RubyText {
    let mut result = RubyText::default();

    for segment in segments {
        match segment {
            Segment::Ruby { lifted, unlifted } => {
                result.kanji.push_str(unlifted);
                result.kana.push_str(lifted);
                result.kana.push_str(uncovered_ending(unlifted));
                result
                    .pieces
                    .push(SentencePiece { lifted: lifted.clone(), unlifted: unlifted.clone() });
            }
            Segment::Plain(text) => {
                result.kanji.push_str(text);
                result.kana.push_str(text);
                result.pieces.push(SentencePiece { lifted: String::new(), unlifted: text.clone() });
            }
        }
    }

    result
}

/// Reads the segments of a rendered sentence list (`<ul>` of `<li>` runs,
/// possibly interleaved with bare text).
pub fn segments_from_element(list: &Element<'_>) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();

    for node in list.child_nodes() {
        match node {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    segments.push(Segment::Plain(text.to_string()));
                }
            }
            Node::Element(element) if element.tag_name() == "li" => {
                let lifted = element.text_of(".furigana")?.trim().to_string();
                let unlifted = match element.select_first(".unlinked")? {
                    Some(base) => base.text(),
                    None => element.text_excluding(&[".furigana"])?,
                };
                let unlifted = unlifted.trim().to_string();

                if lifted.is_empty() {
                    if !unlifted.is_empty() {
                        segments.push(Segment::Plain(unlifted));
                    }
                } else {
                    segments.push(Segment::Ruby { lifted, unlifted });
                }
            }
            Node::Element(element) => {
                let text = element.text();
                let text = text.trim();
                if !text.is_empty() {
                    segments.push(Segment::Plain(text.to_string()));
                }
            }
        }
    }

    Ok(segments)
}
