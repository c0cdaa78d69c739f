use std::fmt::Write;

use crate::kanji::{KanjiRecord, YomiExample};
use crate::phrase::PhraseScrapeResult;
use crate::ruby::SentencePiece;
use crate::search::RawApiResult;
use crate::sentences::ExampleSearchResult;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// List the furigana pieces under each sentence
    pub show_pieces: bool,
}

/// Records that can be rendered as human-readable text
pub trait TextRender {
    fn render_text(&self, config: &TextConfig) -> String;
}

/// Plain text formatter for lookup results
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert<T: TextRender + ?Sized>(&self, value: &T) -> String {
        convert_to_text(value, &self.config)
    }
}

/// Render a lookup result as plain text with the given configuration
pub fn convert_to_text<T: TextRender + ?Sized>(value: &T, config: &TextConfig) -> String {
    value.render_text(config).trim_end().to_string()
}

fn header(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count().max(1) * 2))
}

fn not_found(query: &str) -> String {
    format!("No results for {}\n", query)
}

fn field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "{:<14} {}", format!("{}:", label), value);
}

fn list_field(out: &mut String, label: &str, values: &[String], separator: &str) {
    if !values.is_empty() {
        field(out, label, values.join(separator));
    }
}

fn compounds(out: &mut String, label: &str, examples: &[YomiExample]) {
    if examples.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}:", label);
    for example in examples {
        let _ = writeln!(out, "  {} 【{}】 {}", example.example, example.reading, example.meaning);
    }
}

fn pieces(out: &mut String, pieces: &[SentencePiece]) {
    let rendered: Vec<String> = pieces
        .iter()
        .map(|piece| {
            if piece.lifted.is_empty() {
                piece.unlifted.clone()
            } else {
                format!("{}[{}]", piece.unlifted, piece.lifted)
            }
        })
        .collect();
    let _ = writeln!(out, "    {}", rendered.join(" "));
}

impl TextRender for KanjiRecord {
    fn render_text(&self, _config: &TextConfig) -> String {
        let Some(details) = &self.details else {
            return not_found(&self.query);
        };

        let mut out = header(&self.query);
        if let Some(meaning) = &details.meaning {
            field(&mut out, "Meaning", meaning);
        }
        list_field(&mut out, "Kunyomi", &details.kunyomi, "、");
        list_field(&mut out, "Onyomi", &details.onyomi, "、");
        if let Some(strokes) = details.stroke_count {
            field(&mut out, "Strokes", strokes);
        }
        if let Some(taught_in) = &details.taught_in {
            field(&mut out, "Taught in", taught_in);
        }
        if let Some(jlpt) = &details.jlpt_level {
            field(&mut out, "JLPT", jlpt);
        }
        if let Some(rank) = details.newspaper_frequency_rank {
            field(&mut out, "Frequency", format!("{} of 2500", rank));
        }
        if let Some(radical) = &details.radical {
            let forms = radical.forms.as_ref().map(|f| format!(" ({})", f.join(", "))).unwrap_or_default();
            field(&mut out, "Radical", format!("{}{} {}", radical.symbol, forms, radical.meaning));
        }
        list_field(&mut out, "Parts", &details.parts, " ");
        compounds(&mut out, "On reading compounds", &details.onyomi_examples);
        compounds(&mut out, "Kun reading compounds", &details.kunyomi_examples);
        out.push('\n');
        field(&mut out, "Source", &self.uri);
        out
    }
}

impl TextRender for ExampleSearchResult {
    fn render_text(&self, config: &TextConfig) -> String {
        if !self.found {
            return not_found(&self.query);
        }

        let mut out = header(&self.phrase);
        for (index, sentence) in self.results.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", index + 1, sentence.kanji);
            let _ = writeln!(out, "     {}", sentence.kana);
            let _ = writeln!(out, "     {}", sentence.english);
            if config.show_pieces {
                pieces(&mut out, &sentence.pieces);
            }
        }
        out
    }
}

impl TextRender for PhraseScrapeResult {
    fn render_text(&self, config: &TextConfig) -> String {
        let Some(details) = &self.details else {
            return not_found(&self.query);
        };

        let mut out = header(&self.query);
        list_field(&mut out, "Tags", &details.tags, ", ");
        for (index, meaning) in details.meanings.iter().enumerate() {
            if !meaning.tags.is_empty() {
                let _ = writeln!(out, "\n[{}]", meaning.tags.join(", "));
            }
            let _ = writeln!(out, "{:>3}. {}", index + 1, meaning.definition);
            if !meaning.definition_abstract.is_empty() {
                let _ = writeln!(out, "     {}", meaning.definition_abstract);
            }
            if !meaning.supplemental.is_empty() {
                let _ = writeln!(out, "     ({})", meaning.supplemental.join(", "));
            }
            if !meaning.see_also_terms.is_empty() {
                let _ = writeln!(out, "     See also: {}", meaning.see_also_terms.join(", "));
            }
            for sentence in &meaning.sentences {
                let _ = writeln!(out, "     > {}", sentence.japanese);
                let _ = writeln!(out, "       {}", sentence.english);
                if config.show_pieces {
                    pieces(&mut out, &sentence.pieces);
                }
            }
        }
        if !details.other_forms.is_empty() {
            let forms: Vec<String> = details
                .other_forms
                .iter()
                .map(|form| {
                    if form.kana.is_empty() { form.kanji.clone() } else { format!("{} 【{}】", form.kanji, form.kana) }
                })
                .collect();
            out.push('\n');
            field(&mut out, "Other forms", forms.join("、"));
        }
        list_field(&mut out, "Notes", &details.notes, "; ");
        for audio in &details.audio {
            field(&mut out, "Audio", format!("{} ({})", audio.uri, audio.mimetype));
        }
        out
    }
}

impl TextRender for RawApiResult {
    fn render_text(&self, _config: &TextConfig) -> String {
        let mut out = String::new();
        if self.data.is_empty() {
            out.push_str("No results\n");
            return out;
        }

        for entry in &self.data {
            let spellings: Vec<String> = entry
                .japanese
                .iter()
                .map(|japanese| match (&japanese.word, &japanese.reading) {
                    (Some(word), Some(reading)) => format!("{} 【{}】", word, reading),
                    (Some(word), None) => word.clone(),
                    (None, Some(reading)) => reading.clone(),
                    (None, None) => String::new(),
                })
                .filter(|s| !s.is_empty())
                .collect();

            let mut title = spellings.join("、");
            if title.is_empty() {
                title = entry.slug.clone();
            }
            if entry.is_common == Some(true) {
                title.push_str("  (common)");
            }
            let _ = writeln!(out, "{}", title);

            for (index, sense) in entry.senses.iter().enumerate() {
                let pos = if sense.parts_of_speech.is_empty() {
                    String::new()
                } else {
                    format!("[{}] ", sense.parts_of_speech.join(", "))
                };
                let _ = writeln!(out, "{:>3}. {}{}", index + 1, pos, sense.english_definitions.join("; "));
            }
            out.push('\n');
        }
        out
    }
}
