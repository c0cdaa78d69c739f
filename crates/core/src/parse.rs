//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types used by the
//! sentence and word page extractors. They wrap `scraper` and add the few
//! walks the extractors need: direct children, child nodes including text,
//! and text collection that skips excluded subtrees.
//!
//! # Example
//!
//! ```rust
//! use jisho_core::parse::Document;
//!
//! let html = r#"<div class="sentence"><span class="furigana">くるま</span>車<span class="english">Car</span></div>"#;
//!
//! let doc = Document::parse(html).unwrap();
//! let sentence = &doc.select(".sentence").unwrap()[0];
//! assert_eq!(sentence.text_excluding(&[".english", ".furigana"]).unwrap(), "車");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{JishoError, Result};

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| JishoError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup still yields a document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jisho_core::parse::Document;
    ///
    /// let doc = Document::parse("<html><body><h1>車</h1></body></html>").unwrap();
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`JishoError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jisho_core::parse::Document;
    ///
    /// let html = r#"<span class="concept_light-tag">Common word</span><span class="concept_light-tag">JLPT N5</span>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let tags = doc.select(".concept_light-tag").unwrap();
    /// assert_eq!(tags.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element matching a CSS selector, if any.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }
}

/// A child node of an element: either an element or a run of text.
///
/// Comments and processing instructions are not represented.
#[derive(Clone, Debug)]
pub enum Node<'a> {
    Element(Element<'a>),
    Text(String),
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use jisho_core::parse::Document;
///
/// let html = r#"<audio><source src="//cdn.example/kuruma.mp3" type="audio/mpeg"></audio>"#;
/// let doc = Document::parse(html).unwrap();
/// let source = &doc.select("audio > source").unwrap()[0];
///
/// assert_eq!(source.attr("type"), Some("audio/mpeg"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Whether the element carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    /// Direct element children, in document order.
    pub fn children(&self) -> Vec<Element<'a>> {
        self.element
            .children()
            .filter_map(ElementRef::wrap)
            .map(|element| Element { element })
            .collect()
    }

    /// Direct child nodes, elements and text runs, in document order.
    pub fn child_nodes(&self) -> Vec<Node<'a>> {
        self.element
            .children()
            .filter_map(|child| {
                if let Some(text) = child.value().as_text() {
                    let text: &str = text;
                    Some(Node::Text(text.to_string()))
                } else {
                    ElementRef::wrap(child).map(|element| Node::Element(Element { element }))
                }
            })
            .collect()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`JishoError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first descendant matching a CSS selector, if any.
    pub fn select_first(&self, selector: &str) -> Result<Option<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Concatenated text of the first descendant matching `selector`.
    ///
    /// Missing descendants give an empty string.
    pub fn text_of(&self, selector: &str) -> Result<String> {
        Ok(self.select_first(selector)?.map(|el| el.text()).unwrap_or_default())
    }

    /// Text content, skipping every subtree that matches one of `excluded`.
    pub fn text_excluding(&self, excluded: &[&str]) -> Result<String> {
        Ok(self.text_nodes_excluding(excluded)?.concat())
    }

    /// The individual text runs of this element, skipping every subtree
    /// that matches one of `excluded`.
    pub fn text_nodes_excluding(&self, excluded: &[&str]) -> Result<Vec<String>> {
        let selectors = excluded.iter().map(|s| compile(s)).collect::<Result<Vec<_>>>()?;
        let mut out = Vec::new();
        collect_text(self.element, &selectors, &mut out);
        Ok(out)
    }
}

fn collect_text(element: ElementRef<'_>, excluded: &[Selector], out: &mut Vec<String>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let text: &str = text;
            out.push(text.to_string());
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if excluded.iter().any(|sel| sel.matches(&child_element)) {
                continue;
            }
            collect_text(child_element, excluded, out);
        }
    }
}
