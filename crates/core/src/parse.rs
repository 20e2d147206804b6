//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the resulting tree with CSS selectors. Parsing is
//! lenient: malformed or incomplete markup still produces a tree, and an
//! empty or non-HTML body simply yields a document with no matching
//! elements.
//!
//! # Example
//!
//! ```rust
//! use sitegauge_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let title = doc.title();
//! let paragraphs = doc.select("p.content").unwrap();
//! ```

use scraper::{Html, Selector};
use url::Url;

use crate::{Result, SitegaugeError};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and reading common metadata like the title and meta
/// tag contents. Evaluators hold shared references to one Document and never
/// mutate it.
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Lenient, best-effort tree construction: this never fails, matching
    /// how browsers treat broken markup.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sitegauge_core::parse::Document;
    ///
    /// let doc = Document::parse("<html><head><title>Test</title></head></html>");
    /// assert_eq!(doc.title(), Some("Test".to_string()));
    /// ```
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        Self { html, base_url: None }
    }

    /// Parses HTML and records the page URL.
    ///
    /// The URL is used to classify links as internal or external. An
    /// unparseable URL is simply dropped; link classification then treats
    /// only scheme-relative heuristics.
    pub fn parse_with_url(html: &str, url: &str) -> Self {
        let base_url = Url::parse(url).ok();
        let html = Html::parse_document(html);
        Self { html, base_url }
    }

    /// Gets the page URL recorded at parse time, if any.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SitegaugeError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sitegauge_core::parse::Document;
    ///
    /// let doc = Document::parse(r#"<p class="content">First</p><p class="content">Second</p>"#);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| SitegaugeError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Counts elements matching a CSS selector.
    ///
    /// Convenience for rule evaluators that only need cardinality.
    pub fn count(&self, selector: &str) -> usize {
        self.select(selector).map(|els| els.len()).unwrap_or(0)
    }

    /// Gets the title of the document.
    ///
    /// Returns the trimmed content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Gets meta tag content by `name` or `property` attribute.
    ///
    /// Checks `meta[name="..."]` first, then `meta[property="..."]`, and
    /// returns the `content` attribute of the first match.
    pub fn meta_content(&self, attr: &str) -> Option<String> {
        for pattern in ["name", "property"] {
            let selector = format!("meta[{}=\"{}\"]", pattern, attr);
            if let Ok(elements) = self.select(&selector)
                && let Some(el) = elements.first()
                && let Some(content) = el.attr("content")
            {
                return Some(content.to_string());
            }
        }

        None
    }

    /// Gets all text content from the document.
    ///
    /// Returns the concatenation of all text nodes in the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef for typed DOM access.
///
/// Element represents a single node in the HTML document tree and provides
/// methods for accessing its attributes, text content, and descendants.
///
/// # Example
///
/// ```rust
/// use sitegauge_core::parse::Document;
///
/// let doc = Document::parse(r#"<a href="https://example.com">Link text</a>"#);
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Returns true if the attribute is present with a non-empty value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some_and(|v| !v.trim().is_empty())
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase tag name (e.g., "div", "a", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`SitegaugeError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| SitegaugeError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}
