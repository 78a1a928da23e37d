//! Parsed page snapshot with structural query helpers.

use scraper::{Html, Selector};

/// A product page captured for analysis: the originating address plus the
/// parsed document. Parsing happens once at construction; all lookups are
/// read-only queries against the parsed tree.
pub struct PageSnapshot {
    url: String,
    document: Html,
}

impl PageSnapshot {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }

    /// The address this snapshot was taken from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text content of the first element matching a CSS selector.
    /// An unparsable selector or no match is a miss, never an error.
    pub fn first_text(&self, selector_str: &str) -> Option<String> {
        let selector = Selector::parse(selector_str).ok()?;
        self.document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
    }

    /// Value of a named attribute on the first element matching a CSS selector
    pub fn first_attr(&self, selector_str: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector_str).ok()?;
        self.document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(|v| v.trim().to_string())
    }

    /// Visible text of the entire body, space-joined
    pub fn body_text(&self) -> String {
        let Ok(selector) = Selector::parse("body") else {
            return String::new();
        };
        self.document
            .select(&selector)
            .next()
            .map(|body| body.text().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    /// Text content of every embedded script element
    pub fn script_texts(&self) -> Vec<String> {
        let Ok(selector) = Selector::parse("script") else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}
