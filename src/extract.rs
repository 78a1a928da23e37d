//! Ordered-fallback attribute extraction from a product page snapshot.
//!
//! Product markup varies across marketplace page templates, so every
//! attribute is looked up through an ordered table of (strategy, parser)
//! pairs. Evaluation walks the table in order and stops at the first entry
//! whose parser accepts the raw value it found. A structurally present but
//! malformed value (non-numeric price text, out-of-range rating) is a miss,
//! not an error: the next entry is tried. New page layouts are supported by
//! appending table entries, not by new branches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DealrankError, Result};
use crate::product::ProductRecord;
use crate::snapshot::PageSnapshot;

/// Where to look for a raw attribute value
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Text content of the first element matching a CSS selector
    Text(&'static str),
    /// A named attribute on the first element matching a CSS selector
    Attr(&'static str, &'static str),
    /// The snapshot's source address
    Address,
    /// Each embedded script's text content, in document order
    ScriptScan,
    /// The whole body's visible text. Lowest confidence; always the final
    /// entry of a table where it appears.
    BodyScan,
}

type Parser<T> = fn(&str) -> Option<T>;

const TITLE_STRATEGIES: &[(Strategy, Parser<String>)] = &[
    (Strategy::Text("#productTitle"), parse_title),
    (Strategy::Text(".product-title"), parse_title),
    (
        Strategy::Text(r#"[data-automation-id="product-title"]"#),
        parse_title,
    ),
    (Strategy::Text("h1.a-size-large"), parse_title),
    (Strategy::Text("h1 span"), parse_title),
];

const PRICE_STRATEGIES: &[(Strategy, Parser<f64>)] = &[
    (Strategy::Text(".a-price-whole"), parse_price),
    (Strategy::Text(".a-offscreen"), parse_price),
    (Strategy::Text(".a-price .a-offscreen"), parse_price),
    (
        Strategy::Text(".a-price-symbol + .a-price-whole"),
        parse_price,
    ),
    (
        Strategy::Text(r#"[data-automation-id="price"] .a-price-whole"#),
        parse_price,
    ),
    (Strategy::Text(".a-price-range .a-offscreen"), parse_price),
    (Strategy::BodyScan, scan_price_token),
];

const RATING_STRATEGIES: &[(Strategy, Parser<f64>)] = &[
    (
        Strategy::Text(r#"[data-hook="average-star-rating"] .a-icon-alt"#),
        parse_rating,
    ),
    (Strategy::Text(".a-icon-star .a-icon-alt"), parse_rating),
    (
        Strategy::Attr(r#"[aria-label*="stars"]"#, "aria-label"),
        parse_rating,
    ),
    (
        Strategy::Text(".reviewCountTextLinkedHistogram .a-icon-alt"),
        parse_rating,
    ),
];

const REVIEW_STRATEGIES: &[(Strategy, Parser<u64>)] = &[
    (
        Strategy::Text(r#"[data-hook="total-review-count"]"#),
        parse_review_count,
    ),
    (Strategy::Text("#acrCustomerReviewText"), parse_review_count),
    (
        Strategy::Text(r##".a-link-normal[href*="#customerReviews"]"##),
        parse_review_count,
    ),
    (
        Strategy::Text(r#"[data-automation-id="reviews-block"] a"#),
        parse_review_count,
    ),
];

const ASIN_STRATEGIES: &[(Strategy, Parser<String>)] = &[
    (Strategy::Address, parse_asin_from_url),
    (Strategy::Attr("[data-asin]", "data-asin"), parse_asin_token),
    (Strategy::ScriptScan, parse_asin_from_script),
];

/// Currency-formatted token for the whole-body price scan
static PRICE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[\d,]+\.?\d*").expect("Invalid price token regex"));

/// First decimal number in rating text like "4.6 out of 5 stars"
static DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)").expect("Invalid decimal regex"));

/// First integer token in review-count text
static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").expect("Invalid integer regex"));

/// ASIN in the /dp/ or /gp/product/ path slot. The trailing boundary keeps
/// an 11+ character token from matching via its 10-character prefix.
static ASIN_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?:dp|gp/product)/([A-Z0-9]{10})(?:[^A-Z0-9]|$)").expect("Invalid ASIN URL regex")
});

/// A bare token that is exactly ASIN-shaped
static ASIN_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{10}$").expect("Invalid ASIN token regex"));

/// Quoted asin key/value pair inside embedded script text
static ASIN_SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""asin":"([A-Z0-9]{10})""#).expect("Invalid ASIN script regex"));

/// Extract a product record from a page snapshot.
///
/// Title is the one required attribute: if no strategy yields a non-empty
/// title, the whole extraction fails. Every other attribute independently
/// falls back to `None` once its table is exhausted.
pub fn extract(snapshot: &PageSnapshot) -> Result<ProductRecord> {
    let title = run_strategies(snapshot, TITLE_STRATEGIES).ok_or_else(|| {
        DealrankError::ExtractionError("no product title found on page".into())
    })?;

    Ok(ProductRecord {
        title,
        price: run_strategies(snapshot, PRICE_STRATEGIES),
        rating: run_strategies(snapshot, RATING_STRATEGIES),
        review_count: run_strategies(snapshot, REVIEW_STRATEGIES),
        asin: run_strategies(snapshot, ASIN_STRATEGIES),
        url: snapshot.url().to_string(),
    })
}

/// Walk a strategy table in order; first parser-accepted value wins
fn run_strategies<T>(snapshot: &PageSnapshot, table: &[(Strategy, Parser<T>)]) -> Option<T> {
    for (strategy, parse) in table {
        let found = match *strategy {
            Strategy::Text(selector) => snapshot.first_text(selector).and_then(|raw| parse(&raw)),
            Strategy::Attr(selector, attr) => {
                snapshot.first_attr(selector, attr).and_then(|raw| parse(&raw))
            }
            Strategy::Address => parse(snapshot.url()),
            Strategy::ScriptScan => snapshot.script_texts().iter().find_map(|text| parse(text)),
            Strategy::BodyScan => parse(&snapshot.body_text()),
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Non-empty after trimming; no further validation
fn parse_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strip currency symbols and grouping separators, then require a strictly
/// positive decimal parse
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let price: f64 = cleaned.trim().parse().ok()?;
    if price.is_finite() && price > 0.0 {
        Some(price)
    } else {
        None
    }
}

/// Last-resort price lookup: first currency-formatted token anywhere in the
/// body text
fn scan_price_token(body: &str) -> Option<f64> {
    let token = PRICE_TOKEN_RE.find(body)?;
    parse_price(token.as_str())
}

/// First decimal number in the text, accepted only within the rating domain
fn parse_rating(raw: &str) -> Option<f64> {
    let captures = DECIMAL_RE.captures(raw)?;
    let rating: f64 = captures.get(1)?.as_str().parse().ok()?;
    if (0.0..=5.0).contains(&rating) {
        Some(rating)
    } else {
        None
    }
}

/// Strip grouping separators and whitespace, then take the first integer
/// token. Non-negative by type.
fn parse_review_count(raw: &str) -> Option<u64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let captures = INT_RE.captures(&cleaned)?;
    captures.get(1)?.as_str().parse().ok()
}

fn parse_asin_from_url(url: &str) -> Option<String> {
    ASIN_URL_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn parse_asin_token(raw: &str) -> Option<String> {
    if ASIN_TOKEN_RE.is_match(raw) {
        Some(raw.to_string())
    } else {
        None
    }
}

fn parse_asin_from_script(script: &str) -> Option<String> {
    ASIN_SCRIPT_RE
        .captures(script)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Marketplace hosts whose product pages this extractor understands
const MARKETPLACE_DOMAINS: &[&str] = &[
    "amazon.com",
    "amazon.co.uk",
    "amazon.ca",
    "amazon.de",
    "amazon.fr",
    "amazon.it",
    "amazon.es",
    "amazon.in",
    "amazon.com.au",
    "amazon.co.jp",
];

/// Whether a live URL points at a supported marketplace product page
pub fn is_product_page(url: &str) -> bool {
    let Ok(parsed) = url::Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let path = parsed.path();

    MARKETPLACE_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
        && (path.contains("/dp/") || path.contains("/gp/product/"))
}
