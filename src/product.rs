//! Value objects shared by the extractor, variant generator, and ranker.

use serde::{Deserialize, Serialize};

/// Price substituted when the reference page carried no usable price
pub const DEFAULT_PRICE: f64 = 25.99;

/// Rating substituted when the reference page carried no usable rating
pub const DEFAULT_RATING: f64 = 4.0;

/// Review count substituted when the reference page carried no usable count
pub const DEFAULT_REVIEWS: u64 = 100;

/// Normalized extraction result for one product page.
///
/// A record always has a title: extraction reports total failure rather than
/// construct a titleless record. Every other attribute degrades to `None`
/// independently when no strategy produced a valid value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    /// 10-character uppercase alphanumeric marketplace identifier
    pub asin: Option<String>,
    /// Address the record was extracted from
    pub url: String,
}

impl ProductRecord {
    pub fn price_or_default(&self) -> f64 {
        self.price.unwrap_or(DEFAULT_PRICE)
    }

    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    pub fn review_count_or_default(&self) -> u64 {
        self.review_count.unwrap_or(DEFAULT_REVIEWS)
    }
}

/// A product considered in one ranking pass. Created per request, never
/// mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub review_count: u64,
    pub features: Vec<String>,
    pub url: String,
}

/// A candidate plus its computed score and ranking outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Cost-benefit score in [0, 100]
    pub score: f64,
    /// Set on exactly the top-ranked element of a non-empty result
    pub recommended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unknown_fields() {
        let record = ProductRecord {
            title: "Widget".into(),
            price: None,
            rating: None,
            review_count: None,
            asin: None,
            url: "https://example.com".into(),
        };
        assert_eq!(record.price_or_default(), DEFAULT_PRICE);
        assert_eq!(record.rating_or_default(), DEFAULT_RATING);
        assert_eq!(record.review_count_or_default(), DEFAULT_REVIEWS);
    }

    #[test]
    fn test_known_fields_pass_through() {
        let record = ProductRecord {
            title: "Widget".into(),
            price: Some(9.99),
            rating: Some(4.6),
            review_count: Some(12),
            asin: Some("B00EXAMP10".into()),
            url: "https://example.com".into(),
        };
        assert_eq!(record.price_or_default(), 9.99);
        assert_eq!(record.rating_or_default(), 4.6);
        assert_eq!(record.review_count_or_default(), 12);
    }
}
