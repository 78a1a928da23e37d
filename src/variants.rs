//! Deterministic candidate generation from a reference product.
//!
//! This generator stands in for a real catalog lookup: it derives a fixed
//! set of priced/rated variants from the reference record. Anything that
//! yields `Vec<Candidate>` can replace it without touching the ranker.

use crate::product::{Candidate, ProductRecord};

/// Rating floor applied to generated variants. Deliberately tighter than the
/// rating domain's 0.0 lower bound: very low-rated alternatives are never
/// presented.
const VARIANT_RATING_FLOOR: f64 = 3.0;

/// Rating ceiling for generated variants (the scale maximum)
const VARIANT_RATING_CEIL: f64 = 5.0;

/// Maximum characters of a variant title before truncation
const MAX_TITLE_CHARS: usize = 80;

struct VariantSpec {
    suffix: &'static str,
    price_multiplier: f64,
    rating_bonus: f64,
    reviews_multiplier: f64,
    features: &'static [&'static str],
}

const VARIANTS: &[VariantSpec] = &[
    VariantSpec {
        suffix: " Pro",
        price_multiplier: 1.3,
        rating_bonus: 0.2,
        reviews_multiplier: 0.8,
        features: &["Premium Quality", "Extended Warranty"],
    },
    VariantSpec {
        suffix: " Lite",
        price_multiplier: 0.7,
        rating_bonus: -0.1,
        reviews_multiplier: 1.2,
        features: &["Budget Friendly", "Basic Features"],
    },
    VariantSpec {
        suffix: " Premium",
        price_multiplier: 1.6,
        rating_bonus: 0.3,
        reviews_multiplier: 0.6,
        features: &["Top Rated", "Premium Materials"],
    },
    VariantSpec {
        suffix: " Standard",
        price_multiplier: 0.9,
        rating_bonus: 0.0,
        reviews_multiplier: 1.1,
        features: &["Good Value", "Reliable"],
    },
    VariantSpec {
        suffix: " Deluxe",
        price_multiplier: 1.4,
        rating_bonus: 0.25,
        reviews_multiplier: 0.7,
        features: &["Enhanced Features", "Popular Choice"],
    },
];

/// Derive candidate variants from a reference record. Pure and
/// deterministic: the same record always yields the same candidates, in the
/// same order. Unknown reference fields use the shared fallback constants.
pub fn generate_variants(reference: &ProductRecord) -> Vec<Candidate> {
    let base_price = reference.price_or_default();
    let base_rating = reference.rating_or_default();
    let base_reviews = reference.review_count_or_default();

    VARIANTS
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let price = round2(base_price * spec.price_multiplier);
            let rating = round1(
                (base_rating + spec.rating_bonus)
                    .clamp(VARIANT_RATING_FLOOR, VARIANT_RATING_CEIL),
            );
            let review_count = ((base_reviews as f64) * spec.reviews_multiplier).floor() as u64;

            Candidate {
                title: truncate_title(&format!("{}{}", reference.title, spec.suffix)),
                price,
                rating,
                review_count,
                features: spec.features.iter().map(|f| f.to_string()).collect(),
                url: format!("https://amazon.com/dp/EXAMPLE{}", index + 1),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Truncate to a character budget (not bytes), with an ellipsis only when
/// something was actually cut. Safe for non-ASCII titles.
fn truncate_title(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= MAX_TITLE_CHARS {
        title.to_string()
    } else {
        format!(
            "{}...",
            chars[..MAX_TITLE_CHARS - 3].iter().collect::<String>()
        )
    }
}
