//! Cost-benefit scoring and ranking of candidate products.

use serde::{Deserialize, Serialize};

use crate::product::{Candidate, ScoredCandidate, DEFAULT_PRICE};

/// Hard upper bound on any score, regardless of configured weights
const SCORE_CEILING: f64 = 100.0;

/// Rating scale maximum (stars)
const RATING_SCALE: f64 = 5.0;

/// Per-component contribution caps for the cost-benefit score.
///
/// Each weight caps (or for price, scales) one component; they need not sum
/// to 100. The final score is clamped to [0, 100] independently of the
/// weights in play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub price_weight: f64,
    pub rating_weight: f64,
    pub review_weight: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            price_weight: 30.0,
            rating_weight: 40.0,
            review_weight: 30.0,
        }
    }
}

impl Weights {
    /// A usable weight set: any negative or non-finite weight invalidates
    /// the whole configuration and the defaults are used instead
    pub fn sanitized(self) -> Self {
        let usable = |w: f64| w.is_finite() && w >= 0.0;
        if usable(self.price_weight) && usable(self.rating_weight) && usable(self.review_weight) {
            self
        } else {
            Self::default()
        }
    }
}

/// Score one candidate against a reference price. Result is in [0, 100].
///
/// Components:
/// 1. price: `max(0, (2·ref − price) / ref) × price_weight` — zero at or
///    above twice the reference price, linear below it
/// 2. rating: `(rating / 5) × rating_weight`
/// 3. reviews: `min(review_weight, log10(reviews + 1) × 10)` — logarithmic
///    so count differences matter less at high volumes
///
/// The sum is capped at 100 last, after all components.
pub fn cost_benefit_score(candidate: &Candidate, reference_price: f64, weights: &Weights) -> f64 {
    let weights = weights.sanitized();
    let reference_price = if reference_price.is_finite() && reference_price > 0.0 {
        reference_price
    } else {
        DEFAULT_PRICE
    };

    let price_component = ((2.0 * reference_price - candidate.price) / reference_price)
        .max(0.0)
        * weights.price_weight;
    let rating_component = (candidate.rating / RATING_SCALE) * weights.rating_weight;
    let review_component =
        (((candidate.review_count as f64) + 1.0).log10() * 10.0).min(weights.review_weight);

    (price_component + rating_component + review_component).min(SCORE_CEILING)
}

/// Score and order candidates: stable sort by score descending, truncate to
/// `max_products`, and mark exactly the first element of a non-empty result
/// as recommended. An empty input yields an empty output.
pub fn rank(
    candidates: Vec<Candidate>,
    reference_price: f64,
    weights: &Weights,
    max_products: usize,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let score = cost_benefit_score(&candidate, reference_price, weights);
            ScoredCandidate {
                candidate,
                score,
                recommended: false,
            }
        })
        .collect();

    // sort_by is stable: equal scores keep their input order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(max_products);

    if let Some(top) = scored.first_mut() {
        top.recommended = true;
    }

    scored
}
