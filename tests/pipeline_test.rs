//! End-to-end tests: snapshot -> extraction -> variant generation -> ranking

use dealrank::extract::{extract, is_product_page};
use dealrank::product::{DEFAULT_PRICE, DEFAULT_RATING, DEFAULT_REVIEWS};
use dealrank::score::{rank, Weights};
use dealrank::snapshot::PageSnapshot;
use dealrank::variants::generate_variants;

// ============================================================================
// Fixtures: product pages in decreasing order of markup quality
// ============================================================================

const WELL_FORMED_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Acme Anvil - Amazon.com</title></head>
<body>
    <h1><span id="productTitle">
        Acme Anvil, 10 lb, Drop-Forged Steel
    </span></h1>
    <div class="a-price">
        <span class="a-offscreen">$25.99</span>
    </div>
    <span class="a-icon-star"><span class="a-icon-alt">4.0 out of 5 stars</span></span>
    <span id="acrCustomerReviewText">100 ratings</span>
    <script>
        var pageState = {"asin":"B00ANVIL10","marketplace":"retail"};
    </script>
</body>
</html>
"#;

// No structural price or rating markup; price only appears in running text
const DEGRADED_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<body>
    <h1 class="a-size-large">Acme Anvil, 10 lb</h1>
    <p>Get yours today for only $25.99 with free shipping.</p>
    <p>Customers love this anvil.</p>
</body>
</html>
"#;

// Price, rating, and reviews present, but nothing title-shaped
const TITLELESS_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<body>
    <div class="a-price"><span class="a-offscreen">$25.99</span></div>
    <span class="a-icon-star"><span class="a-icon-alt">4.8 out of 5 stars</span></span>
    <span id="acrCustomerReviewText">9,000 ratings</span>
</body>
</html>
"#;

const PRODUCT_URL: &str = "https://www.amazon.com/Acme-Anvil/dp/B00ANVIL10?ref=sr_1_1";

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_well_formed_page_extracts_every_attribute() {
    let snapshot = PageSnapshot::new(PRODUCT_URL, WELL_FORMED_PAGE);
    let record = extract(&snapshot).unwrap();

    assert_eq!(record.title, "Acme Anvil, 10 lb, Drop-Forged Steel");
    assert_eq!(record.price, Some(25.99));
    assert_eq!(record.rating, Some(4.0));
    assert_eq!(record.review_count, Some(100));
    assert_eq!(record.asin.as_deref(), Some("B00ANVIL10"));
    assert_eq!(record.url, PRODUCT_URL);
}

#[test]
fn test_degraded_page_extracts_partially() {
    let snapshot = PageSnapshot::new("https://www.amazon.com/product", DEGRADED_PAGE);
    let record = extract(&snapshot).unwrap();

    assert_eq!(record.title, "Acme Anvil, 10 lb");
    // Body-scan fallback found the price in running text
    assert_eq!(record.price, Some(25.99));
    // Nothing rating- or review-shaped anywhere: unknown, not an error
    assert_eq!(record.rating, None);
    assert_eq!(record.review_count, None);
    assert_eq!(record.asin, None);
}

#[test]
fn test_titleless_page_is_total_failure() {
    let snapshot = PageSnapshot::new(PRODUCT_URL, TITLELESS_PAGE);
    assert!(extract(&snapshot).is_err());
}

#[test]
fn test_empty_document_is_total_failure() {
    let snapshot = PageSnapshot::new(PRODUCT_URL, "");
    assert!(extract(&snapshot).is_err());
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_pipeline_worked_example() {
    let snapshot = PageSnapshot::new(PRODUCT_URL, WELL_FORMED_PAGE);
    let record = extract(&snapshot).unwrap();

    let candidates = generate_variants(&record);
    assert_eq!(candidates.len(), 5);

    // The Lite variant of a 25.99 / 4.0 / 100-review reference
    let lite = &candidates[1];
    assert_eq!(lite.price, 18.19);
    assert_eq!(lite.rating, 3.9);
    assert_eq!(lite.review_count, 120);

    let ranked = rank(candidates, record.price_or_default(), &Weights::default(), 5);
    assert_eq!(ranked.len(), 5);

    // Scores descend and exactly one candidate is recommended
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(ranked[0].recommended);
    assert_eq!(ranked.iter().filter(|c| c.recommended).count(), 1);

    // Every score is in bounds
    for scored in &ranked {
        assert!((0.0..=100.0).contains(&scored.score));
    }

    // The Lite variant's score, by the documented formula
    let lite_score = ranked
        .iter()
        .find(|c| c.candidate.title.ends_with(" Lite"))
        .map(|c| c.score)
        .unwrap();
    let expected = (2.0 * 25.99 - 18.19) / 25.99 * 30.0 + (3.9 / 5.0) * 40.0
        + (121.0_f64).log10() * 10.0;
    assert!((lite_score - expected).abs() < 1e-9);
}

#[test]
fn test_pipeline_on_degraded_page_uses_fallback_constants() {
    let snapshot = PageSnapshot::new("https://www.amazon.com/product", DEGRADED_PAGE);
    let record = extract(&snapshot).unwrap();

    // Price was found on the page; rating and reviews fall back
    assert_eq!(record.price_or_default(), 25.99);
    assert_eq!(record.rating_or_default(), DEFAULT_RATING);
    assert_eq!(record.review_count_or_default(), DEFAULT_REVIEWS);

    let ranked = rank(
        generate_variants(&record),
        record.price_or_default(),
        &Weights::default(),
        5,
    );
    assert_eq!(ranked.len(), 5);
    assert!(ranked[0].recommended);
}

#[test]
fn test_pipeline_respects_max_products() {
    let snapshot = PageSnapshot::new(PRODUCT_URL, WELL_FORMED_PAGE);
    let record = extract(&snapshot).unwrap();
    let ranked = rank(
        generate_variants(&record),
        record.price_or_default(),
        &Weights::default(),
        3,
    );
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked.iter().filter(|c| c.recommended).count(), 1);
}

#[test]
fn test_pipeline_is_deterministic() {
    let snapshot = PageSnapshot::new(PRODUCT_URL, WELL_FORMED_PAGE);
    let record = extract(&snapshot).unwrap();

    let first = rank(
        generate_variants(&record),
        record.price_or_default(),
        &Weights::default(),
        5,
    );
    let second = rank(
        generate_variants(&record),
        record.price_or_default(),
        &Weights::default(),
        5,
    );
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.candidate.title, b.candidate.title);
        assert_eq!(a.score, b.score);
        assert_eq!(a.recommended, b.recommended);
    }
}

#[test]
fn test_default_price_constant_matches_generator_fallback() {
    // A reference with no price anywhere still ranks against DEFAULT_PRICE
    let html = r#"<html><body><h1><span id="productTitle">Mystery Item</span></h1></body></html>"#;
    let snapshot = PageSnapshot::new("https://www.amazon.com/product", html);
    let record = extract(&snapshot).unwrap();
    assert_eq!(record.price, None);
    assert_eq!(record.price_or_default(), DEFAULT_PRICE);
}

// ============================================================================
// Supported-page predicate
// ============================================================================

#[test]
fn test_product_page_predicate() {
    assert!(is_product_page(PRODUCT_URL));
    assert!(is_product_page("https://amazon.co.jp/gp/product/B00ANVIL10"));
    assert!(!is_product_page("https://www.amazon.com/s?k=anvil"));
    assert!(!is_product_page("https://shop.example.com/dp/B00ANVIL10"));
}

// ============================================================================
// JSON shape consumed by the CLI's --json output
// ============================================================================

#[test]
fn test_scored_candidate_json_shape() {
    let snapshot = PageSnapshot::new(PRODUCT_URL, WELL_FORMED_PAGE);
    let record = extract(&snapshot).unwrap();
    let ranked = rank(
        generate_variants(&record),
        record.price_or_default(),
        &Weights::default(),
        5,
    );

    let value = serde_json::to_value(&ranked[0]).unwrap();
    // Candidate fields are flattened next to score/recommended
    assert!(value.get("title").is_some());
    assert!(value.get("price").is_some());
    assert!(value.get("rating").is_some());
    assert!(value.get("review_count").is_some());
    assert!(value.get("features").is_some());
    assert!(value.get("url").is_some());
    assert!(value.get("score").is_some());
    assert_eq!(value.get("recommended"), Some(&serde_json::Value::Bool(true)));
}
