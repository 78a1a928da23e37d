//! Analyze and extract commands: obtain a snapshot, run the pipeline, print

use std::io::Read;
use std::path::Path;

use colored::Colorize;
use serde_json::json;

use dealrank::config::Settings;
use dealrank::error::{DealrankError, Result};
use dealrank::extract;
use dealrank::fetch;
use dealrank::product::{ProductRecord, ScoredCandidate};
use dealrank::score::{rank, Weights};
use dealrank::snapshot::PageSnapshot;
use dealrank::variants::generate_variants;

/// Full pipeline: extract the reference product, generate and rank alternatives
pub fn cmd_analyze(
    target: &str,
    url_hint: Option<String>,
    max: Option<usize>,
    price_weight: Option<f64>,
    rating_weight: Option<f64>,
    review_weight: Option<f64>,
    json: bool,
    force: bool,
) -> Result<()> {
    let settings = Settings::load()?;
    let saved = settings.weights();
    let weights = Weights {
        price_weight: price_weight.unwrap_or(saved.price_weight),
        rating_weight: rating_weight.unwrap_or(saved.rating_weight),
        review_weight: review_weight.unwrap_or(saved.review_weight),
    };
    let max_products = max.unwrap_or(settings.max_products);

    let snapshot = resolve_snapshot(target, url_hint, force, !json)?;
    let record = extract::extract(&snapshot)?;

    let candidates = generate_variants(&record);
    let ranked = rank(candidates, record.price_or_default(), &weights, max_products);

    if json {
        let output = json!({
            "reference": record,
            "candidates": ranked,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_record(&record);
    print_ranked(&ranked);
    Ok(())
}

/// Extraction only: show what the extractor found, without ranking
pub fn cmd_extract(
    target: &str,
    url_hint: Option<String>,
    json: bool,
    force: bool,
) -> Result<()> {
    let snapshot = resolve_snapshot(target, url_hint, force, !json)?;
    let record = extract::extract(&snapshot)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    print_record(&record);
    Ok(())
}

/// Turn a CLI target into a page snapshot.
///
/// `-` reads HTML from stdin, an existing path reads a local file, anything
/// else is treated as a live URL. Only live URLs go through the
/// supported-page check: a local file or stdin has no trustworthy address to
/// judge, so the hint (when given) is taken as-is.
fn resolve_snapshot(
    target: &str,
    url_hint: Option<String>,
    force: bool,
    verbose: bool,
) -> Result<PageSnapshot> {
    if target == "-" {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        let url = url_hint.unwrap_or_else(|| "stdin://page".to_string());
        return Ok(PageSnapshot::new(url, &html));
    }

    let path = Path::new(target);
    if path.exists() {
        let html = std::fs::read_to_string(path)?;
        let url = url_hint.unwrap_or_else(|| format!("file://{}", path.display()));
        return Ok(PageSnapshot::new(url, &html));
    }

    if !force && !extract::is_product_page(target) {
        return Err(DealrankError::UnsupportedPage(target.to_string()));
    }

    if verbose {
        println!("\n{} {}", "Fetching".cyan().bold(), target);
    }
    fetch::fetch_snapshot(target)
}

fn print_record(record: &ProductRecord) {
    println!("\n{}", record.title.bold());
    println!("  URL:     {}", record.url);
    println!("  Price:   {}", match record.price {
        Some(p) => format!("${:.2}", p),
        None => "unknown".to_string(),
    });
    println!("  Rating:  {}", match record.rating {
        Some(r) => format!("{:.1}/5", r),
        None => "unknown".to_string(),
    });
    println!("  Reviews: {}", match record.review_count {
        Some(n) => format_count(n),
        None => "unknown".to_string(),
    });
    println!("  ASIN:    {}", record.asin.as_deref().unwrap_or("unknown"));
}

fn print_ranked(ranked: &[ScoredCandidate]) {
    let use_color = atty::is(atty::Stream::Stdout);

    if ranked.is_empty() {
        println!("\nNo alternatives to rank.");
        return;
    }

    println!("\nAlternatives (best value first):\n");

    for (index, scored) in ranked.iter().enumerate() {
        let marker = if scored.recommended {
            if use_color {
                "← recommended".green().bold().to_string()
            } else {
                "← recommended".to_string()
            }
        } else {
            String::new()
        };

        println!(
            "  {}. {}  {}",
            index + 1,
            scored.candidate.title.bold(),
            marker
        );
        println!(
            "     ${:.2}  {:.1}/5  ({} reviews)",
            scored.candidate.price,
            scored.candidate.rating,
            format_count(scored.candidate.review_count),
        );
        println!(
            "     {} {}/100",
            score_bar(scored.score).dimmed(),
            scored.score.round() as u64,
        );
        if !scored.candidate.features.is_empty() {
            println!("     {}", scored.candidate.features.join(", ").dimmed());
        }
        println!();
    }
}

/// Ten-segment bar visualizing a [0,100] score
fn score_bar(score: f64) -> String {
    let filled = ((score / 10.0).round() as usize).min(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Group digits by thousands for display (1234567 -> "1,234,567")
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
