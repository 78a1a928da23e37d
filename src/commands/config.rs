//! Settings commands: show and update persisted configuration

use colored::Colorize;

use dealrank::config::Settings;
use dealrank::error::{DealrankError, Result};

/// Show current settings
pub fn cmd_config_show(json: bool) -> Result<()> {
    let settings = Settings::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!("\n{}\n", "Settings:".bold());
    println!("  Price weight:   {}", settings.price_weight);
    println!("  Rating weight:  {}", settings.rating_weight);
    println!("  Review weight:  {}", settings.review_weight);
    println!("  Max products:   {}", settings.max_products);
    println!("\n  File: {}", Settings::config_path()?.display());
    Ok(())
}

/// Update one or more settings and persist them
pub fn cmd_config_set(
    price_weight: Option<f64>,
    rating_weight: Option<f64>,
    review_weight: Option<f64>,
    max_products: Option<usize>,
) -> Result<()> {
    if price_weight.is_none()
        && rating_weight.is_none()
        && review_weight.is_none()
        && max_products.is_none()
    {
        return Err(DealrankError::ConfigError(
            "Nothing to set. Pass at least one of --price-weight, --rating-weight, --review-weight, --max-products".into(),
        ));
    }

    let mut settings = Settings::load()?;

    for (name, value) in [
        ("price-weight", price_weight),
        ("rating-weight", rating_weight),
        ("review-weight", review_weight),
    ] {
        if let Some(w) = value {
            if !w.is_finite() || w < 0.0 {
                return Err(DealrankError::ConfigError(format!(
                    "--{} must be a non-negative number, got {}",
                    name, w
                )));
            }
        }
    }

    if let Some(w) = price_weight {
        settings.price_weight = w;
    }
    if let Some(w) = rating_weight {
        settings.rating_weight = w;
    }
    if let Some(w) = review_weight {
        settings.review_weight = w;
    }
    if let Some(n) = max_products {
        if n == 0 {
            return Err(DealrankError::ConfigError(
                "--max-products must be at least 1".into(),
            ));
        }
        settings.max_products = n;
    }

    settings.save()?;
    println!("{} Settings saved.", "✓".green());
    Ok(())
}
