//! dealrank - extract product attributes and rank alternatives by cost-benefit score

use clap::Parser;

use dealrank::cli::{Cli, Commands, ConfigCommands};
use dealrank::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            target,
            url,
            max,
            price_weight,
            rating_weight,
            review_weight,
            json,
            force,
        } => commands::cmd_analyze(
            &target, url, max, price_weight, rating_weight, review_weight, json, force,
        ),

        Commands::Extract { target, url, json, force } => {
            commands::cmd_extract(&target, url, json, force)
        }

        Commands::Config(ConfigCommands::Show { json }) => commands::cmd_config_show(json),
        Commands::Config(ConfigCommands::Set {
            price_weight,
            rating_weight,
            review_weight,
            max_products,
        }) => commands::cmd_config_set(price_weight, rating_weight, review_weight, max_products),

        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
