use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "dealrank")]
#[command(author, version, about = "Rank marketplace product alternatives by cost-benefit score", long_about = None)]
#[command(after_help = r#"Examples:
  dealrank analyze https://www.amazon.com/dp/B00EXAMP10      Fetch, extract, rank
  dealrank analyze page.html --url "https://www.amazon.com/dp/B00EXAMP10"
  cat page.html | dealrank analyze - --json                  Pipe saved HTML
  dealrank extract https://www.amazon.com/dp/B00EXAMP10      Extraction only
  dealrank config set --rating-weight 50                     Persist a weight
  dealrank config show                                       Inspect settings
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a product page: extract attributes, rank alternatives
    #[command(after_help = r#"Examples:
  dealrank analyze https://www.amazon.com/dp/B00EXAMP10
  dealrank analyze https://www.amazon.com/dp/B00EXAMP10 --max 3
  dealrank analyze page.html --url "https://www.amazon.com/dp/B00EXAMP10"
  cat page.html | dealrank analyze -
  dealrank analyze https://example.com/item --force       Skip the page check
  dealrank analyze https://www.amazon.com/dp/B00EXAMP10 --json | jq '.candidates[0]'
"#)]
    Analyze {
        /// Page URL, local HTML file, or '-' for stdin
        #[arg(value_name = "TARGET")]
        target: String,

        /// Address hint for file or stdin input (used for identifier extraction)
        #[arg(long)]
        url: Option<String>,

        /// Maximum number of ranked results
        #[arg(long)]
        max: Option<usize>,

        /// Price weight for this run (overrides saved settings)
        #[arg(long)]
        price_weight: Option<f64>,

        /// Rating weight for this run (overrides saved settings)
        #[arg(long)]
        rating_weight: Option<f64>,

        /// Review weight for this run (overrides saved settings)
        #[arg(long)]
        review_weight: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Analyze a live URL even if it is not a recognized product page
        #[arg(long)]
        force: bool,
    },

    /// Extract product attributes from a page without ranking
    Extract {
        /// Page URL, local HTML file, or '-' for stdin
        #[arg(value_name = "TARGET")]
        target: String,

        /// Address hint for file or stdin input
        #[arg(long)]
        url: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Extract from a live URL even if it is not a recognized product page
        #[arg(long)]
        force: bool,
    },

    /// Inspect or update persisted settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update one or more settings
    #[command(after_help = r#"Examples:
  dealrank config set --price-weight 40 --rating-weight 40 --review-weight 20
  dealrank config set --max-products 10
"#)]
    Set {
        /// Weight of the price component
        #[arg(long)]
        price_weight: Option<f64>,

        /// Weight of the rating component
        #[arg(long)]
        rating_weight: Option<f64>,

        /// Weight of the review-volume component
        #[arg(long)]
        review_weight: Option<f64>,

        /// Maximum candidates in a ranked result
        #[arg(long)]
        max_products: Option<usize>,
    },
}
