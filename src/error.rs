use thiserror::Error;

#[derive(Error, Debug)]
pub enum DealrankError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Extraction failed: {0}")]
    ExtractionError(String),

    #[error("Not a supported product page: {0}")]
    UnsupportedPage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DealrankError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DealrankError::HttpError(_) => Some(
                "Check your internet connection, or save the page and run:\n  dealrank analyze page.html --url <page-url>"
            ),
            DealrankError::ExtractionError(_) => Some(
                "The page may not be a product page, or its markup is unsupported.\nInspect what was found with: dealrank extract <target>"
            ),
            DealrankError::UnsupportedPage(_) => Some(
                "dealrank understands Amazon product pages (/dp/ or /gp/product/ URLs).\nPass --force to analyze the page anyway."
            ),
            DealrankError::ConfigError(_) => Some(
                "Check current settings with `dealrank config show`"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DealrankError>;
