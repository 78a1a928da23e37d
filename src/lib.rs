pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod product;
pub mod score;
pub mod snapshot;
pub mod variants;

pub use error::{DealrankError, Result};
