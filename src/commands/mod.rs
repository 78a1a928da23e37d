//! Command implementations for the dealrank CLI

mod analyze;
mod config;
mod misc;

pub use analyze::*;
pub use config::*;
pub use misc::*;
