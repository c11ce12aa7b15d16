pub mod cli;
pub mod cloner;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod utils;
pub mod web;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use normalizer::{normalize, NormalizeReport, Normalized};
