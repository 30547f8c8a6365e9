//! CV extractor library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod logging;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{CvExtractorError, Result};
