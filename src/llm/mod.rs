//! Completion service integration module

pub mod client;
pub mod extractor;
pub mod parser;
pub mod prompts;
