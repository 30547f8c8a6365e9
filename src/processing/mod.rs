//! CV records and the extraction pipeline

pub mod record;
pub mod reporter;
pub mod pipeline;

pub use pipeline::ExtractionPipeline;
pub use record::{CvRecord, RunResult};
